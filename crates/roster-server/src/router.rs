//! Axum router construction for the mock API.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, put};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{dev, handlers};

/// Build the complete router.
///
/// Routes:
/// - `GET /api/statistics`
/// - `GET /api/characters`
/// - `GET /api/characters/paginated`
/// - `GET /api/characters/{id}/details`
/// - `GET /api/dashboard`
/// - `PUT /api/characters/{rowIndex}/priority`
/// - `GET /api/dev/status`, `/api/dev/test-data`, `/api/dev/reload-mock`
///
/// Unmatched paths and unsupported methods get a JSON 404, panics a
/// JSON 500. CORS allows any origin so a front end
/// on another port can call the API.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/statistics", get(handlers::get_statistics))
        .route("/api/characters", get(handlers::list_characters))
        .route("/api/characters/paginated", get(handlers::paginated_characters))
        // Path params at one position must share a name; the priority
        // handler reads `{id}` as a row index.
        .route("/api/characters/{id}/details", get(handlers::character_details))
        .route("/api/characters/{id}/priority", put(handlers::update_priority))
        .route("/api/dashboard", get(handlers::get_dashboard))
        // Development
        .route("/api/dev/status", get(dev::status))
        .route("/api/dev/test-data", get(dev::test_data))
        .route("/api/dev/reload-mock", get(dev::reload_mock))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
