//! REST endpoint handlers for the mock API.
//!
//! Every handler translates query parameters into store calls and
//! serializes the result as JSON. Query values are parsed leniently:
//! absent, empty or unrecognised values fall back to defaults rather
//! than rejecting the request.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/statistics` | Collection statistics |
//! | `GET` | `/api/characters` | Filtered unowned characters |
//! | `GET` | `/api/characters/paginated` | Filtered, sorted, paginated page |
//! | `GET` | `/api/characters/{id}/details` | Detail view |
//! | `GET` | `/api/dashboard` | Dashboard view |
//! | `PUT` | `/api/characters/{rowIndex}/priority` | Overwrite a priority |

use std::any::Any;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use roster_types::{
    CharacterDetails, CharacterFilter, CharacterPage, CharacterRecord, Dashboard, PageRequest,
    PriorityShortcut, SortSpec, Statistics, UpdateAck,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for `GET /api/characters`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterQuery {
    /// Exact attribute match.
    pub attribute: Option<String>,
    /// `special`, `great`, `both`, `either` or `none`.
    pub shop_type: Option<String>,
    /// `set` or `unset`.
    pub priority_status: Option<String>,
    /// Case-insensitive name substring.
    pub search: Option<String>,
    /// `high` or `unset` shortcut; replaces every other filter.
    pub priority: Option<String>,
}

impl CharacterQuery {
    fn filter(&self) -> CharacterFilter {
        CharacterFilter::from_params(
            self.attribute.as_deref(),
            self.shop_type.as_deref(),
            self.priority_status.as_deref(),
            self.search.as_deref(),
        )
    }
}

/// Query parameters for `GET /api/characters/paginated`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedQuery {
    /// 1-based page number.
    pub page: Option<String>,
    /// Records per page.
    pub page_size: Option<String>,
    /// `priority`, `name`, `attribute` or `id`.
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    pub sort_order: Option<String>,
    /// Exact attribute match.
    pub attribute: Option<String>,
    /// Shop eligibility combination.
    pub shop_type: Option<String>,
    /// Priority presence.
    pub priority_status: Option<String>,
    /// Case-insensitive name substring.
    pub search: Option<String>,
}

/// Body of `PUT /api/characters/{rowIndex}/priority`.
///
/// A missing `priority` key clears the priority, same as `null`.
#[derive(Debug, Default, Deserialize)]
pub struct PriorityUpdate {
    /// New priority, or `null` to clear it.
    #[serde(default)]
    pub priority: Option<i32>,
}

// ---------------------------------------------------------------------------
// GET /api/statistics
// ---------------------------------------------------------------------------

/// Return collection statistics.
pub async fn get_statistics(State(state): State<Arc<AppState>>) -> Json<Statistics> {
    Json(state.store.read().await.statistics())
}

// ---------------------------------------------------------------------------
// GET /api/characters
// ---------------------------------------------------------------------------

/// List unowned characters.
///
/// `priority=high` and `priority=unset` select by priority and ignore the
/// other filters; any other `priority` value is ignored.
pub async fn list_characters(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<CharacterQuery>,
) -> Json<Vec<CharacterRecord>> {
    let store = state.store.read().await;

    let shortcut = query.priority.as_deref().and_then(PriorityShortcut::from_param);
    let characters = match shortcut {
        Some(shortcut) => store.unowned_by_shortcut(shortcut),
        None => store.unowned_with_filter(&query.filter()),
    };

    tracing::debug!(count = characters.len(), ?shortcut, "Listed characters");
    Json(characters)
}

// ---------------------------------------------------------------------------
// GET /api/characters/paginated
// ---------------------------------------------------------------------------

/// Filter, sort and paginate unowned characters.
pub async fn paginated_characters(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<PaginatedQuery>,
) -> Json<CharacterPage> {
    let filter = CharacterFilter::from_params(
        query.attribute.as_deref(),
        query.shop_type.as_deref(),
        query.priority_status.as_deref(),
        query.search.as_deref(),
    );
    let sort = SortSpec::from_params(query.sort_by.as_deref(), query.sort_order.as_deref());
    let page = PageRequest::from_params(query.page.as_deref(), query.page_size.as_deref());

    let result = state.store.read().await.paginate(&filter, sort, page);
    Json(result)
}

// ---------------------------------------------------------------------------
// GET /api/characters/{id}/details
// ---------------------------------------------------------------------------

/// Return the detail view for one character, owned or not.
pub async fn character_details(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<CharacterDetails>, ApiError> {
    let details = state.store.read().await.character_details(&id)?;
    Ok(Json(details))
}

// ---------------------------------------------------------------------------
// GET /api/dashboard
// ---------------------------------------------------------------------------

/// Return the dashboard view.
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<Dashboard> {
    Json(state.store.read().await.dashboard())
}

// ---------------------------------------------------------------------------
// PUT /api/characters/{rowIndex}/priority
// ---------------------------------------------------------------------------

/// Overwrite the priority of the character at `rowIndex`.
///
/// A path segment that is not a row number matches no character.
pub async fn update_priority(
    State(state): State<Arc<AppState>>,
    ApiPath(row_index): ApiPath<String>,
    ApiJson(body): ApiJson<PriorityUpdate>,
) -> Result<Json<UpdateAck>, ApiError> {
    let Ok(row) = row_index.trim().parse::<u32>() else {
        return Err(ApiError::NotFound(format!("no character at row {row_index}")));
    };

    let ack = state.store.write().await.update_priority(row, body.priority)?;
    Ok(Json(ack))
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

/// 404 for any unmatched path, and for known paths hit with a method
/// they do not serve.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Path {} not found", uri.path()))
}

/// Turn a handler panic into a JSON 500.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| (*s).to_owned()))
        .unwrap_or_else(|| String::from("handler panicked"));
    ApiError::Internal(message).into_response()
}
