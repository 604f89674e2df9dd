//! Development-only endpoints.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/dev/status` | Liveness and environment |
//! | `GET` | `/api/dev/test-data` | Statistics plus a sample of unowned characters |
//! | `GET` | `/api/dev/reload-mock` | Reseed the store |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use chrono::{DateTime, Utc};
use roster_types::{CharacterFilter, CharacterRecord, Statistics};
use serde::Serialize;

use crate::state::AppState;

/// Number of characters included in the test-data sample.
const SAMPLE_SIZE: usize = 3;

/// Body of `GET /api/dev/status`.
#[derive(Debug, Clone, Serialize)]
pub struct DevStatus {
    /// Always `"running"`.
    pub status: &'static str,
    /// Configured environment label.
    pub environment: String,
    /// Configured listener port.
    pub port: u16,
    /// Time of the response.
    pub timestamp: DateTime<Utc>,
}

/// Body of `GET /api/dev/test-data`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevTestData {
    /// Current statistics.
    pub stats: Statistics,
    /// Number of unowned characters.
    pub character_count: usize,
    /// The first few unowned characters.
    pub sample_characters: Vec<CharacterRecord>,
    /// Time of the response.
    pub timestamp: DateTime<Utc>,
}

/// Body of `GET /api/dev/reload-mock`.
#[derive(Debug, Clone, Serialize)]
pub struct ReloadAck {
    /// Always `true`.
    pub success: bool,
    /// Human-readable confirmation.
    pub message: String,
}

/// Report that the server is up.
pub async fn status(State(state): State<Arc<AppState>>) -> Json<DevStatus> {
    Json(DevStatus {
        status: "running",
        environment: state.server.environment.clone(),
        port: state.server.port,
        timestamp: Utc::now(),
    })
}

/// Statistics plus the first few unowned characters.
pub async fn test_data(State(state): State<Arc<AppState>>) -> Json<DevTestData> {
    let store = state.store.read().await;
    let unowned = store.unowned_with_filter(&CharacterFilter::default());

    Json(DevTestData {
        stats: store.statistics(),
        character_count: unowned.len(),
        sample_characters: unowned.into_iter().take(SAMPLE_SIZE).collect(),
        timestamp: Utc::now(),
    })
}

/// Rebuild the store from the configured seed.
pub async fn reload_mock(State(state): State<Arc<AppState>>) -> Json<ReloadAck> {
    let count = state.reload().await;
    tracing::info!(count, seed = state.dataset.seed, "Mock data reloaded");

    Json(ReloadAck {
        success: true,
        message: String::from("モックデータをリロードしました"),
    })
}
