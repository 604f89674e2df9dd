//! Shared application state for the mock API.
//!
//! [`AppState`] owns the [`CharacterStore`] behind a read-write lock.
//! Read endpoints share the lock; the priority update and the dev
//! reload take it exclusively.

use std::sync::Arc;

use roster_store::{CharacterStore, SeedConfig};
use tokio::sync::RwLock;

use crate::config::{RosterConfig, ServerConfig};

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Debug)]
pub struct AppState {
    /// The character collection.
    pub store: Arc<RwLock<CharacterStore>>,
    /// Seed used at startup and by the dev reload endpoint.
    pub dataset: SeedConfig,
    /// Listener settings reported by the status endpoint.
    pub server: ServerConfig,
}

impl AppState {
    /// Create state around an existing store.
    pub fn new(store: CharacterStore, dataset: SeedConfig, server: ServerConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            dataset,
            server,
        }
    }

    /// Seed a fresh store from `config`.
    pub fn from_config(config: &RosterConfig) -> Self {
        Self::new(
            CharacterStore::seeded(&config.dataset),
            config.dataset,
            config.server.clone(),
        )
    }

    /// Rebuild the collection from the configured seed, discarding any
    /// priority edits. Returns the new record count.
    pub async fn reload(&self) -> usize {
        let fresh = CharacterStore::seeded(&self.dataset);
        let count = fresh.len();
        *self.store.write().await = fresh;
        count
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&RosterConfig::default())
    }
}
