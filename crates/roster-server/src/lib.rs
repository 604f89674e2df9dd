//! Mock HTTP API for local front-end development.
//!
//! This crate serves the Roster character data over a small REST
//! surface so the front end can run without its spreadsheet-backed
//! production backend:
//!
//! - **Read endpoints** for statistics, filtered and paginated listings,
//!   character details and the dashboard
//! - **One write endpoint** to overwrite a character's priority
//! - **Development endpoints** for status, a data sample and reseeding
//! - **An RPC shim** ([`rpc::RpcCall`]) that turns the front end's
//!   server-function calls into the matching HTTP requests
//!
//! # Architecture
//!
//! A single [`CharacterStore`] lives in [`AppState`] behind a
//! `tokio::sync::RwLock`. Handlers hold the read lock for queries and
//! the write lock for the priority update and reload. Nothing is
//! persisted; restarting the process reseeds the collection.
//!
//! [`CharacterStore`]: roster_store::CharacterStore

pub mod config;
pub mod dev;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod rpc;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use config::{ConfigError, RosterConfig};
pub use error::ApiError;
pub use router::build_router;
pub use rpc::{RpcCall, RpcClient, RpcError};
pub use server::{ServerError, start_server};
pub use state::AppState;
