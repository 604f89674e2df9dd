//! In-memory character store for the Roster mock API.
//!
//! The store owns an ordered collection of [`CharacterRecord`]s created at
//! startup and kept for the lifetime of the process. It answers the
//! read-side queries (filtered lists, paginated pages, statistics, detail
//! and dashboard views) and the single mutation, a priority overwrite by
//! row index.
//!
//! # Modules
//!
//! - [`seed`] -- Fixed rows plus deterministic filler generation
//! - [`query`] -- Filter, sort and paginate over record slices
//! - [`stats`] -- Collection statistics and percentage rounding
//! - [`views`] -- Detail and dashboard views
//! - [`store`] -- The [`CharacterStore`] service
//! - [`error`] -- Lookup failures
//!
//! [`CharacterRecord`]: roster_types::CharacterRecord

pub mod error;
pub mod query;
pub mod seed;
pub mod stats;
pub mod store;
pub mod views;

pub use error::StoreError;
pub use seed::{SeedConfig, fixed_characters, seed_characters};
pub use store::CharacterStore;
