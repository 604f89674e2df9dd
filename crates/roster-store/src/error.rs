//! Error types for the `roster-store` crate.
//!
//! Lookups that miss are the only failure mode: the store never rejects
//! malformed query options, it degrades them to no-ops instead.

/// Errors returned by [`CharacterStore`](crate::CharacterStore) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No character has the requested `id`.
    #[error("character not found: {0}")]
    CharacterNotFound(String),

    /// No character has the requested `rowIndex`.
    #[error("no character at row {0}")]
    RowNotFound(u32),
}
