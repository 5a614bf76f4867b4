//! Storage error types.

use thiserror::Error;

/// Errors surfaced by a [`crate::traits::NoteStore`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A create collided with an existing note id.
    #[error("Duplicate note id: {id}")]
    Conflict { id: String },

    /// The store connection could not be opened or was lost.
    #[error("Store connection error: {reason}")]
    Connection { reason: String },

    /// Any other backend failure (query, serialization, I/O).
    #[error("Store backend error: {reason}")]
    Backend { reason: String },
}
