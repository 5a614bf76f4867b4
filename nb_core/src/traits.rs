//! Core traits for the Noteboard system.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::{Note, NoteFields};

/// Durable key-indexed note storage.
///
/// Uniqueness of `id` is enforced here; a duplicate-id create fails with
/// [`StoreError::Conflict`]. Update and delete report success even when zero
/// records matched, so callers cannot distinguish a no-op from a hit at this
/// layer. List order is unspecified.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Inserts a fully formed note.
    async fn create(&self, note: &Note) -> Result<(), StoreError>;

    /// Returns all notes, in no particular order.
    async fn find_all(&self) -> Result<Vec<Note>, StoreError>;

    /// Returns the note with the given id, if any.
    async fn find_by_id(&self, id: &str) -> Result<Option<Note>, StoreError>;

    /// Replaces title/body/color wholesale and refreshes `updated`.
    /// Succeeds even if no record matched.
    async fn update_by_id(&self, id: &str, fields: &NoteFields) -> Result<(), StoreError>;

    /// Removes at most one record. Succeeds even if none matched.
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;
}
