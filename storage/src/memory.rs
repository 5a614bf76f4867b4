//! In-memory note store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use nb_core::{Note, NoteFields, NoteStore, StoreError};
use tokio::sync::RwLock;

/// A [`NoteStore`] backed by a `HashMap` behind a `tokio` `RwLock`.
///
/// Backs the integration tests and the `memory` server backend. Iteration
/// order of the map is unspecified, which matches the contract: list
/// retrieval carries no ordering guarantee.
#[derive(Default)]
pub struct MemoryNoteStore {
    notes: RwLock<HashMap<String, Note>>,
}

impl MemoryNoteStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored notes.
    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.notes.read().await.is_empty()
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn create(&self, note: &Note) -> Result<(), StoreError> {
        let mut notes = self.notes.write().await;
        if notes.contains_key(&note.id) {
            return Err(StoreError::Conflict {
                id: note.id.clone(),
            });
        }
        notes.insert(note.id.clone(), note.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Note>, StoreError> {
        Ok(self.notes.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Note>, StoreError> {
        Ok(self.notes.read().await.get(id).cloned())
    }

    async fn update_by_id(&self, id: &str, fields: &NoteFields) -> Result<(), StoreError> {
        let mut notes = self.notes.write().await;
        // Zero matches is not an error at this layer.
        if let Some(note) = notes.get_mut(id) {
            note.title = fields.title.clone();
            note.body = fields.body.clone();
            note.color = fields.color.clone();
            note.updated = Utc::now();
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        self.notes.write().await.remove(id);
        Ok(())
    }
}
