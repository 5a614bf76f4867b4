//! PostgreSQL note store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use nb_core::{Note, NoteFields, NoteStore, StoreError};
use sqlx::{PgPool, Row, postgres::PgPoolOptions};

/// A [`NoteStore`] backed by a PostgreSQL pool.
///
/// The `notes` table keys records by the note id; the primary key enforces
/// the uniqueness invariant, and a unique violation on insert surfaces as
/// [`StoreError::Conflict`].
pub struct PostgresNoteStore {
    pool: PgPool,
}

impl PostgresNoteStore {
    /// Opens a connection pool against the given database URL.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .map_err(|e| StoreError::Connection {
                reason: e.to_string(),
            })?;
        Ok(Self { pool })
    }

    /// Creates a store from an existing pool (useful for testing).
    #[must_use]
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `notes` table if it does not exist.
    pub async fn initialize_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS notes (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                body TEXT NOT NULL,
                color TEXT NOT NULL,
                updated TIMESTAMPTZ NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(backend)?;

        Ok(())
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn backend(e: sqlx::Error) -> StoreError {
    StoreError::Backend {
        reason: e.to_string(),
    }
}

fn row_to_note(row: &sqlx::postgres::PgRow) -> Note {
    Note {
        id: row.get("id"),
        title: row.get("title"),
        body: row.get("body"),
        color: row.get("color"),
        updated: row.get::<DateTime<Utc>, _>("updated"),
    }
}

#[async_trait]
impl NoteStore for PostgresNoteStore {
    async fn create(&self, note: &Note) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO notes (id, title, body, color, updated)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&note.id)
        .bind(&note.title)
        .bind(&note.body)
        .bind(&note.color)
        .bind(note.updated)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::Conflict {
                id: note.id.clone(),
            },
            _ => backend(e),
        })?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Note>, StoreError> {
        // No ORDER BY: list retrieval carries no ordering guarantee.
        let rows = sqlx::query("SELECT id, title, body, color, updated FROM notes")
            .fetch_all(&self.pool)
            .await
            .map_err(backend)?;

        Ok(rows.iter().map(row_to_note).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Note>, StoreError> {
        let row = sqlx::query("SELECT id, title, body, color, updated FROM notes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?;

        Ok(row.as_ref().map(row_to_note))
    }

    async fn update_by_id(&self, id: &str, fields: &NoteFields) -> Result<(), StoreError> {
        // Zero matched rows is still success; the match count is not checked.
        sqlx::query(
            "UPDATE notes SET title = $2, body = $3, color = $4, updated = $5 WHERE id = $1",
        )
        .bind(id)
        .bind(&fields.title)
        .bind(&fields.body)
        .bind(&fields.color)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(backend)?;

        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(backend)?;

        Ok(())
    }
}
