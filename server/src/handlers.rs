//! HTTP request handlers for the note API.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use std::sync::Arc;

use nb_core::{Note, NoteFields};

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub store: String,
}

/// Health check endpoint.
///
/// Returns 200 if the server is healthy and the store answers a probe.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.find_all().await {
        Ok(_) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                store: "connected".to_string(),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Store health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy".to_string(),
                    store: "disconnected".to_string(),
                }),
            )
        }
    }
}

/// GET /note
///
/// Returns every stored note, in no particular order.
pub async fn list_notes(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Note>>> {
    let notes = state.store.find_all().await?;
    tracing::debug!(count = notes.len(), "Listed notes");
    Ok(Json(notes))
}

/// POST /note
///
/// The body carries title/body/color; the server assigns `id` and
/// `updated`. Contents are not validated beyond the typed boundary, so a
/// blank title is accepted here (the client gates that). Success is a bare
/// 200; any store failure (duplicate id included) is a bare 400.
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<NoteFields>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(fields) = payload.map_err(|e| ApiError::InvalidBody {
        reason: e.to_string(),
    })?;

    let note = Note::from_fields(fields);
    state.store.create(&note).await?;

    tracing::info!(id = %note.id, "Created note");
    Ok(StatusCode::OK)
}

/// GET /note/{id}
///
/// Not-found is reported as 400, indistinguishable from a store failure.
pub async fn get_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Note>> {
    let note = state
        .store
        .find_by_id(&id)
        .await?
        .ok_or(ApiError::NotFound { id })?;

    Ok(Json(note))
}

/// PUT /note/{id}
///
/// Replaces title/body/color wholesale and refreshes `updated`, then
/// re-reads and returns the stored record. The update does not check its
/// match count, so a nonexistent id yields 200 with a `null` body.
pub async fn update_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<NoteFields>, JsonRejection>,
) -> Result<Json<Option<Note>>> {
    let Json(fields) = payload.map_err(|e| ApiError::InvalidBody {
        reason: e.to_string(),
    })?;

    state.store.update_by_id(&id, &fields).await?;
    let updated = state.store.find_by_id(&id).await?;

    tracing::info!(%id, found = updated.is_some(), "Updated note");
    Ok(Json(updated))
}

/// DELETE /note/{id}
///
/// Returns 200 whether or not a record existed.
pub async fn delete_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.store.delete_by_id(&id).await?;

    tracing::info!(%id, "Deleted note");
    Ok(StatusCode::OK)
}
