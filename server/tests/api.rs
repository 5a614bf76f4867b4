//! Integration tests for the note API over the in-memory store.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;

use nb_core::Note;
use noteboard_server::routes::create_router;
use noteboard_server::state::{AppState, ServerConfig};
use storage::MemoryNoteStore;

fn app() -> Router {
    let state = Arc::new(AppState::with_store(
        Arc::new(MemoryNoteStore::new()),
        ServerConfig::default(),
    ));
    create_router(state)
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn read_body(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn list_notes(app: &Router) -> Vec<Note> {
    let response = app.clone().oneshot(get_request("/note")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    serde_json::from_slice(&read_body(response).await).unwrap()
}

async fn create_note(app: &Router, title: &str, body: &str, color: &str) -> StatusCode {
    let payload = serde_json::json!({"title": title, "body": body, "color": color});
    let response = app
        .clone()
        .oneshot(json_request("POST", "/note", &payload.to_string()))
        .await
        .unwrap();
    response.status()
}

#[tokio::test]
async fn test_list_starts_empty() {
    let app = app();
    assert!(list_notes(&app).await.is_empty());
}

#[tokio::test]
async fn test_create_returns_bare_200() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/note",
            r##"{"title":"Groceries","body":"milk, eggs","color":"#90caf9"}"##,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(read_body(response).await.is_empty());
}

#[tokio::test]
async fn test_create_then_fetch_round_trip() {
    let app = app();
    assert_eq!(
        create_note(&app, "Groceries", "milk, eggs", "#90caf9").await,
        StatusCode::OK
    );

    let notes = list_notes(&app).await;
    assert_eq!(notes.len(), 1);
    let note = &notes[0];
    assert!(!note.id.is_empty());
    assert_eq!(note.title, "Groceries");
    assert_eq!(note.body, "milk, eggs");
    assert_eq!(note.color, "#90caf9");

    let response = app
        .clone()
        .oneshot(get_request(&format!("/note/{}", note.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Note = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(&fetched, note);
}

#[tokio::test]
async fn test_get_missing_id_is_400() {
    let app = app();

    let response = app
        .clone()
        .oneshot(get_request("/note/no-such-id"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(read_body(response).await.is_empty());
}

#[tokio::test]
async fn test_put_replaces_fields_and_bumps_updated() {
    let app = app();
    create_note(&app, "Groceries", "milk, eggs", "#90caf9").await;
    let created = &list_notes(&app).await[0];
    let id = created.id.clone();
    let first_updated = created.updated;

    tokio::time::sleep(Duration::from_millis(10)).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/note/{id}"),
            r##"{"title":"Groceries v2","body":"milk, eggs, bread","color":"#ef9a9a"}"##,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Note = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(updated.title, "Groceries v2");
    assert_eq!(updated.body, "milk, eggs, bread");
    assert_eq!(updated.color, "#ef9a9a");
    assert!(updated.updated > first_updated);
}

#[tokio::test]
async fn test_put_missing_id_is_silent_null() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/note/no-such-id",
            r##"{"title":"t","body":"b","color":"#eeeeee"}"##,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(&read_body(response).await[..], b"null");
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let app = app();
    create_note(&app, "Groceries", "milk, eggs", "#90caf9").await;
    let id = list_notes(&app).await[0].id.clone();

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/note/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(read_body(response).await.is_empty());
    }
}

#[tokio::test]
async fn test_list_reflects_deletes() {
    let app = app();
    for i in 0..4 {
        create_note(&app, &format!("note {i}"), "body", "#eeeeee").await;
    }
    let victim = list_notes(&app).await[0].id.clone();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/note/{victim}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let remaining = list_notes(&app).await;
    assert_eq!(remaining.len(), 3);
    assert!(remaining.iter().all(|n| n.id != victim));
}

#[tokio::test]
async fn test_created_ids_are_unique() {
    let app = app();
    create_note(&app, "same", "payload", "#eeeeee").await;
    create_note(&app, "same", "payload", "#eeeeee").await;

    let notes = list_notes(&app).await;
    assert_eq!(notes.len(), 2);
    assert_ne!(notes[0].id, notes[1].id);
}

#[tokio::test]
async fn test_blank_title_accepted_server_side() {
    // Content validation is a client concern; the server stores blanks.
    let app = app();
    assert_eq!(
        create_note(&app, "", "body", "#eeeeee").await,
        StatusCode::OK
    );
    assert_eq!(list_notes(&app).await.len(), 1);
}

#[tokio::test]
async fn test_missing_field_is_400() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/note", r#"{"title":"no body"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(list_notes(&app).await.is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/note", "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_reports_connected_store() {
    let app = app();

    let response = app.clone().oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = String::from_utf8(read_body(response).await).unwrap();
    assert!(body.contains("healthy"));
    assert!(body.contains("connected"));
}

#[tokio::test]
async fn test_note_lifecycle_scenario() {
    let app = app();

    // Create
    assert_eq!(
        create_note(&app, "Groceries", "milk, eggs", "#90caf9").await,
        StatusCode::OK
    );

    // List contains exactly that note
    let notes = list_notes(&app).await;
    assert_eq!(notes.len(), 1);
    let id = notes[0].id.clone();
    let created_at = notes[0].updated;

    tokio::time::sleep(Duration::from_millis(10)).await;

    // Update
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/note/{id}"),
            r##"{"title":"Groceries v2","body":"milk, eggs, bread","color":"#ef9a9a"}"##,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Note = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(updated.title, "Groceries v2");
    assert!(updated.updated > created_at);

    // Delete, then a fetch by id fails with the coarse 400
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/note/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get_request(&format!("/note/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
