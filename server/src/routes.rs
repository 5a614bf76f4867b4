//! Route definitions for the Noteboard server.

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers;
use crate::state::AppState;

/// Creates the Axum router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow any origin for the SPA client
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/note",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route(
            "/note/{id}",
            get(handlers::get_note)
                .put(handlers::update_note)
                .delete(handlers::delete_note),
        );

    // Non-API requests fall back to the SPA bundle when it is present.
    let static_dir = std::path::Path::new(&state.config.static_dir);
    if static_dir.is_dir() {
        let index = static_dir.join("index.html");
        router =
            router.fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)));
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ServerConfig;
    use storage::MemoryNoteStore;

    #[test]
    fn test_router_construction() {
        let state = Arc::new(AppState::with_store(
            Arc::new(MemoryNoteStore::new()),
            ServerConfig::default(),
        ));
        let _router = create_router(state);
    }
}
