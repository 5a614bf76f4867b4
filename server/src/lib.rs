//! # Noteboard Server
//!
//! HTTP API service that stores and serves color-tagged notes.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌─────────────────┐     ┌─────────────────┐
//! │   PostgreSQL    │◄────│ Noteboard Server│◄────│  Client session │
//! │  (note store)   │     │  (this crate)   │     │   (gateway)     │
//! └─────────────────┘     └─────────────────┘     └─────────────────┘
//! ```
//!
//! ## Endpoints
//!
//! - `GET /note` - All notes
//! - `POST /note` - Create a note (server assigns id and timestamp)
//! - `GET /note/{id}` - One note by id
//! - `PUT /note/{id}` - Replace a note's title/body/color
//! - `DELETE /note/{id}` - Remove a note
//! - `GET /health` - Health check endpoint
//!
//! Failures use the coarse 200/400 contract: every store failure maps to an
//! empty-bodied 400, and not-found is indistinguishable from error on the
//! single-note GET. Non-API requests fall back to a static SPA directory.
//!
//! The server only starts accepting requests once the connection supervisor
//! has opened the store connection.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use server::NoteboardServer;
pub use state::{AppState, ServerConfig};
