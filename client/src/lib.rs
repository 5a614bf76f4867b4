//! # Noteboard Client
//!
//! Headless client for the note API: a thin typed gateway issuing the five
//! REST calls, and the session state machine that owns the synchronized
//! note list, the active dialog, and the notification queue.

pub mod error;
pub mod gateway;
pub mod session;

pub use error::ClientError;
pub use gateway::NoteGateway;
pub use session::{DialogState, NoteSession, Notification, Severity, SubmitOutcome};
