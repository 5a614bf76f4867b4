//! Session state machine.
//!
//! Owns the synchronized note list, the active dialog, and the notification
//! queue, and drives every gateway call. Dialog state is a single tagged
//! value, so combinations like "edit dialog open with no note selected" are
//! unrepresentable. Refresh is an explicit event: once on session start and
//! once after each successful mutation.

use std::collections::VecDeque;

use reqwest::StatusCode;
use validator::{Validate, ValidationErrors};

use nb_core::{Note, NoteDraft};

use crate::gateway::NoteGateway;

/// Soft bound on title length, enforced by the client only.
pub const TITLE_MAX_CHARS: usize = 120;

/// Remaining characters before a title hits the soft bound.
#[must_use]
pub fn title_chars_remaining(title: &str) -> usize {
    TITLE_MAX_CHARS.saturating_sub(title.chars().count())
}

const SERVER_ERROR_MSG: &str = "A server error has occurred.";

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient user-facing message shown after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

/// The active dialog, if any.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DialogState {
    /// No note open.
    #[default]
    Idle,
    /// A note is open in the view dialog.
    Viewing(Note),
    /// A note is open in the edit dialog.
    Editing(Note),
}

/// Result of submitting a draft (create or edit).
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Accepted by the server; the caller should clear its form.
    Saved,
    /// Field-level validation failed; no network call was made and the
    /// form contents are kept.
    Invalid(ValidationErrors),
    /// The server rejected the call or was unreachable; form contents are
    /// kept and a warning notification was queued.
    Failed,
}

/// Client-side coordinator for the note list, dialogs, and notifications.
pub struct NoteSession {
    gateway: NoteGateway,
    notes: Vec<Note>,
    dialog: DialogState,
    notifications: VecDeque<Notification>,
}

impl NoteSession {
    #[must_use]
    pub fn new(gateway: NoteGateway) -> Self {
        Self {
            gateway,
            notes: Vec::new(),
            dialog: DialogState::Idle,
            notifications: VecDeque::new(),
        }
    }

    /// The synchronized note list, in server order (unspecified).
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    #[must_use]
    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    /// Removes and returns the oldest queued notification.
    pub fn pop_notification(&mut self) -> Option<Notification> {
        self.notifications.pop_front()
    }

    /// Performs the initial refresh. Call once after construction.
    pub async fn start(&mut self) {
        self.refresh().await;
    }

    /// Fetches all notes and replaces the list wholesale on success. On any
    /// failure the list is left untouched and a warning is queued.
    pub async fn refresh(&mut self) {
        match self.gateway.fetch_all().await {
            Ok(response) if response.status() == StatusCode::OK => {
                match response.json::<Vec<Note>>().await {
                    Ok(notes) => self.notes = notes,
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to decode note list");
                        self.warn_server_error();
                    }
                }
            }
            Ok(_) => self.warn_server_error(),
            Err(e) => {
                tracing::warn!(error = %e, "Refresh request failed");
                self.warn_server_error();
            }
        }
    }

    /// Creates a note from a draft.
    ///
    /// Blank (or whitespace-only) title or body fails validation before any
    /// network call. On server success the list is refreshed and a success
    /// notification queued; on failure the caller keeps its form contents.
    pub async fn create(&mut self, draft: &NoteDraft) -> SubmitOutcome {
        if let Err(errors) = draft.validate() {
            return SubmitOutcome::Invalid(errors);
        }

        match self.gateway.create(&draft.fields()).await {
            Ok(response) if response.status() == StatusCode::OK => {
                self.refresh().await;
                self.notify(Severity::Success, "Note saved!");
                SubmitOutcome::Saved
            }
            Ok(_) => {
                self.warn_server_error();
                SubmitOutcome::Failed
            }
            Err(e) => {
                tracing::warn!(error = %e, "Create request failed");
                self.warn_server_error();
                SubmitOutcome::Failed
            }
        }
    }

    /// Fetches a note by id and opens the view dialog on success. On
    /// failure the dialog is left as it was.
    pub async fn open(&mut self, id: &str) {
        match self.gateway.fetch(id).await {
            Ok(response) if response.status() == StatusCode::OK => {
                match response.json::<Note>().await {
                    Ok(note) => self.dialog = DialogState::Viewing(note),
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to decode note");
                        self.warn_server_error();
                    }
                }
            }
            Ok(_) => self.warn_server_error(),
            Err(e) => {
                tracing::warn!(error = %e, "Open request failed");
                self.warn_server_error();
            }
        }
    }

    /// Moves the viewed note into the edit dialog. No-op unless a note is
    /// being viewed.
    pub fn begin_edit(&mut self) {
        if let DialogState::Viewing(note) = &self.dialog {
            self.dialog = DialogState::Editing(note.clone());
        }
    }

    /// Abandons the edit dialog, returning to the view dialog.
    pub fn cancel_edit(&mut self) {
        if let DialogState::Editing(note) = &self.dialog {
            self.dialog = DialogState::Viewing(note.clone());
        }
    }

    /// Closes any open dialog.
    pub fn close(&mut self) {
        self.dialog = DialogState::Idle;
    }

    /// Submits an edit of the note currently in the edit dialog.
    ///
    /// Validation mirrors [`Self::create`]. On success the list is
    /// refreshed, the view dialog shows the server's returned record, and
    /// an info notification is queued; on failure the edit dialog stays
    /// open.
    pub async fn submit_edit(&mut self, draft: &NoteDraft) -> SubmitOutcome {
        let DialogState::Editing(note) = &self.dialog else {
            return SubmitOutcome::Failed;
        };
        let id = note.id.clone();

        if let Err(errors) = draft.validate() {
            return SubmitOutcome::Invalid(errors);
        }

        match self.gateway.update(&id, &draft.fields()).await {
            Ok(response) if response.status() == StatusCode::OK => {
                match response.json::<Option<Note>>().await {
                    Ok(updated) => {
                        self.refresh().await;
                        self.dialog = match updated {
                            Some(note) => DialogState::Viewing(note),
                            // The note vanished server-side between the
                            // update and the re-read.
                            None => DialogState::Idle,
                        };
                        self.notify(Severity::Info, "Note edited.");
                        SubmitOutcome::Saved
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to decode updated note");
                        self.warn_server_error();
                        SubmitOutcome::Failed
                    }
                }
            }
            Ok(_) => {
                self.warn_server_error();
                SubmitOutcome::Failed
            }
            Err(e) => {
                tracing::warn!(error = %e, "Update request failed");
                self.warn_server_error();
                SubmitOutcome::Failed
            }
        }
    }

    /// Deletes the note currently in the view dialog. On success the list
    /// is refreshed, the dialog closes, and an error-severity notification
    /// is queued. No-op unless a note is being viewed.
    pub async fn delete_open(&mut self) {
        let DialogState::Viewing(note) = &self.dialog else {
            return;
        };
        let id = note.id.clone();

        match self.gateway.remove(&id).await {
            Ok(response) if response.status() == StatusCode::OK => {
                self.refresh().await;
                self.dialog = DialogState::Idle;
                self.notify(Severity::Error, "Note deleted!");
            }
            Ok(_) => self.warn_server_error(),
            Err(e) => {
                tracing::warn!(error = %e, "Delete request failed");
                self.warn_server_error();
            }
        }
    }

    fn notify(&mut self, severity: Severity, message: impl Into<String>) {
        self.notifications.push_back(Notification {
            severity,
            message: message.into(),
        });
    }

    fn warn_server_error(&mut self) {
        self.notify(Severity::Warning, SERVER_ERROR_MSG);
    }
}
