use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Default color assigned to a fresh draft.
pub const DEFAULT_COLOR: &str = "#90caf9";

/// A stored note.
///
/// `id` is the sole external reference and never changes after creation.
/// `updated` is set server-side on create and refreshed on every successful
/// mutation; it is serialized as an ISO-8601 timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub body: String,
    pub color: String,
    pub updated: DateTime<Utc>,
}

impl Note {
    /// Creates a new note from its mutable fields, assigning a fresh id and
    /// timestamp. Called by the API layer on create.
    #[must_use]
    pub fn from_fields(fields: NoteFields) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: fields.title,
            body: fields.body,
            color: fields.color,
            updated: Utc::now(),
        }
    }
}

/// The mutable subset of a note: the POST/PUT request body and the store
/// update payload. `id` and `updated` are never client-supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteFields {
    pub title: String,
    pub body: String,
    pub color: String,
}

/// A client-side draft of a note being written or edited.
///
/// Title and body must be non-blank after trimming before the client issues
/// any network call; the server deliberately performs no content validation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NoteDraft {
    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub body: String,
    pub color: String,
}

impl Default for NoteDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl NoteDraft {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            color: color.into(),
        }
    }

    /// The request payload for this draft. Contents are sent as typed, not
    /// trimmed; trimming applies only to the validation check.
    #[must_use]
    pub fn fields(&self) -> NoteFields {
        NoteFields {
            title: self.title.clone(),
            body: self.body.clone(),
            color: self.color.clone(),
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
