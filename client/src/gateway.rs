//! Typed pass-through gateway for the note API.

use nb_core::NoteFields;
use reqwest::Response;

use crate::error::ClientError;

/// One method per API operation, each a single HTTP call returning the raw
/// response. No retries, no caching, no request coalescing; interpreting
/// status and body belongs to the session layer.
pub struct NoteGateway {
    client: reqwest::Client,
    base_url: String,
}

impl NoteGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /note
    pub async fn fetch_all(&self) -> Result<Response, ClientError> {
        let url = format!("{}/note", self.base_url);
        Ok(self.client.get(&url).send().await?)
    }

    /// GET /note/{id}
    pub async fn fetch(&self, id: &str) -> Result<Response, ClientError> {
        let url = format!("{}/note/{id}", self.base_url);
        Ok(self.client.get(&url).send().await?)
    }

    /// POST /note
    pub async fn create(&self, fields: &NoteFields) -> Result<Response, ClientError> {
        let url = format!("{}/note", self.base_url);
        Ok(self.client.post(&url).json(fields).send().await?)
    }

    /// PUT /note/{id}
    pub async fn update(&self, id: &str, fields: &NoteFields) -> Result<Response, ClientError> {
        let url = format!("{}/note/{id}", self.base_url);
        Ok(self.client.put(&url).json(fields).send().await?)
    }

    /// DELETE /note/{id}
    pub async fn remove(&self, id: &str) -> Result<Response, ClientError> {
        let url = format!("{}/note/{id}", self.base_url);
        Ok(self.client.delete(&url).send().await?)
    }
}
