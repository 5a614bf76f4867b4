//! Error types for the Noteboard client.

use thiserror::Error;

/// Errors surfaced by the gateway.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS,
    /// timeout). HTTP-level failures are not errors at this layer; the
    /// raw response is handed to the caller.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_network_error_display() {
        let err: ClientError = reqwest::Client::new()
            .get("http://127.0.0.1:9/note")
            .send()
            .await
            .unwrap_err()
            .into();

        assert!(err.to_string().starts_with("Network error:"));
    }
}
