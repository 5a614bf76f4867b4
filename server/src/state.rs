//! Application state and configuration for the Noteboard server.

use std::sync::Arc;
use std::time::Duration;

use nb_core::NoteStore;
use storage::supervisor::{self, RetryPolicy};
use storage::{MemoryNoteStore, PostgresNoteStore};

use crate::error::{ApiError, Result};

/// Which [`NoteStore`] implementation backs the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// Durable Postgres store (requires `DATABASE_URL`).
    #[default]
    Postgres,
    /// In-process memory store; state is lost on restart.
    Memory,
}

impl StoreBackend {
    fn parse(value: &str) -> Result<Self> {
        match value {
            "postgres" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(ApiError::Configuration(format!(
                "Invalid STORE_BACKEND: {other}"
            ))),
        }
    }
}

/// Configuration for the Noteboard server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Store backend selection.
    pub backend: StoreBackend,
    /// `PostgreSQL` connection URL; required for the postgres backend.
    pub database_url: Option<String>,
    /// Host to bind the server to.
    pub host: String,
    /// Port to bind the server to.
    pub port: u16,
    /// Directory served for non-API requests, with an `index.html`
    /// fallback. Skipped when the directory does not exist.
    pub static_dir: String,
    /// Delay between store connection attempts.
    pub connect_retry: Duration,
    /// Total connection attempt cap; `None` retries forever.
    pub connect_max_attempts: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Postgres,
            database_url: None,
            host: "0.0.0.0".to_string(),
            port: 8080,
            static_dir: "pub_html".to_string(),
            connect_retry: Duration::from_secs(1),
            connect_max_attempts: None,
        }
    }
}

impl ServerConfig {
    /// Creates a configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let backend = match std::env::var("STORE_BACKEND") {
            Ok(value) => StoreBackend::parse(&value)?,
            Err(_) => StoreBackend::Postgres,
        };

        let database_url = std::env::var("DATABASE_URL").ok();
        if backend == StoreBackend::Postgres && database_url.is_none() {
            return Err(ApiError::Configuration("DATABASE_URL not set".to_string()));
        }

        Ok(Self {
            backend,
            database_url,
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "pub_html".to_string()),
            connect_retry: Duration::from_millis(
                std::env::var("CONNECT_RETRY_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(1000),
            ),
            connect_max_attempts: std::env::var("CONNECT_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok()),
        })
    }

    fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            interval: self.connect_retry,
            max_attempts: self.connect_max_attempts,
        }
    }
}

/// Shared application state for Axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// The note store behind the API.
    pub store: Arc<dyn NoteStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Creates the application state, opening the configured store.
    ///
    /// For the postgres backend this blocks in the connection supervisor
    /// until the store connection is up (or the attempt cap is exhausted),
    /// so the API is never reachable while disconnected.
    pub async fn new(config: ServerConfig) -> Result<Self> {
        let store: Arc<dyn NoteStore> = match config.backend {
            StoreBackend::Memory => Arc::new(MemoryNoteStore::new()),
            StoreBackend::Postgres => {
                let url = config
                    .database_url
                    .as_deref()
                    .ok_or_else(|| ApiError::Configuration("DATABASE_URL not set".to_string()))?;
                let store: PostgresNoteStore =
                    supervisor::establish(url, &config.retry_policy()).await?;
                Arc::new(store)
            }
        };

        Ok(Self {
            store,
            config: Arc::new(config),
        })
    }

    /// Creates application state from an existing store (useful for testing).
    #[must_use]
    pub fn with_store(store: Arc<dyn NoteStore>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.backend, StoreBackend::Postgres);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, "pub_html");
        assert_eq!(config.connect_retry, Duration::from_secs(1));
        assert!(config.connect_max_attempts.is_none());
    }

    #[test]
    fn test_backend_parse() {
        assert_eq!(
            StoreBackend::parse("postgres").unwrap(),
            StoreBackend::Postgres
        );
        assert_eq!(StoreBackend::parse("memory").unwrap(), StoreBackend::Memory);
        assert!(StoreBackend::parse("mongo").is_err());
    }

    #[tokio::test]
    async fn test_memory_state_needs_no_url() {
        let config = ServerConfig {
            backend: StoreBackend::Memory,
            ..Default::default()
        };

        let state = AppState::new(config).await.unwrap();
        assert!(state.store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_postgres_state_requires_url() {
        let config = ServerConfig {
            backend: StoreBackend::Postgres,
            database_url: None,
            ..Default::default()
        };

        let result = AppState::new(config).await;
        assert!(matches!(result, Err(ApiError::Configuration(_))));
    }
}
