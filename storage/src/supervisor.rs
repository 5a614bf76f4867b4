//! Startup connection supervision.
//!
//! The process starts disconnected and repeatedly attempts to open the store
//! connection on a fixed interval, becoming connected only on success. The
//! API is not reachable until then. By default the loop retries forever,
//! favoring availability-over-time; bounded-startup deployments set an
//! attempt cap.

use std::time::Duration;

use tokio_retry::Retry;
use tokio_retry::strategy::FixedInterval;

use nb_core::StoreError;

use crate::postgres::PostgresNoteStore;

/// Retry behavior for the startup connection.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Delay between attempts.
    pub interval: Duration,
    /// Total attempt cap. `None` retries indefinitely; a cap of 0 or 1
    /// means a single attempt.
    pub max_attempts: Option<usize>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_attempts: None,
        }
    }
}

/// Opens the Postgres store, retrying per the policy until it succeeds or
/// the attempt cap is exhausted. Each failed attempt is logged and the
/// schema is initialized once the connection is up.
pub async fn establish(
    database_url: &str,
    policy: &RetryPolicy,
) -> Result<PostgresNoteStore, StoreError> {
    let strategy: Box<dyn Iterator<Item = Duration> + Send> = match policy.max_attempts {
        Some(total) => Box::new(FixedInterval::new(policy.interval).take(total.saturating_sub(1))),
        None => Box::new(FixedInterval::new(policy.interval)),
    };

    let store = Retry::spawn(strategy, || async {
        match open(database_url).await {
            Ok(store) => Ok(store),
            Err(e) => {
                tracing::warn!(error = %e, "Store connection failed, retrying");
                Err(e)
            }
        }
    })
    .await?;

    tracing::info!("Store connected");
    Ok(store)
}

async fn open(database_url: &str) -> Result<PostgresNoteStore, StoreError> {
    let store = PostgresNoteStore::connect(database_url).await?;
    store.initialize_schema().await?;
    Ok(store)
}
