//! Concurrency limiter for cross-scope poll cycles.
//!
//! Cycles for different scopes are independent, but they share the
//! outbound request budget to the board API. The limiter caps how many
//! cycles run at once per credential set.

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Error returned when the limiter has been shut down.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cycle limiter is closed")]
pub struct CycleLimiterError;

/// Permit to run one poll cycle; the slot frees on drop.
#[derive(Debug)]
pub struct CyclePermit {
    _permit: OwnedSemaphorePermit,
}

/// Cheaply cloneable cap on concurrently running cycles.
#[derive(Debug, Clone)]
pub struct CycleLimiter {
    permits: Arc<Semaphore>,
}

impl CycleLimiter {
    /// Creates a limiter allowing up to `max_concurrent` cycles at once.
    #[must_use]
    pub fn new(max_concurrent: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(max_concurrent)),
        }
    }

    /// Waits for a free slot and returns its permit.
    ///
    /// # Errors
    ///
    /// Returns [`CycleLimiterError`] when the underlying semaphore has
    /// been closed, which never happens for limiters created by
    /// [`CycleLimiter::new`].
    pub async fn acquire(&self) -> Result<CyclePermit, CycleLimiterError> {
        let permit = Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .map_err(|_| CycleLimiterError)?;
        Ok(CyclePermit { _permit: permit })
    }

    /// Returns how many slots are currently free.
    #[must_use]
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }
}
