//! Cycle-level errors with user-facing guidance.

use super::limiter::CycleLimiterError;
use crate::board::ports::{BoardGatewayError, SnapshotStoreError};
use crate::notify::ports::PreferencesError;
use thiserror::Error;

/// Errors that end a poll cycle.
///
/// Per-card and per-target failures never surface here; they are isolated
/// into the cycle report. Only configuration gaps, fetch failures, and
/// persistence failures are fatal to a cycle.
#[derive(Debug, Error)]
pub enum CycleError {
    /// The scope has never been configured.
    #[error("scope is not configured")]
    NotConfigured,

    /// The scope has no board credentials.
    #[error("no board credentials configured for scope")]
    NoCredentials,

    /// The scope has credentials but no board to watch.
    #[error("no board configured for scope")]
    NoBoardConfigured,

    /// The board could not be fetched; the cycle aborted with no snapshot
    /// mutation.
    #[error(transparent)]
    BoardUnavailable(#[from] BoardGatewayError),

    /// The preferences store could not be read.
    #[error(transparent)]
    Preferences(#[from] PreferencesError),

    /// The snapshot store failed outside of the recoverable corrupt-state
    /// path.
    #[error(transparent)]
    Store(#[from] SnapshotStoreError),

    /// The cycle limiter was shut down before a permit became available.
    #[error(transparent)]
    Limiter(#[from] CycleLimiterError),
}

impl CycleError {
    /// Returns the guidance shown to end users for configuration gaps.
    ///
    /// Fetch and persistence failures have no guidance; their `Display`
    /// text is the user-visible error description.
    #[must_use]
    pub const fn guidance(&self) -> Option<&'static str> {
        match self {
            Self::NotConfigured | Self::NoCredentials => {
                Some("Set your board API credentials and board ID first.")
            }
            Self::NoBoardConfigured => Some("Set the board ID to watch first."),
            Self::BoardUnavailable(_) | Self::Preferences(_) | Self::Store(_) | Self::Limiter(_) => {
                None
            }
        }
    }
}
