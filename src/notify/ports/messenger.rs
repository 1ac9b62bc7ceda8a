//! Messenger port for outbound chat delivery.

use crate::notify::domain::{DispatchTarget, RecipientId};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for messenger operations.
pub type MessengerResult<T> = Result<T, MessengerError>;

/// Chat-platform view of a recipient, as needed for message rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientProfile {
    mention: String,
}

impl RecipientProfile {
    /// Creates a profile with the platform's mention markup for the user.
    #[must_use]
    pub fn new(mention: impl Into<String>) -> Self {
        Self {
            mention: mention.into(),
        }
    }

    /// Returns the mention markup to embed in message text.
    #[must_use]
    pub fn mention(&self) -> &str {
        &self.mention
    }
}

/// Contract for delivering notification messages.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Resolves a recipient identifier to its chat-platform profile.
    ///
    /// Returns `None` when the platform does not know the identifier; the
    /// dispatcher then silently skips that recipient's targets.
    ///
    /// # Errors
    ///
    /// Returns [`MessengerError`] when the platform lookup itself fails.
    async fn resolve_recipient(
        &self,
        recipient: &RecipientId,
    ) -> MessengerResult<Option<RecipientProfile>>;

    /// Sends one message to one target.
    ///
    /// # Errors
    ///
    /// Returns [`MessengerError::DeliveryFailed`] when the channel rejects
    /// or cannot receive the message. Failures are per-target: the caller
    /// continues with remaining targets.
    async fn send(&self, target: &DispatchTarget, text: &str) -> MessengerResult<()>;
}

/// Errors returned by messenger implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MessengerError {
    /// The message could not be delivered to the target.
    #[error("delivery to {target} failed: {reason}")]
    DeliveryFailed {
        /// Target the delivery was attempted for.
        target: String,
        /// Human-readable delivery failure.
        reason: String,
    },
}

impl MessengerError {
    /// Creates a delivery failure for the given target.
    #[must_use]
    pub fn delivery_failed(target: &DispatchTarget, reason: impl Into<String>) -> Self {
        Self::DeliveryFailed {
            target: target.to_string(),
            reason: reason.into(),
        }
    }
}
