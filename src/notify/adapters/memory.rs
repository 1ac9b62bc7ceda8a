//! In-memory notify adapters for tests and embedding.

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, RwLock};

use crate::board::domain::ScopeId;
use crate::notify::{
    domain::{ChannelName, DispatchTarget, RecipientId, ScopeRegistry},
    ports::{
        Messenger, MessengerError, MessengerResult, PreferencesError, PreferencesResult,
        PreferencesStore, RecipientProfile,
    },
};

/// Thread-safe in-memory preferences store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferences {
    state: Arc<RwLock<HashMap<ScopeId, ScopeRegistry>>>,
}

impl InMemoryPreferences {
    /// Creates an empty preferences store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the registry served for a scope.
    pub fn set_registry(&self, scope: ScopeId, registry: ScopeRegistry) {
        if let Ok(mut state) = self.state.write() {
            state.insert(scope, registry);
        }
    }
}

#[async_trait]
impl PreferencesStore for InMemoryPreferences {
    async fn scope_registry(&self, scope: &ScopeId) -> PreferencesResult<Option<ScopeRegistry>> {
        let state = self
            .state
            .read()
            .map_err(|err| PreferencesError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(state.get(scope).cloned())
    }
}

/// One message captured by [`RecordingMessenger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    /// Target the message was delivered to.
    pub target: DispatchTarget,
    /// Rendered message text.
    pub text: String,
}

#[derive(Debug, Default)]
struct RecordingState {
    sent: Vec<SentMessage>,
    failing_channels: BTreeSet<ChannelName>,
    unknown_recipients: BTreeSet<RecipientId>,
}

/// Messenger that records deliveries instead of talking to a platform.
///
/// Every recipient resolves with `@<id>` mention markup unless marked
/// unknown; sends into channels marked failing return a delivery error.
#[derive(Debug, Clone, Default)]
pub struct RecordingMessenger {
    state: Arc<RwLock<RecordingState>>,
}

impl RecordingMessenger {
    /// Creates a messenger with no recorded messages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every send into the channel fail.
    pub fn fail_channel(&self, channel: ChannelName) {
        if let Ok(mut state) = self.state.write() {
            state.failing_channels.insert(channel);
        }
    }

    /// Makes the recipient resolve to `None`.
    pub fn forget_recipient(&self, recipient: RecipientId) {
        if let Ok(mut state) = self.state.write() {
            state.unknown_recipients.insert(recipient);
        }
    }

    /// Returns every message recorded so far, in delivery order.
    #[must_use]
    pub fn sent(&self) -> Vec<SentMessage> {
        self.state
            .read()
            .map(|state| state.sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn resolve_recipient(
        &self,
        recipient: &RecipientId,
    ) -> MessengerResult<Option<RecipientProfile>> {
        let state = self.state.read().map_err(|err| MessengerError::DeliveryFailed {
            target: recipient.to_string(),
            reason: err.to_string(),
        })?;
        if state.unknown_recipients.contains(recipient) {
            return Ok(None);
        }
        Ok(Some(RecipientProfile::new(format!("@{recipient}"))))
    }

    async fn send(&self, target: &DispatchTarget, text: &str) -> MessengerResult<()> {
        let mut state = self.state.write().map_err(|err| MessengerError::DeliveryFailed {
            target: target.to_string(),
            reason: err.to_string(),
        })?;
        if state.failing_channels.contains(target.channel()) {
            return Err(MessengerError::delivery_failed(target, "channel not found"));
        }
        state.sent.push(SentMessage {
            target: target.clone(),
            text: text.to_owned(),
        });
        Ok(())
    }
}
