//! Per-scope subscription registry consumed read-only by the core.

use crate::board::domain::{BoardId, CredentialsHandle, MemberId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Identifier of a recipient on the chat platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipientId(String);

impl RecipientId {
    /// Wraps a chat-platform user identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name of a delivery channel on the chat platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelName(String);

impl ChannelName {
    /// Wraps a channel name.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the channel name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One registry entry: a board member claimed by a chat recipient, with the
/// channels that recipient subscribed to.
///
/// Several recipients may claim the same board member; each match expands
/// independently during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    member: MemberId,
    recipient: RecipientId,
    channels: BTreeSet<ChannelName>,
}

impl RegistryEntry {
    /// Creates an entry with no subscribed channels.
    #[must_use]
    pub const fn new(member: MemberId, recipient: RecipientId) -> Self {
        Self {
            member,
            recipient,
            channels: BTreeSet::new(),
        }
    }

    /// Adds a subscribed channel.
    #[must_use]
    pub fn with_channel(mut self, channel: ChannelName) -> Self {
        self.channels.insert(channel);
        self
    }

    /// Returns the claimed board member identifier.
    #[must_use]
    pub const fn member(&self) -> &MemberId {
        &self.member
    }

    /// Returns the chat recipient.
    #[must_use]
    pub const fn recipient(&self) -> &RecipientId {
        &self.recipient
    }

    /// Returns the subscribed channels.
    #[must_use]
    pub const fn channels(&self) -> &BTreeSet<ChannelName> {
        &self.channels
    }
}

/// Everything the core needs to know about one notification scope.
///
/// Owned and mutated only by the external preferences store; the core
/// treats it as read-only input. Board and credentials are optional
/// because a scope may be partially configured: the orchestrator turns
/// their absence into user-facing guidance rather than a fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScopeRegistry {
    board: Option<BoardId>,
    credentials: Option<CredentialsHandle>,
    entries: Vec<RegistryEntry>,
}

impl ScopeRegistry {
    /// Creates an empty, unconfigured registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            board: None,
            credentials: None,
            entries: Vec::new(),
        }
    }

    /// Sets the watched board.
    #[must_use]
    pub fn with_board(mut self, board: BoardId) -> Self {
        self.board = Some(board);
        self
    }

    /// Sets the credentials handle for the watched board.
    #[must_use]
    pub fn with_credentials(mut self, credentials: CredentialsHandle) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Adds a subscription entry.
    #[must_use]
    pub fn with_entry(mut self, entry: RegistryEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Returns the watched board, when configured.
    #[must_use]
    pub const fn board(&self) -> Option<&BoardId> {
        self.board.as_ref()
    }

    /// Returns the credentials handle, when configured.
    #[must_use]
    pub const fn credentials(&self) -> Option<&CredentialsHandle> {
        self.credentials.as_ref()
    }

    /// Returns all subscription entries.
    #[must_use]
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Iterates entries whose claimed member matches the given identifier.
    pub fn entries_for<'a>(
        &'a self,
        member: &'a MemberId,
    ) -> impl Iterator<Item = &'a RegistryEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.member() == member)
    }
}
