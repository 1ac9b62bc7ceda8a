//! Resolved dispatch targets.

use super::{ChannelName, RecipientId};
use std::fmt;

/// A resolved (recipient, delivery channel) pair eligible to receive one
/// notification per card per cycle.
///
/// Ordered so that sets of targets iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DispatchTarget {
    recipient: RecipientId,
    channel: ChannelName,
}

impl DispatchTarget {
    /// Creates a target for the given recipient and channel.
    #[must_use]
    pub const fn new(recipient: RecipientId, channel: ChannelName) -> Self {
        Self { recipient, channel }
    }

    /// Returns the recipient to mention.
    #[must_use]
    pub const fn recipient(&self) -> &RecipientId {
        &self.recipient
    }

    /// Returns the channel to deliver into.
    #[must_use]
    pub const fn channel(&self) -> &ChannelName {
        &self.channel
    }
}

impl fmt::Display for DispatchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.recipient, self.channel)
    }
}
