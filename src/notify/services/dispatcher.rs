//! Notification dispatcher: one message per (card, target), best effort.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::board::domain::CardChanges;
use crate::notify::domain::{
    DispatchTarget, RecipientId, RenderError, render_new_card, render_update,
};
use crate::notify::ports::{Messenger, MessengerError, RecipientProfile};

/// One failed delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchFailure {
    /// Target the delivery was attempted for.
    pub target: DispatchTarget,
    /// Why the delivery failed.
    pub reason: String,
}

/// Outcome of dispatching one card's changes to its targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    delivered: Vec<DispatchTarget>,
    failed: Vec<DispatchFailure>,
}

impl DispatchReport {
    /// Returns the targets that received a message, in delivery order.
    #[must_use]
    pub fn delivered(&self) -> &[DispatchTarget] {
        &self.delivered
    }

    /// Returns the failed delivery attempts.
    #[must_use]
    pub fn failed(&self) -> &[DispatchFailure] {
        &self.failed
    }

    /// Folds another report into this one.
    pub fn merge(&mut self, other: Self) {
        self.delivered.extend(other.delivered);
        self.failed.extend(other.failed);
    }
}

/// Service delivering one combined message per (card, target) pair.
#[derive(Clone)]
pub struct NotificationDispatcher<M>
where
    M: Messenger,
{
    messenger: Arc<M>,
}

impl<M> NotificationDispatcher<M>
where
    M: Messenger,
{
    /// Creates a dispatcher over the given messenger.
    #[must_use]
    pub const fn new(messenger: Arc<M>) -> Self {
        Self { messenger }
    }

    /// Delivers the card's changes to every target, at most once each.
    ///
    /// All events for the card collapse into a single message per target:
    /// the new-card announcement when the card was observed for the first
    /// time, otherwise the combined update listing every change. Failures
    /// are recorded per target and never abort delivery to the remaining
    /// targets; there is no retry, because the snapshot advances this
    /// cycle regardless.
    pub async fn dispatch(
        &self,
        changes: &CardChanges,
        targets: &BTreeSet<DispatchTarget>,
    ) -> DispatchReport {
        let mut report = DispatchReport::default();
        if changes.is_empty() {
            return report;
        }

        let mut profiles: BTreeMap<RecipientId, Option<RecipientProfile>> = BTreeMap::new();
        for target in targets {
            let profile = match self.profile_for(&mut profiles, target.recipient()).await {
                Ok(Some(profile)) => profile,
                Ok(None) => {
                    debug!(
                        card = %changes.card_id(),
                        recipient = %target.recipient(),
                        "skipping target for unknown recipient",
                    );
                    continue;
                }
                Err(err) => {
                    record_failure(&mut report, target, &err.to_string(), changes);
                    continue;
                }
            };

            let text = match render_for(changes, profile.mention()) {
                Ok(text) => text,
                Err(err) => {
                    record_failure(&mut report, target, &err.to_string(), changes);
                    continue;
                }
            };

            match self.messenger.send(target, &text).await {
                Ok(()) => report.delivered.push(target.clone()),
                Err(err) => record_failure(&mut report, target, &err.to_string(), changes),
            }
        }

        report
    }

    async fn profile_for(
        &self,
        profiles: &mut BTreeMap<RecipientId, Option<RecipientProfile>>,
        recipient: &RecipientId,
    ) -> Result<Option<RecipientProfile>, MessengerError> {
        if let Some(cached) = profiles.get(recipient) {
            return Ok(cached.clone());
        }
        let resolved = self.messenger.resolve_recipient(recipient).await?;
        profiles.insert(recipient.clone(), resolved.clone());
        Ok(resolved)
    }
}

fn render_for(changes: &CardChanges, mention: &str) -> Result<String, RenderError> {
    if changes.is_new_card() {
        render_new_card(changes, mention)
    } else {
        render_update(changes, mention)
    }
}

fn record_failure(
    report: &mut DispatchReport,
    target: &DispatchTarget,
    reason: &str,
    changes: &CardChanges,
) {
    warn!(
        card = %changes.card_id(),
        target = %target,
        reason,
        "notification delivery failed",
    );
    report.failed.push(DispatchFailure {
        target: target.clone(),
        reason: reason.to_owned(),
    });
}
