//! Recipient resolver: card assignees to deduplicated dispatch targets.

use std::collections::BTreeSet;
use tracing::debug;

use crate::board::domain::CardSnapshot;
use crate::notify::domain::{DispatchTarget, ScopeRegistry};

/// Expands a card's assigned members into the set of dispatch targets.
///
/// Every registry entry claiming an assigned member contributes one target
/// per subscribed channel. A member with no matching entry or no
/// subscribed channels contributes nothing; that is silent non-delivery,
/// not an error. Duplicate targets reached via multiple matches collapse
/// into one by set construction.
#[must_use]
pub fn resolve_targets(card: &CardSnapshot, registry: &ScopeRegistry) -> BTreeSet<DispatchTarget> {
    let mut targets = BTreeSet::new();

    for member in card.assigned_member_ids() {
        let mut matched = false;
        for entry in registry.entries_for(member) {
            matched = true;
            for channel in entry.channels() {
                targets.insert(DispatchTarget::new(
                    entry.recipient().clone(),
                    channel.clone(),
                ));
            }
        }
        if !matched {
            debug!(
                card = %card.card_id(),
                member = %member,
                "assigned member has no subscription entry",
            );
        }
    }

    targets
}
