//! Card normalizer: raw board payloads to canonical snapshots.

use tracing::debug;

use crate::board::domain::{
    CardId, CardSnapshot, Checklist, ChecklistName, ItemName, ItemState, MemberId,
};
use crate::board::ports::RawCard;

/// Result of normalizing one raw card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedCard {
    snapshot: CardSnapshot,
    skipped_items: usize,
}

impl NormalizedCard {
    /// Returns the canonical snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &CardSnapshot {
        &self.snapshot
    }

    /// Consumes the result, returning the canonical snapshot.
    #[must_use]
    pub fn into_snapshot(self) -> CardSnapshot {
        self.snapshot
    }

    /// Returns how many items were dropped for malformed state values.
    #[must_use]
    pub const fn skipped_items(&self) -> usize {
        self.skipped_items
    }
}

/// Collapses a raw card payload into the canonical snapshot shape.
///
/// Total for well-formed input and deterministic for identical input.
/// An item whose raw state is neither `incomplete` nor `complete` is
/// logged and treated as absent rather than aborting the card; duplicate
/// checklist names keep the first occurrence and duplicate item names
/// within a checklist keep the last observed state.
#[must_use]
pub fn normalize(raw: &RawCard) -> NormalizedCard {
    let mut snapshot = CardSnapshot::new(CardId::new(&*raw.id), &*raw.name, &*raw.url)
        .with_description(&*raw.description);

    for member in &raw.member_ids {
        snapshot = snapshot.with_member(MemberId::new(&**member));
    }

    let mut skipped_items = 0;
    for raw_checklist in &raw.checklists {
        let mut checklist = Checklist::new();
        for raw_item in &raw_checklist.items {
            match ItemState::try_from(&*raw_item.state) {
                Ok(state) => checklist.insert(ItemName::new(&*raw_item.name), state),
                Err(err) => {
                    debug!(
                        card = %raw.id,
                        checklist = %raw_checklist.name,
                        item = %raw_item.name,
                        %err,
                        "skipping checklist item with malformed state",
                    );
                    skipped_items += 1;
                }
            }
        }
        snapshot.push_checklist(ChecklistName::new(&*raw_checklist.name), checklist);
    }

    NormalizedCard {
        snapshot,
        skipped_items,
    }
}
