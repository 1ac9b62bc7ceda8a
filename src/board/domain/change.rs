//! Change events produced by diffing two card snapshots.

use super::{CardId, CardSnapshot, ChecklistName, ItemName};

/// A single observed change on one card.
///
/// Events are ephemeral: produced and consumed within one poll cycle,
/// never persisted. The originating card is carried alongside the events
/// by [`CardChanges`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    /// The card was observed for the first time.
    NewCard,
    /// The card description changed, including empty to non-empty.
    DescriptionChanged {
        /// The full new description text.
        new_text: String,
    },
    /// A checklist appeared that the previous snapshot did not have.
    ChecklistAdded {
        /// Name of the new checklist.
        checklist: ChecklistName,
    },
    /// An item appeared in a checklist.
    ItemAdded {
        /// Checklist containing the item.
        checklist: ChecklistName,
        /// Name of the new item.
        item: ItemName,
    },
    /// An item's state changed from incomplete to complete.
    ItemCompleted {
        /// Checklist containing the item.
        checklist: ChecklistName,
        /// Name of the completed item.
        item: ItemName,
    },
    /// An item's state changed from complete back to incomplete.
    ItemReopened {
        /// Checklist containing the item.
        checklist: ChecklistName,
        /// Name of the reopened item.
        item: ItemName,
    },
    /// An item disappeared from a checklist that still exists.
    ItemRemoved {
        /// Checklist the item was removed from.
        checklist: ChecklistName,
        /// Name of the removed item.
        item: ItemName,
    },
}

impl ChangeEvent {
    /// Returns `true` for the first-observation event.
    #[must_use]
    pub const fn is_new_card(&self) -> bool {
        matches!(self, Self::NewCard)
    }
}

/// All change events detected for one card in one poll cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardChanges {
    card_id: CardId,
    card_name: String,
    card_url: String,
    events: Vec<ChangeEvent>,
}

impl CardChanges {
    /// Groups the given events with their originating card.
    #[must_use]
    pub fn new(card: &CardSnapshot, events: Vec<ChangeEvent>) -> Self {
        Self {
            card_id: card.card_id().clone(),
            card_name: card.name().to_owned(),
            card_url: card.url().to_owned(),
            events,
        }
    }

    /// Returns the originating card identifier.
    #[must_use]
    pub const fn card_id(&self) -> &CardId {
        &self.card_id
    }

    /// Returns the display name of the originating card.
    #[must_use]
    pub fn card_name(&self) -> &str {
        &self.card_name
    }

    /// Returns the display URL of the originating card.
    #[must_use]
    pub fn card_url(&self) -> &str {
        &self.card_url
    }

    /// Returns the detected events in notification order.
    #[must_use]
    pub fn events(&self) -> &[ChangeEvent] {
        &self.events
    }

    /// Returns `true` when the card was observed for the first time.
    #[must_use]
    pub fn is_new_card(&self) -> bool {
        self.events.iter().any(ChangeEvent::is_new_card)
    }

    /// Returns `true` when no changes were detected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
