//! Canonical card snapshot and checklist types.

use super::{CardId, ChecklistName, ItemName, MemberId, ParseItemStateError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Completion state of a checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemState {
    /// The item has not been completed.
    Incomplete,
    /// The item has been completed.
    Complete,
}

impl ItemState {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Incomplete => "incomplete",
            Self::Complete => "complete",
        }
    }
}

impl TryFrom<&str> for ItemState {
    type Error = ParseItemStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "incomplete" => Ok(Self::Incomplete),
            "complete" => Ok(Self::Complete),
            _ => Err(ParseItemStateError(value.to_owned())),
        }
    }
}

/// A named collection of checklist items with binary completion state.
///
/// Item names are unique within one checklist. Insertion order is
/// preserved: the diff engine reports removals in the order items
/// originally appeared, so the order observed in the board payload is part
/// of the canonical snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checklist {
    items: Vec<(ItemName, ItemState)>,
}

impl Checklist {
    /// Creates an empty checklist.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Inserts an item, or updates its state when the name already exists.
    ///
    /// An existing item keeps its original position.
    pub fn insert(&mut self, name: ItemName, state: ItemState) {
        if let Some(entry) = self.items.iter_mut().find(|(existing, _)| *existing == name) {
            entry.1 = state;
        } else {
            self.items.push((name, state));
        }
    }

    /// Returns the state of the named item, if present.
    #[must_use]
    pub fn state_of(&self, name: &ItemName) -> Option<ItemState> {
        self.items
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, state)| *state)
    }

    /// Iterates items in their canonical (payload) order.
    pub fn entries(&self) -> impl Iterator<Item = (&ItemName, ItemState)> {
        self.items.iter().map(|(name, state)| (name, *state))
    }

    /// Returns the number of items in the checklist.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the checklist has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<(ItemName, ItemState)> for Checklist {
    fn from_iter<I: IntoIterator<Item = (ItemName, ItemState)>>(iter: I) -> Self {
        let mut checklist = Self::new();
        for (name, state) in iter {
            checklist.insert(name, state);
        }
        checklist
    }
}

/// Canonical remembered state of one card as of the last observation.
///
/// `name` and `url` are display-only: they travel with the snapshot for
/// message rendering but are never compared for change detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSnapshot {
    card_id: CardId,
    name: String,
    url: String,
    description: String,
    checklists: Vec<(ChecklistName, Checklist)>,
    assigned_member_ids: BTreeSet<MemberId>,
}

impl CardSnapshot {
    /// Creates a snapshot with empty description, checklists, and members.
    #[must_use]
    pub fn new(card_id: CardId, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            card_id,
            name: name.into(),
            url: url.into(),
            description: String::new(),
            checklists: Vec::new(),
            assigned_member_ids: BTreeSet::new(),
        }
    }

    /// Sets the card description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Appends a checklist, ignoring the insert when the name is taken.
    ///
    /// Checklist names are unique within one snapshot; the first occurrence
    /// wins, matching normalization of duplicate names in raw payloads.
    #[must_use]
    pub fn with_checklist(mut self, name: ChecklistName, checklist: Checklist) -> Self {
        self.push_checklist(name, checklist);
        self
    }

    /// Adds an assigned member.
    #[must_use]
    pub fn with_member(mut self, member: MemberId) -> Self {
        self.assigned_member_ids.insert(member);
        self
    }

    /// Appends a checklist, ignoring the insert when the name is taken.
    pub fn push_checklist(&mut self, name: ChecklistName, checklist: Checklist) {
        if self.checklist(&name).is_none() {
            self.checklists.push((name, checklist));
        }
    }

    /// Returns the card identifier.
    #[must_use]
    pub const fn card_id(&self) -> &CardId {
        &self.card_id
    }

    /// Returns the display name of the card.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display URL of the card.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the card description (may be empty).
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns checklists in their canonical (payload) order.
    #[must_use]
    pub fn checklists(&self) -> &[(ChecklistName, Checklist)] {
        &self.checklists
    }

    /// Returns the named checklist, if present.
    #[must_use]
    pub fn checklist(&self, name: &ChecklistName) -> Option<&Checklist> {
        self.checklists
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, checklist)| checklist)
    }

    /// Returns the set of assigned board member identifiers.
    #[must_use]
    pub const fn assigned_member_ids(&self) -> &BTreeSet<MemberId> {
        &self.assigned_member_ids
    }
}
