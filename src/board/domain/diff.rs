//! Snapshot diff engine.
//!
//! Compares the previously remembered snapshot of a card against the
//! freshly observed one and produces the ordered change events that make
//! up a notification. The emitted order is externally observable (it is
//! the order of lines in the outgoing message) and must be byte-identical
//! across runs for identical inputs.

use super::{CardSnapshot, ChangeEvent, Checklist, ChecklistName, ItemState};

/// Computes the ordered change events between two observations of a card.
///
/// When `previous` is `None` the card is being observed for the first time
/// and exactly one [`ChangeEvent::NewCard`] is produced, with no sub-field
/// diffing. Otherwise events are emitted in notification order:
/// description change first, then checklist and item events in the current
/// payload's iteration order, with removals of a surviving checklist
/// reported last in the previous checklist's original item order.
///
/// Checklists present only in `previous` are deliberately not reported:
/// the board surfaces no distinction between a deleted checklist and one
/// hidden by an archived card, so their disappearance stays silent.
#[must_use]
pub fn diff(previous: Option<&CardSnapshot>, current: &CardSnapshot) -> Vec<ChangeEvent> {
    let Some(previous) = previous else {
        return vec![ChangeEvent::NewCard];
    };

    let mut events = Vec::new();

    if previous.description() != current.description() {
        events.push(ChangeEvent::DescriptionChanged {
            new_text: current.description().to_owned(),
        });
    }

    for (name, checklist) in current.checklists() {
        match previous.checklist(name) {
            None => diff_new_checklist(&mut events, name, checklist),
            Some(previous_checklist) => {
                diff_known_checklist(&mut events, name, previous_checklist, checklist);
            }
        }
    }

    events
}

/// Reports a brand-new checklist and each of its items individually.
fn diff_new_checklist(events: &mut Vec<ChangeEvent>, name: &ChecklistName, checklist: &Checklist) {
    events.push(ChangeEvent::ChecklistAdded {
        checklist: name.clone(),
    });
    for (item, _) in checklist.entries() {
        events.push(ChangeEvent::ItemAdded {
            checklist: name.clone(),
            item: item.clone(),
        });
    }
}

/// Reports item additions, state changes, and removals within a checklist
/// known to both snapshots.
fn diff_known_checklist(
    events: &mut Vec<ChangeEvent>,
    name: &ChecklistName,
    previous: &Checklist,
    current: &Checklist,
) {
    for (item, state) in current.entries() {
        match previous.state_of(item) {
            None => events.push(ChangeEvent::ItemAdded {
                checklist: name.clone(),
                item: item.clone(),
            }),
            Some(previous_state) if previous_state != state => {
                let event = match state {
                    ItemState::Complete => ChangeEvent::ItemCompleted {
                        checklist: name.clone(),
                        item: item.clone(),
                    },
                    ItemState::Incomplete => ChangeEvent::ItemReopened {
                        checklist: name.clone(),
                        item: item.clone(),
                    },
                };
                events.push(event);
            }
            Some(_) => {}
        }
    }

    for (item, _) in previous.entries() {
        if current.state_of(item).is_none() {
            events.push(ChangeEvent::ItemRemoved {
                checklist: name.clone(),
                item: item.clone(),
            });
        }
    }
}
