//! Domain-focused tests for snapshot and checklist invariants.

use crate::board::domain::{
    CardId, CardSnapshot, Checklist, ChecklistName, ItemName, ItemState, ParseItemStateError,
};
use rstest::rstest;

#[rstest]
#[case("incomplete", ItemState::Incomplete)]
#[case("complete", ItemState::Complete)]
fn item_state_parses_canonical_values(#[case] raw: &str, #[case] expected: ItemState) {
    assert_eq!(ItemState::try_from(raw), Ok(expected));
    assert_eq!(expected.as_str(), raw);
}

#[rstest]
#[case("done")]
#[case("Complete")]
#[case("")]
fn item_state_rejects_unknown_values(#[case] raw: &str) {
    assert_eq!(
        ItemState::try_from(raw),
        Err(ParseItemStateError(raw.to_owned()))
    );
}

#[rstest]
fn checklist_insert_preserves_position_on_state_update() {
    let mut checklist = Checklist::new();
    checklist.insert(ItemName::new("first"), ItemState::Incomplete);
    checklist.insert(ItemName::new("second"), ItemState::Incomplete);
    checklist.insert(ItemName::new("first"), ItemState::Complete);

    let entries: Vec<_> = checklist.entries().collect();
    assert_eq!(
        entries,
        vec![
            (&ItemName::new("first"), ItemState::Complete),
            (&ItemName::new("second"), ItemState::Incomplete),
        ]
    );
    assert_eq!(checklist.len(), 2);
}

#[rstest]
fn snapshot_keeps_first_checklist_for_duplicate_names() {
    let first: Checklist = [(ItemName::new("init"), ItemState::Incomplete)]
        .into_iter()
        .collect();
    let second: Checklist = [(ItemName::new("other"), ItemState::Complete)]
        .into_iter()
        .collect();

    let snapshot = CardSnapshot::new(CardId::new("c1"), "Card", "https://board/c/1")
        .with_checklist(ChecklistName::new("Setup"), first.clone())
        .with_checklist(ChecklistName::new("Setup"), second);

    assert_eq!(snapshot.checklists().len(), 1);
    assert_eq!(snapshot.checklist(&ChecklistName::new("Setup")), Some(&first));
}

#[rstest]
fn snapshot_round_trips_through_json() {
    let snapshot = CardSnapshot::new(CardId::new("c1"), "Card", "https://board/c/1")
        .with_description("body")
        .with_checklist(
            ChecklistName::new("Setup"),
            [(ItemName::new("init"), ItemState::Complete)]
                .into_iter()
                .collect(),
        )
        .with_member("m1".into());

    let json = serde_json::to_string(&snapshot).expect("snapshot serializes");
    let restored: CardSnapshot = serde_json::from_str(&json).expect("snapshot deserializes");

    assert_eq!(restored, snapshot);
}
