//! Rendering tests for message templates and change lines.

use crate::board::domain::{
    CardChanges, CardId, CardSnapshot, ChangeEvent, ChecklistName, ItemName,
};
use crate::notify::domain::{change_line, render_new_card, render_update};
use rstest::rstest;

fn card() -> CardSnapshot {
    CardSnapshot::new(CardId::new("c1"), "Ship release", "https://board/c/1")
}

#[rstest]
fn new_card_message_mentions_recipient_and_links_the_card() {
    let changes = CardChanges::new(&card(), vec![ChangeEvent::NewCard]);
    let text = render_new_card(&changes, "@alice").expect("template renders");

    assert_eq!(
        text,
        "@alice, a new card has been assigned to you: **Ship release**\nhttps://board/c/1"
    );
}

#[rstest]
fn update_message_lists_every_change_line_in_order() {
    let changes = CardChanges::new(
        &card(),
        vec![
            ChangeEvent::DescriptionChanged {
                new_text: "urgent".to_owned(),
            },
            ChangeEvent::ItemCompleted {
                checklist: ChecklistName::new("QA"),
                item: ItemName::new("smoke"),
            },
        ],
    );
    let text = render_update(&changes, "@bob").expect("template renders");

    assert_eq!(
        text,
        "@bob, updates on your card: **Ship release**\nhttps://board/c/1\n\
         📜 **Description changed:**\nurgent\n✅ **Item completed:** smoke (QA)"
    );
}

#[rstest]
fn new_card_event_has_no_change_line() {
    assert_eq!(change_line(&ChangeEvent::NewCard), None);
}

#[rstest]
#[case(
    ChangeEvent::ChecklistAdded { checklist: ChecklistName::new("QA") },
    "📋 **New checklist added:** QA"
)]
#[case(
    ChangeEvent::ItemAdded {
        checklist: ChecklistName::new("QA"),
        item: ItemName::new("smoke"),
    },
    "🆕 **New item added:** smoke (QA)"
)]
#[case(
    ChangeEvent::ItemReopened {
        checklist: ChecklistName::new("QA"),
        item: ItemName::new("smoke"),
    },
    "🔄 **Item reopened:** smoke (QA)"
)]
#[case(
    ChangeEvent::ItemRemoved {
        checklist: ChecklistName::new("QA"),
        item: ItemName::new("smoke"),
    },
    "❌ **Item removed:** smoke (QA)"
)]
fn change_lines_follow_the_notifier_wording(#[case] event: ChangeEvent, #[case] expected: &str) {
    assert_eq!(change_line(&event).as_deref(), Some(expected));
}
