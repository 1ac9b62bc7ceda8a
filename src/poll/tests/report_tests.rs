//! Summary-line tests for the cycle report.

use crate::board::domain::ScopeId;
use crate::poll::CycleReport;
use crate::poll::report::CycleTally;
use mockable::{Clock, DefaultClock};
use rstest::rstest;

fn report_with(
    new_cards: usize,
    updated_cards: usize,
    notifications_sent: usize,
    delivery_failures: usize,
) -> CycleReport {
    let now = DefaultClock.utc();
    CycleReport::from_tally(
        ScopeId::new("scope-a"),
        now,
        now,
        CycleTally {
            new_cards,
            updated_cards,
            notifications_sent,
            delivery_failures,
            skipped_items: 0,
            store_recovered: false,
        },
    )
}

#[rstest]
fn quiet_cycle_summarises_as_no_changes() {
    let report = report_with(0, 0, 0, 0);
    assert_eq!(report.summary(), "No new or updated cards found.");
}

#[rstest]
fn busy_cycle_summarises_counts() {
    let report = report_with(2, 3, 7, 0);
    assert_eq!(
        report.summary(),
        "7 notification(s) sent for 2 new and 3 updated card(s)."
    );
}

#[rstest]
fn failed_deliveries_are_mentioned() {
    let report = report_with(1, 0, 2, 1);
    assert_eq!(
        report.summary(),
        "2 notification(s) sent for 1 new and 0 updated card(s). 1 delivery(ies) failed."
    );
}

#[rstest]
fn report_carries_scope_and_timestamps() {
    let report = report_with(0, 0, 0, 0);
    assert_eq!(report.scope(), &ScopeId::new("scope-a"));
    assert!(report.finished_at() >= report.started_at());
}
