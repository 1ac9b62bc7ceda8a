//! Per-cycle report and user-visible summary.

use crate::board::domain::ScopeId;
use chrono::{DateTime, Utc};

/// Outcome of one completed poll cycle.
///
/// A report exists only for cycles that ran through commit; aborted cycles
/// surface as [`crate::poll::CycleError`] instead. The summary line is
/// always shown to end users, while per-item skips and per-target failures
/// stay in logs and this report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    scope: ScopeId,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
    new_cards: usize,
    updated_cards: usize,
    notifications_sent: usize,
    delivery_failures: usize,
    skipped_items: usize,
    store_recovered: bool,
}

/// Mutable accumulator the orchestrator fills while a cycle runs.
#[derive(Debug, Clone, Default)]
pub(crate) struct CycleTally {
    pub new_cards: usize,
    pub updated_cards: usize,
    pub notifications_sent: usize,
    pub delivery_failures: usize,
    pub skipped_items: usize,
    pub store_recovered: bool,
}

impl CycleReport {
    pub(crate) fn from_tally(
        scope: ScopeId,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        tally: CycleTally,
    ) -> Self {
        Self {
            scope,
            started_at,
            finished_at,
            new_cards: tally.new_cards,
            updated_cards: tally.updated_cards,
            notifications_sent: tally.notifications_sent,
            delivery_failures: tally.delivery_failures,
            skipped_items: tally.skipped_items,
            store_recovered: tally.store_recovered,
        }
    }

    /// Returns the scope the cycle ran for.
    #[must_use]
    pub const fn scope(&self) -> &ScopeId {
        &self.scope
    }

    /// Returns when the cycle started.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Returns when the cycle finished.
    #[must_use]
    pub const fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    /// Returns how many cards were observed for the first time.
    #[must_use]
    pub const fn new_cards(&self) -> usize {
        self.new_cards
    }

    /// Returns how many known cards had changes.
    #[must_use]
    pub const fn updated_cards(&self) -> usize {
        self.updated_cards
    }

    /// Returns how many notifications were delivered.
    #[must_use]
    pub const fn notifications_sent(&self) -> usize {
        self.notifications_sent
    }

    /// Returns how many deliveries failed.
    #[must_use]
    pub const fn delivery_failures(&self) -> usize {
        self.delivery_failures
    }

    /// Returns how many checklist items were skipped as malformed.
    #[must_use]
    pub const fn skipped_items(&self) -> usize {
        self.skipped_items
    }

    /// Returns `true` when persisted state was unreadable and the cycle
    /// ran against empty history.
    #[must_use]
    pub const fn store_recovered(&self) -> bool {
        self.store_recovered
    }

    /// Returns the one-line summary always shown to end users.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.new_cards == 0 && self.updated_cards == 0 {
            return "No new or updated cards found.".to_owned();
        }

        let mut summary = format!(
            "{} notification(s) sent for {} new and {} updated card(s).",
            self.notifications_sent, self.new_cards, self.updated_cards
        );
        if self.delivery_failures > 0 {
            summary.push_str(&format!(" {} delivery(ies) failed.", self.delivery_failures));
        }
        summary
    }
}
