//! Cycle state machine.

use serde::{Deserialize, Serialize};

/// Phase of one poll cycle for one scope.
///
/// A cycle advances `Idle -> Fetching -> Diffing -> Dispatching ->
/// Committing -> Idle`. `Aborted` is terminal and reachable from
/// `Fetching` only: a board or credential failure aborts the cycle before
/// any snapshot mutation, while later phases always run through to commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleState {
    /// No cycle is running.
    Idle,
    /// Fetching the open-card set from the board.
    Fetching,
    /// Normalizing payloads and diffing against remembered snapshots.
    Diffing,
    /// Delivering notifications to resolved targets.
    Dispatching,
    /// Persisting the fresh snapshot set.
    Committing,
    /// The cycle aborted during fetch; no snapshot was mutated.
    Aborted,
}

impl CycleState {
    /// Returns `true` when the transition to `next` is legal.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Fetching)
                | (Self::Fetching, Self::Diffing | Self::Aborted)
                | (Self::Diffing, Self::Dispatching)
                | (Self::Dispatching, Self::Committing)
                | (Self::Committing, Self::Idle)
        )
    }

    /// Returns `true` for the terminal abort state.
    #[must_use]
    pub const fn is_aborted(self) -> bool {
        matches!(self, Self::Aborted)
    }
}
