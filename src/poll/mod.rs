//! Poll orchestration for Boardwatch.
//!
//! Drives one end-to-end cycle per scope: fetch cards, normalize, diff
//! against the snapshot store, resolve recipients, dispatch notifications,
//! and commit the fresh snapshots. Cycles for different scopes share no
//! mutable state and may run concurrently up to a permit budget.

mod cycle;
mod error;
mod limiter;
mod report;
mod state;

pub use cycle::PollOrchestrator;
pub use error::CycleError;
pub use limiter::{CycleLimiter, CycleLimiterError, CyclePermit};
pub use report::CycleReport;
pub use state::CycleState;

#[cfg(test)]
mod tests;
