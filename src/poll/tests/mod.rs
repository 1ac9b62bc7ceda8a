//! Unit tests for the poll module.
//!
//! Covers the cycle state machine, report summaries, the concurrency
//! limiter, and orchestrated cycles over in-memory adapters.

mod limiter_tests;
mod report_tests;
