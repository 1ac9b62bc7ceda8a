//! Unit tests for the notify module.
//!
//! Tests are organised by concern: target resolution, message rendering,
//! and dispatch delivery semantics.

mod render_tests;
