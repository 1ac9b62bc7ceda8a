//! Unit tests for the board module.
//!
//! Tests are organised by domain concept, covering happy paths, error
//! cases, and edge cases for all public APIs.

mod card_tests;
