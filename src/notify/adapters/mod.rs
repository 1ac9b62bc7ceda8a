//! Adapter implementations of the notify ports.

pub mod memory;

pub use memory::{InMemoryPreferences, RecordingMessenger, SentMessage};
