//! Adapter implementations of the board ports.

pub mod json;
pub mod memory;

pub use json::JsonSnapshotStore;
pub use memory::{InMemorySnapshotStore, StaticBoardGateway};
