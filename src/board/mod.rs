//! Card snapshot tracking for Boardwatch.
//!
//! This module implements the observed side of the board: canonical card
//! snapshots, the durable snapshot store, normalization of raw board
//! payloads, and the diff engine that turns two snapshots into an ordered
//! sequence of change events. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Normalization services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
