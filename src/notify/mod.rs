//! Notification routing for Boardwatch.
//!
//! This module resolves which chat recipients should hear about a card's
//! changes, renders the outgoing messages, and dispatches them with
//! per-target failure isolation. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Resolution and dispatch services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
