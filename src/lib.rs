//! Boardwatch: poll-and-diff change notification for external task boards.
//!
//! This crate watches a collaborative task board that offers no change
//! events, detects changes by polling and diffing against a remembered
//! snapshot, and routes human-readable notifications to subscribed
//! recipients on a group-chat platform.
//!
//! # Architecture
//!
//! Boardwatch follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (files, APIs, etc.)
//!
//! # Modules
//!
//! - [`board`]: Card snapshots, the snapshot store, and the diff engine
//! - [`notify`]: Recipient resolution, message rendering, and dispatch
//! - [`poll`]: The poll orchestrator driving one end-to-end cycle

pub mod board;
pub mod notify;
pub mod poll;
