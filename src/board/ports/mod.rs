//! Port contracts for board access and snapshot persistence.

pub mod gateway;
pub mod store;

pub use gateway::{
    BoardGateway, BoardGatewayError, BoardGatewayResult, RawCard, RawChecklist, RawChecklistItem,
};
pub use store::{SnapshotSet, SnapshotStore, SnapshotStoreError, SnapshotStoreResult};
