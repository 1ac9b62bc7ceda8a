//! Store port for durable per-scope card snapshots.

use crate::board::domain::{CardId, CardSnapshot, ScopeId};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot store operations.
pub type SnapshotStoreResult<T> = Result<T, SnapshotStoreError>;

/// Every remembered card snapshot for one scope, keyed by card identifier.
///
/// A card identifier is known exactly when its full snapshot is present in
/// this mapping; there is no separate known-identifier record.
pub type SnapshotSet = BTreeMap<CardId, CardSnapshot>;

/// Snapshot persistence contract.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Loads the remembered snapshots for a scope.
    ///
    /// Returns an empty mapping when the scope has no prior state.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Corrupt`] when persisted state exists
    /// but cannot be parsed, and [`SnapshotStoreError::Io`] for other
    /// persistence failures.
    async fn load(&self, scope: &ScopeId) -> SnapshotStoreResult<SnapshotSet>;

    /// Atomically replaces the persisted snapshots for a scope.
    ///
    /// Implementations must never partially persist: after a crash
    /// mid-commit the next load must observe either the old mapping or the
    /// new one, never a mixture.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Io`] when persistence fails.
    async fn commit(&self, scope: &ScopeId, snapshots: &SnapshotSet) -> SnapshotStoreResult<()>;
}

/// Errors returned by snapshot store implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotStoreError {
    /// Persisted state for the scope exists but cannot be parsed.
    #[error("snapshot state for scope {scope} is corrupt: {source}")]
    Corrupt {
        /// Scope whose persisted state is unreadable.
        scope: ScopeId,
        /// Underlying parse failure.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// Persistence-layer failure.
    #[error("snapshot persistence failed: {0}")]
    Io(Arc<dyn std::error::Error + Send + Sync>),
}

impl SnapshotStoreError {
    /// Wraps a parse failure for the given scope.
    pub fn corrupt(scope: &ScopeId, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Corrupt {
            scope: scope.clone(),
            source: Arc::new(err),
        }
    }

    /// Wraps a persistence failure.
    pub fn io(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Io(Arc::new(err))
    }

    /// Returns `true` for the corrupt-state variant.
    #[must_use]
    pub const fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}
