//! In-memory board adapters for tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{BoardId, CredentialsHandle, ScopeId},
    ports::{
        BoardGateway, BoardGatewayError, BoardGatewayResult, RawCard, SnapshotSet, SnapshotStore,
        SnapshotStoreError, SnapshotStoreResult,
    },
};

/// Thread-safe in-memory snapshot store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    state: Arc<RwLock<HashMap<ScopeId, SnapshotSet>>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the committed snapshots for a scope, if any.
    ///
    /// Test-facing convenience for asserting commit contents without going
    /// through the async port.
    #[must_use]
    pub fn committed(&self, scope: &ScopeId) -> Option<SnapshotSet> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.get(scope).cloned())
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn load(&self, scope: &ScopeId) -> SnapshotStoreResult<SnapshotSet> {
        let state = self
            .state
            .read()
            .map_err(|err| SnapshotStoreError::io(std::io::Error::other(err.to_string())))?;
        Ok(state.get(scope).cloned().unwrap_or_default())
    }

    async fn commit(&self, scope: &ScopeId, snapshots: &SnapshotSet) -> SnapshotStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| SnapshotStoreError::io(std::io::Error::other(err.to_string())))?;
        state.insert(scope.clone(), snapshots.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
struct StaticGatewayState {
    cards: Vec<RawCard>,
    unavailable: bool,
}

/// Board gateway returning a canned card set, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticBoardGateway {
    state: Arc<RwLock<StaticGatewayState>>,
}

impl StaticBoardGateway {
    /// Creates a gateway with no cards.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway that serves the given cards.
    #[must_use]
    pub fn with_cards(cards: Vec<RawCard>) -> Self {
        let gateway = Self::new();
        gateway.set_cards(cards);
        gateway
    }

    /// Replaces the served card set.
    pub fn set_cards(&self, cards: Vec<RawCard>) {
        if let Ok(mut state) = self.state.write() {
            state.cards = cards;
        }
    }

    /// Makes every subsequent fetch fail with an unavailable error.
    pub fn set_unavailable(&self, unavailable: bool) {
        if let Ok(mut state) = self.state.write() {
            state.unavailable = unavailable;
        }
    }
}

#[async_trait]
impl BoardGateway for StaticBoardGateway {
    async fn fetch_open_cards(
        &self,
        _credentials: &CredentialsHandle,
        _board: &BoardId,
    ) -> BoardGatewayResult<Vec<RawCard>> {
        let state = self
            .state
            .read()
            .map_err(|err| BoardGatewayError::unavailable_msg(err.to_string()))?;
        if state.unavailable {
            return Err(BoardGatewayError::unavailable_msg("board offline"));
        }
        Ok(state.cards.clone())
    }
}
