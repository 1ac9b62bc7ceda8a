//! Preferences port exposing the per-scope subscription registry.
//!
//! Mutation of credentials and subscriptions happens in the external
//! preferences store; the core only ever reads.

use crate::board::domain::ScopeId;
use crate::notify::domain::ScopeRegistry;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for preferences operations.
pub type PreferencesResult<T> = Result<T, PreferencesError>;

/// Read-only access to per-scope subscription registries.
#[async_trait]
pub trait PreferencesStore: Send + Sync {
    /// Returns the registry for a scope, or `None` when the scope has
    /// never been configured.
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError::Unavailable`] when the store cannot be
    /// read.
    async fn scope_registry(&self, scope: &ScopeId) -> PreferencesResult<Option<ScopeRegistry>>;
}

/// Errors returned by preferences store implementations.
#[derive(Debug, Clone, Error)]
pub enum PreferencesError {
    /// The preferences store could not be read.
    #[error("preferences unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl PreferencesError {
    /// Wraps a store failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
