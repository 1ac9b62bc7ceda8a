//! Gateway port for fetching open cards from the external task board.

use crate::board::domain::{BoardId, CredentialsHandle};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board gateway operations.
pub type BoardGatewayResult<T> = Result<T, BoardGatewayError>;

/// One checklist item exactly as the board adapter returned it.
///
/// The `state` field is the raw string from the board; the normalizer is
/// responsible for collapsing it into the two-value canonical state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawChecklistItem {
    /// Item name as received.
    pub name: String,
    /// Raw completion state string as received.
    pub state: String,
}

/// One checklist exactly as the board adapter returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawChecklist {
    /// Checklist name as received.
    pub name: String,
    /// Items in the order the board returned them.
    pub items: Vec<RawChecklistItem>,
}

/// One open card exactly as the board adapter returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCard {
    /// Stable card identifier.
    pub id: String,
    /// Display name of the card.
    pub name: String,
    /// Short URL of the card.
    pub url: String,
    /// Card description; empty when the card has none.
    pub description: String,
    /// Board member identifiers assigned to the card.
    pub member_ids: Vec<String>,
    /// Checklists in the order the board returned them.
    pub checklists: Vec<RawChecklist>,
}

/// Contract for retrieving the current open-card set of a board.
#[async_trait]
pub trait BoardGateway: Send + Sync {
    /// Fetches every open card on the board, with checklists and members.
    ///
    /// # Errors
    ///
    /// Returns [`BoardGatewayError::Unavailable`] for any adapter failure,
    /// including timeouts. The orchestrator treats all fetch failures
    /// identically: the cycle aborts with no snapshot mutation.
    async fn fetch_open_cards(
        &self,
        credentials: &CredentialsHandle,
        board: &BoardId,
    ) -> BoardGatewayResult<Vec<RawCard>>;
}

/// Errors returned by board gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardGatewayError {
    /// The board could not be reached or rejected the request.
    #[error("board unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardGatewayError {
    /// Wraps an adapter failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }

    /// Wraps a bare failure description.
    #[must_use]
    pub fn unavailable_msg(reason: impl Into<String>) -> Self {
        Self::Unavailable(Arc::new(std::io::Error::other(reason.into())))
    }
}
