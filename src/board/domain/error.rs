//! Error types for board domain parsing.

use thiserror::Error;

/// Error returned while parsing checklist item states from raw payloads.
///
/// A malformed state never aborts processing of the surrounding card: the
/// normalizer logs the value and treats the item as absent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed checklist item state: {0}")]
pub struct ParseItemStateError(pub String);
