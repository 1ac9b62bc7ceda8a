//! Identifier types for the board domain.
//!
//! All identifiers here are opaque values minted by external systems (the
//! task board, the chat platform, or the credential store). They are never
//! parsed or validated beyond being carried verbatim, so construction is
//! infallible and values round-trip unchanged through persistence.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! opaque_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an externally minted identifier value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the identifier, returning the wrapped string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }
    };
}

opaque_id! {
    /// Stable identifier of a card on the external task board.
    CardId
}

opaque_id! {
    /// Identifier of a member on the external task board.
    MemberId
}

opaque_id! {
    /// Identifier of a board on the external task board.
    BoardId
}

opaque_id! {
    /// Unit of isolation for one board's observed state: a single chat
    /// server or a single end user, depending on deployment mode.
    ScopeId
}

opaque_id! {
    /// Name of a checklist on a card, unique within one card.
    ChecklistName
}

opaque_id! {
    /// Name of a checklist item, unique within one checklist.
    ItemName
}

opaque_id! {
    /// Opaque handle to board credentials owned by the external credential
    /// store. The core passes it through to the board gateway unopened.
    CredentialsHandle
}
