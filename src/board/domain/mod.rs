//! Domain model for card snapshot tracking.
//!
//! The board domain models the canonical shape of an observed card, the
//! change events detectable between two observations, and the diff
//! algorithm itself, while keeping all infrastructure concerns outside of
//! the domain boundary.

mod card;
mod change;
mod diff;
mod error;
mod ids;

pub use card::{CardSnapshot, Checklist, ItemState};
pub use change::{CardChanges, ChangeEvent};
pub use diff::diff;
pub use error::ParseItemStateError;
pub use ids::{BoardId, CardId, ChecklistName, CredentialsHandle, ItemName, MemberId, ScopeId};
