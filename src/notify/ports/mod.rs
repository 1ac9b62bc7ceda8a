//! Port contracts for chat delivery and subscription preferences.

pub mod messenger;
pub mod preferences;

pub use messenger::{Messenger, MessengerError, MessengerResult, RecipientProfile};
pub use preferences::{PreferencesError, PreferencesResult, PreferencesStore};
