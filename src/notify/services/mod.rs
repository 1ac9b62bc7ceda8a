//! Services for recipient resolution and notification dispatch.

mod dispatcher;
mod resolver;

pub use dispatcher::{DispatchFailure, DispatchReport, NotificationDispatcher};
pub use resolver::resolve_targets;
