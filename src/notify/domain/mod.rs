//! Domain model for notification routing.
//!
//! Models the per-scope subscription registry, resolved dispatch targets,
//! and the rendering of change events into outgoing message text.

mod registry;
mod render;
mod target;

pub use registry::{ChannelName, RecipientId, RegistryEntry, ScopeRegistry};
pub use render::{RenderError, change_line, render_new_card, render_update};
pub use target::DispatchTarget;
