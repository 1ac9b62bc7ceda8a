//! Rendering of change events into outgoing chat messages.
//!
//! One message is rendered per (card, target) pair: the new-card template
//! for first observations, the update template with one line per change
//! event otherwise. Line wording and emoji markers are part of the
//! user-visible contract and must stay stable across releases.

use crate::board::domain::{CardChanges, ChangeEvent};
use minijinja::{Environment, context};
use thiserror::Error;

const NEW_CARD_TEMPLATE: &str =
    "{{ mention }}, a new card has been assigned to you: **{{ card_name }}**\n{{ card_url }}";

const UPDATE_TEMPLATE: &str = "{{ mention }}, updates on your card: **{{ card_name }}**\n\
{{ card_url }}\n{{ change_list }}";

/// Errors returned while rendering message templates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The message template failed to render.
    #[error("message template rendering failed: {reason}")]
    TemplateRender {
        /// Human-readable rendering failure.
        reason: String,
    },
}

/// Renders the human-readable line for one change event.
///
/// Returns `None` for [`ChangeEvent::NewCard`], which renders as a whole
/// message rather than a line.
#[must_use]
pub fn change_line(event: &ChangeEvent) -> Option<String> {
    match event {
        ChangeEvent::NewCard => None,
        ChangeEvent::DescriptionChanged { new_text } => {
            Some(format!("📜 **Description changed:**\n{new_text}"))
        }
        ChangeEvent::ChecklistAdded { checklist } => {
            Some(format!("📋 **New checklist added:** {checklist}"))
        }
        ChangeEvent::ItemAdded { checklist, item } => {
            Some(format!("🆕 **New item added:** {item} ({checklist})"))
        }
        ChangeEvent::ItemCompleted { checklist, item } => {
            Some(format!("✅ **Item completed:** {item} ({checklist})"))
        }
        ChangeEvent::ItemReopened { checklist, item } => {
            Some(format!("🔄 **Item reopened:** {item} ({checklist})"))
        }
        ChangeEvent::ItemRemoved { checklist, item } => {
            Some(format!("❌ **Item removed:** {item} ({checklist})"))
        }
    }
}

/// Renders the message announcing a newly observed card.
///
/// # Errors
///
/// Returns [`RenderError::TemplateRender`] when the template fails to
/// render.
pub fn render_new_card(changes: &CardChanges, mention: &str) -> Result<String, RenderError> {
    render(NEW_CARD_TEMPLATE, changes, mention, String::new())
}

/// Renders the combined message listing every change on an updated card.
///
/// # Errors
///
/// Returns [`RenderError::TemplateRender`] when the template fails to
/// render.
pub fn render_update(changes: &CardChanges, mention: &str) -> Result<String, RenderError> {
    let change_list = changes
        .events()
        .iter()
        .filter_map(change_line)
        .collect::<Vec<_>>()
        .join("\n");
    render(UPDATE_TEMPLATE, changes, mention, change_list)
}

fn render(
    template: &str,
    changes: &CardChanges,
    mention: &str,
    change_list: String,
) -> Result<String, RenderError> {
    let environment = Environment::new();
    environment
        .render_str(
            template,
            context! {
                mention => mention,
                card_name => changes.card_name(),
                card_url => changes.card_url(),
                change_list => change_list,
            },
        )
        .map_err(|error| RenderError::TemplateRender {
            reason: error.to_string(),
        })
}
