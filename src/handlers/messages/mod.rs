//! Message handler
//!
//! Every message in a private chat becomes an inbound event for the
//! conversation engine; its directives are delivered back to the same chat.

use std::sync::Arc;
use teloxide::{Bot, types::Message};
use tracing::debug;
use crate::models::InboundEvent;
use crate::state::ConversationEngine;
use crate::utils::errors::Result;
use super::delivery::deliver;

/// Inbound event for a Telegram message
///
/// Messages without text (stickers, photos) are treated as empty input.
pub fn inbound_event(msg: &Message) -> InboundEvent {
    let event = InboundEvent::new(msg.chat.id.0, msg.text().unwrap_or_default());

    match msg.from.as_ref().and_then(|user| user.username.clone()) {
        Some(username) => event.with_display_name(username),
        None => event,
    }
}

/// Handle an incoming message
pub async fn handle_message(bot: Bot, msg: Message, engine: Arc<ConversationEngine>) -> Result<()> {
    let event = inbound_event(&msg);
    debug!(user_id = event.user_id, chat_id = ?msg.chat.id, "Processing message");

    let directives = engine.handle(&event).await;
    deliver(&bot, msg.chat.id, directives).await;

    Ok(())
}
