//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::debug;

use crate::conversation::Conversation;
use crate::dialogue::Event;
use crate::draft::PhotoRef;

use super::reply::send_reply;

/// Translate a non-command message into a dialogue event
///
/// Returns `None` for messages the dialogue never looks at, such as
/// unrecognised `/commands`.
pub fn message_event(msg: &Message) -> Option<Event> {
    if let Some(text) = msg.text() {
        if text.starts_with('/') {
            return None;
        }
        return Some(Event::Text(text.to_string()));
    }

    if let Some(photos) = msg.photo() {
        // Telegram lists sizes smallest first
        return photos
            .last()
            .map(|largest| Event::Photo(PhotoRef::new(largest.file.id.0.clone())));
    }

    Some(Event::OtherMessage)
}

pub async fn message_handler(
    bot: Bot,
    msg: Message,
    conversation: Arc<Conversation>,
) -> Result<()> {
    let Some(event) = message_event(&msg) else {
        debug!(chat_id = %msg.chat.id, "Ignoring unrecognised command");
        return Ok(());
    };

    debug!(chat_id = %msg.chat.id, event = ?event, "Received message");
    let reply = conversation.handle(msg.chat.id, event).await;
    send_reply(&bot, msg.chat.id, reply, None).await
}
