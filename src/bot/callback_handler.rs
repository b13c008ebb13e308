//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, warn};

use crate::conversation::Conversation;
use crate::dialogue::{CallbackTag, Event};

use super::reply::send_reply;

/// Handle callback queries from inline keyboards
pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    conversation: Arc<Conversation>,
) -> Result<()> {
    debug!(user_id = %q.from.id, data = ?q.data, "Received callback query from user");

    // Answer the callback query to remove the loading state
    bot.answer_callback_query(q.id.clone()).await?;

    let Some(msg) = &q.message else {
        debug!(user_id = %q.from.id, "Callback query without a message, ignoring");
        return Ok(());
    };
    let chat_id = msg.chat().id;

    let tag = match q.data.as_deref().unwrap_or("").parse::<CallbackTag>() {
        Ok(tag) => tag,
        Err(e) => {
            warn!(chat_id = %chat_id, error = %e, "Ignoring callback query");
            return Ok(());
        }
    };

    let reply = conversation.handle(chat_id, Event::Button(tag)).await;
    send_reply(&bot, chat_id, reply, Some(msg.id())).await
}
