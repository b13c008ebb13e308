//! Bot commands and their handler

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::debug;

use crate::conversation::Conversation;
use crate::dialogue::Event;
use crate::localization::t;

use super::reply::send_reply;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "Start the bot")]
    Start,
    #[command(description = "Show available commands")]
    Help,
    #[command(description = "Submit a free food sighting")]
    Submit,
    #[command(description = "Cancel the current submission")]
    Cancel,
}

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    conversation: Arc<Conversation>,
) -> Result<()> {
    debug!(chat_id = %msg.chat.id, command = ?cmd, "Received command");

    match cmd {
        Command::Start => {
            bot.send_message(msg.chat.id, t("welcome")).await?;
        }
        Command::Help => {
            let help_message = format!("{}\n{}", t("help-title"), Command::descriptions());
            bot.send_message(msg.chat.id, help_message).await?;
        }
        Command::Submit => {
            let reply = conversation.handle(msg.chat.id, Event::Submit).await;
            send_reply(&bot, msg.chat.id, reply, None).await?;
        }
        Command::Cancel => {
            let reply = conversation.handle(msg.chat.id, Event::Cancel).await;
            send_reply(&bot, msg.chat.id, reply, None).await?;
        }
    }

    Ok(())
}
