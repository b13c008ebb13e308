//! Sends a [`Reply`] to the user as Telegram messages

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::{FileId, InputFile, MessageId};
use tracing::{debug, error};

use crate::conversation::Reply;
use crate::dialogue::SubmissionState;
use crate::draft::DraftField;
use crate::localization::t;

use super::ui_builder::{
    ask_text, edit_menu_keyboard, preview_caption, preview_keyboard, replacement_text,
    reprompt_text, skip_keyboard,
};

/// Deliver `reply` to `chat_id`
///
/// `origin` is the message whose button triggered the reply, if any; a
/// successful submission rewrites its caption instead of sending a new message.
pub async fn send_reply(
    bot: &Bot,
    chat_id: ChatId,
    reply: Reply,
    origin: Option<MessageId>,
) -> Result<()> {
    match reply {
        Reply::Nothing => {}
        Reply::Ask(DraftField::AdditionalInfo) => {
            bot.send_message(chat_id, ask_text(DraftField::AdditionalInfo))
                .reply_markup(skip_keyboard())
                .await?;
        }
        Reply::Ask(field) => {
            bot.send_message(chat_id, ask_text(field)).await?;
        }
        Reply::AskReplacement(field) => {
            bot.send_message(chat_id, replacement_text(field)).await?;
        }
        Reply::Reprompt(SubmissionState::AskAdditionalInfo) => {
            bot.send_message(chat_id, reprompt_text(SubmissionState::AskAdditionalInfo))
                .reply_markup(skip_keyboard())
                .await?;
        }
        Reply::Reprompt(state) => {
            bot.send_message(chat_id, reprompt_text(state)).await?;
        }
        Reply::Preview { report, photo } => {
            bot.send_photo(chat_id, InputFile::file_id(FileId(photo.0)))
                .caption(preview_caption(&report))
                .reply_markup(preview_keyboard())
                .await?;
        }
        Reply::EditMenu => {
            bot.send_message(chat_id, t("edit-menu-title"))
                .reply_markup(edit_menu_keyboard())
                .await?;
        }
        Reply::Published => match origin {
            Some(message_id) => {
                // Editing without a markup also removes the Edit/Submit keyboard
                match bot
                    .edit_message_caption(chat_id, message_id)
                    .caption(t("submission-sent"))
                    .await
                {
                    Ok(_) => debug!(chat_id = %chat_id, "Preview caption replaced"),
                    Err(e) => {
                        error!(chat_id = %chat_id, error = %e, "Failed to edit preview caption");
                        bot.send_message(chat_id, t("submission-sent")).await?;
                    }
                }
            }
            None => {
                bot.send_message(chat_id, t("submission-sent")).await?;
            }
        },
        Reply::PublishFailed => {
            bot.send_message(chat_id, t("submission-failed")).await?;
        }
        Reply::Cancelled => {
            bot.send_message(chat_id, t("submission-cancelled")).await?;
        }
        Reply::NothingToCancel => {
            bot.send_message(chat_id, t("nothing-to-cancel")).await?;
        }
    }

    Ok(())
}
