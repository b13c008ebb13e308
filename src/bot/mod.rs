//! Bot module for handling Telegram interactions
//!
//! - `commands`: `/start`, `/help`, `/submit` and `/cancel`
//! - `message_handler`: turns text, photo and other messages into dialogue events
//! - `callback_handler`: turns inline keyboard presses into dialogue events
//! - `reply`: sends conversation replies back to the chat
//! - `ui_builder`: creates keyboards and formats messages

pub mod callback_handler;
pub mod commands;
pub mod message_handler;
pub mod reply;
pub mod ui_builder;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;

pub use callback_handler::callback_handler;
pub use commands::{command_handler, Command};
pub use message_handler::message_handler;

/// Build the dispatch tree; expects an `Arc<Conversation>` dependency
pub fn schema() -> UpdateHandler<anyhow::Error> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handler),
        )
        .branch(Update::filter_message().endpoint(message_handler))
        .branch(Update::filter_callback_query().endpoint(callback_handler))
}
