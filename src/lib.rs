//! # Free Food Bot
//!
//! A Telegram bot that walks a user through reporting a free food sighting
//! (location, clear time, additional info, photo), lets them review and
//! edit any field, and publishes the finished report to a public channel.

pub mod bot;
pub mod config;
pub mod conversation;
pub mod dialogue;
pub mod draft;
pub mod edit_router;
pub mod localization;
pub mod publisher;
pub mod renderer;
pub mod session_store;
pub mod state_machine;
