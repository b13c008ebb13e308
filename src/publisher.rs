//! Publisher module delivering finished sightings to the public channel

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{FileId, InputFile, Recipient};
use thiserror::Error;
use tracing::info;

use crate::draft::{DraftField, PhotoRef};
use crate::renderer::{fit_caption, MAX_CAPTION_CHARS};

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("draft is missing required field `{0}`")]
    IncompleteDraft(DraftField),
    #[error("failed to deliver post to channel: {0}")]
    Delivery(#[from] teloxide::RequestError),
}

/// Destination for finished reports
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, report: &str, photo: &PhotoRef) -> Result<(), PublishError>;
}

/// Posts the photo with the report as caption to a Telegram channel
pub struct ChannelPublisher {
    bot: Bot,
    channel: Recipient,
}

impl ChannelPublisher {
    pub fn new(bot: Bot, channel: Recipient) -> Self {
        Self { bot, channel }
    }
}

#[async_trait]
impl Publisher for ChannelPublisher {
    async fn publish(&self, report: &str, photo: &PhotoRef) -> Result<(), PublishError> {
        let sent = self
            .bot
            .send_photo(
                self.channel.clone(),
                InputFile::file_id(FileId(photo.as_str().to_string())),
            )
            .caption(fit_caption(report, MAX_CAPTION_CHARS))
            .await?;

        info!(channel = ?self.channel, message_id = sent.id.0, "Sighting posted to channel");
        Ok(())
    }
}
