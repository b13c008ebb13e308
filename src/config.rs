//! # Bot Configuration Module
//!
//! Settings are read from the environment (optionally populated from a
//! `.env` file). Only the bot token and the channel are required.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use teloxide::types::{ChatId, Recipient};

// Constants for bot configuration
pub const DEFAULT_SESSION_IDLE_TIMEOUT_SECS: u64 = 60 * 60; // 1 hour
pub const DEFAULT_SESSION_SWEEP_INTERVAL_SECS: u64 = 5 * 60; // 5 minutes

/// Session lifetime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Idle time after which a session is dropped; `None` disables expiry
    pub idle_timeout: Option<Duration>,
    /// How often the background sweep looks for expired sessions
    pub sweep_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout: Some(Duration::from_secs(DEFAULT_SESSION_IDLE_TIMEOUT_SECS)),
            sweep_interval: Duration::from_secs(DEFAULT_SESSION_SWEEP_INTERVAL_SECS),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Configuration for the whole bot process
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Telegram bot token (`BOT_TOKEN`)
    pub bot_token: String,
    /// Channel receiving published sightings (`CHANNEL_ID`)
    pub channel: Recipient,
    pub session: SessionConfig,
    pub log_format: LogFormat,
}

impl BotConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let bot_token = env::var("BOT_TOKEN").context("BOT_TOKEN must be set")?;
        let channel = parse_channel(&env::var("CHANNEL_ID").context("CHANNEL_ID must be set")?)?;

        let mut session = SessionConfig::default();
        if let Some(secs) = read_secs("SESSION_IDLE_TIMEOUT_SECS")? {
            session.idle_timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }
        if let Some(secs) = read_secs("SESSION_SWEEP_INTERVAL_SECS")? {
            anyhow::ensure!(secs > 0, "SESSION_SWEEP_INTERVAL_SECS must be greater than zero");
            session.sweep_interval = Duration::from_secs(secs);
        }

        let log_format = match env::var("LOG_FORMAT") {
            Ok(value) => parse_log_format(&value)?,
            Err(_) => LogFormat::default(),
        };

        Ok(Self {
            bot_token,
            channel,
            session,
            log_format,
        })
    }
}

/// Parse a channel given either as a numeric chat id or as `@channelname`
pub fn parse_channel(value: &str) -> Result<Recipient> {
    let value = value.trim();
    if let Ok(id) = value.parse::<i64>() {
        return Ok(Recipient::Id(ChatId(id)));
    }

    anyhow::ensure!(
        value.len() > 1 && value.starts_with('@'),
        "CHANNEL_ID must be a numeric chat id or an @channel username, got {value:?}"
    );
    Ok(Recipient::ChannelUsername(value.to_string()))
}

pub fn parse_log_format(value: &str) -> Result<LogFormat> {
    match value.trim().to_lowercase().as_str() {
        "" | "pretty" | "text" => Ok(LogFormat::Pretty),
        "json" => Ok(LogFormat::Json),
        other => anyhow::bail!("unsupported LOG_FORMAT {other:?}, expected \"pretty\" or \"json\""),
    }
}

fn read_secs(name: &str) -> Result<Option<u64>> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .with_context(|| format!("{name} must be a whole number of seconds")),
        Err(_) => Ok(None),
    }
}
