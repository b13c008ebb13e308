use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use free_food_bot::bot::{self, Command};
use free_food_bot::config::{BotConfig, LogFormat};
use free_food_bot::conversation::Conversation;
use free_food_bot::publisher::ChannelPublisher;
use free_food_bot::session_store::SessionStore;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Pretty => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = BotConfig::from_env()?;
    init_tracing(config.log_format);

    info!(channel = ?config.channel, "Starting Free Food Bot");

    let bot = Bot::new(&config.bot_token);
    bot.set_my_commands(Command::bot_commands()).await?;

    let sessions = Arc::new(SessionStore::new(config.session.idle_timeout));
    if config.session.idle_timeout.is_some() {
        let sessions = Arc::clone(&sessions);
        let mut interval = tokio::time::interval(config.session.sweep_interval);
        tokio::spawn(async move {
            loop {
                interval.tick().await;
                let removed = sessions.sweep_expired();
                if removed > 0 {
                    info!(removed, remaining = sessions.len(), "Expired idle sessions");
                } else {
                    debug!(remaining = sessions.len(), "Session sweep found nothing to expire");
                }
            }
        });
    }

    let publisher = Arc::new(ChannelPublisher::new(bot.clone(), config.channel.clone()));
    let conversation = Arc::new(Conversation::new(sessions, publisher));

    info!("Bot initialized, starting dispatcher");

    Dispatcher::builder(bot, bot::schema())
        .dependencies(dptree::deps![conversation])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
