mod config;

use config::AppConfig;
use library::Library;
use telegram::telegram;
use teloxide::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    let _ = dotenv::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let library = Library::new(config.library.clone());
    if let Err(e) = library.init().await {
        tracing::error!("Failed to open the song library: {}", e);
        std::process::exit(1);
    }

    if config.admins.is_open() {
        tracing::warn!("ADMIN_IDS is not set; anyone can add tracks");
    } else {
        tracing::info!("{} admin(s) may add tracks", config.admins.len());
    }

    let bot = Bot::new(config.bot_token);

    if let Err(e) = telegram::set_bot_commands(&bot).await {
        tracing::warn!("Failed to register bot commands: {}", e);
    }

    tracing::info!("Bot started successfully!");

    Dispatcher::builder(bot, telegram::schema())
        .dependencies(dptree::deps![library, config.admins])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
