//! Startup configuration read from the environment

use library::{LibraryConfig, DEFAULT_DB_FILE, DEFAULT_PAGE_SIZE};
use telegram::Admins;

/// Configuration problems that stop the bot before it serves anything
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set (in the environment or a .env file)")]
    Missing(&'static str),

    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything the binary needs to start
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bot_token: String,
    pub library: LibraryConfig,
    pub admins: Admins,
}

impl AppConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup
    ///
    /// - `BOT_TOKEN`: required
    /// - `SONGS_DB`: database file, defaults to `songs.db`
    /// - `PAGE_SIZE`: tracks per page, defaults to 5
    /// - `ADMIN_IDS`: comma-separated Telegram user ids allowed to add tracks
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bot_token = value("BOT_TOKEN").ok_or(ConfigError::Missing("BOT_TOKEN"))?;

        let db_path = value("SONGS_DB").unwrap_or_else(|| DEFAULT_DB_FILE.to_string());
        let page_size = match value("PAGE_SIZE") {
            Some(raw) => parse_page_size(&raw)?,
            None => DEFAULT_PAGE_SIZE,
        };
        let admins = match value("ADMIN_IDS") {
            Some(raw) => parse_admin_ids(&raw)?,
            None => Admins::default(),
        };

        Ok(Self {
            bot_token,
            library: LibraryConfig::new(db_path).with_page_size(page_size),
            admins,
        })
    }
}

fn parse_page_size(raw: &str) -> Result<usize, ConfigError> {
    let invalid = |reason: &str| ConfigError::Invalid {
        name: "PAGE_SIZE",
        value: raw.to_string(),
        reason: reason.to_string(),
    };
    let size = raw
        .parse::<usize>()
        .map_err(|_| invalid("must be a whole number"))?;
    if size == 0 {
        return Err(invalid("must be at least 1"));
    }
    Ok(size)
}

fn parse_admin_ids(raw: &str) -> Result<Admins, ConfigError> {
    let ids = raw
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "ADMIN_IDS",
                value: raw.to_string(),
                reason: format!("{:?} is not a Telegram user id", id),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Admins::new(ids))
}
