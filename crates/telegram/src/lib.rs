pub mod auth;
pub mod callbacks;
pub mod commands;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod keyboards;
pub mod navigation;
pub mod telegram;
pub mod types;
pub mod utils;

pub use auth::Admins;
pub use error::{BotError, BotResult};
pub use navigation::{MalformedToken, Nav};
pub use teloxide::prelude::Dispatcher;
pub use types::{Command, HandlerResult};
