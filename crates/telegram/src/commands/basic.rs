//! Basic bot commands (start, help) and the fallback reply

use crate::handlers;
use crate::types::{Command, HandlerResult};
use library::Library;
use teloxide::{prelude::*, utils::command::BotCommands};

/// Send the category list
pub async fn start(bot: Bot, msg: Message, library: Library) -> HandlerResult {
    let screen = handlers::category_menu(&library).await?;
    bot.send_message(msg.chat.id, screen.text)
        .reply_markup(screen.keyboard)
        .await?;
    Ok(())
}

/// Display help message with available commands
pub async fn help(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, Command::descriptions().to_string())
        .await?;
    Ok(())
}

/// Reply to anything no other handler picked up
pub async fn invalid_state(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(
        msg.chat.id,
        "Unable to handle the message. Type /start to browse songs or /help to see the usage.",
    )
    .await?;
    Ok(())
}
