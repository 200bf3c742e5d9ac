use crate::types::Command;
use crate::{auth, callbacks, commands};
use teloxide::{dispatching::UpdateHandler, prelude::*, utils::command::BotCommands};

/// Register bot commands in Telegram menu
pub async fn set_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;
    Ok(())
}

/// Handler tree for all updates
///
/// Requires a [`library::Library`] and an [`auth::Admins`] in the dispatcher's
/// dependencies.
pub fn schema() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use dptree::case;

    let command_handler = teloxide::filter_command::<Command, _>()
        .branch(case![Command::Start].endpoint(commands::start))
        .branch(case![Command::Help].endpoint(commands::help));

    // Audio uploads from admins add tracks
    let ingest_handler = Message::filter_audio()
        .filter(auth::is_admin_message)
        .endpoint(commands::add_track);

    let message_handler = Update::filter_message()
        .branch(command_handler)
        .branch(ingest_handler)
        .branch(dptree::endpoint(commands::invalid_state));

    // Handle callback queries from inline keyboards
    let callback_handler = Update::filter_callback_query()
        .endpoint(callbacks::handle_callback);

    dptree::entry()
        .branch(message_handler)
        .branch(callback_handler)
}
