//! Adding tracks from audio uploads

use crate::error::UserMessage;
use crate::handlers;
use crate::types::HandlerResult;
use library::Library;
use teloxide::prelude::*;
use teloxide::types::Audio;

/// Store an uploaded audio file under the category and title in its caption
///
/// Only reached for admins (see [`crate::auth`]). An upload without a caption
/// is ignored without a reply.
pub async fn add_track(bot: Bot, msg: Message, audio: Audio, library: Library) -> HandlerResult {
    let caption = match msg.caption() {
        Some(caption) => caption,
        None => {
            tracing::debug!("Ignoring audio without caption in chat {}", msg.chat.id);
            return Ok(());
        }
    };

    let reply = match handlers::ingest_track(&library, caption, &audio.file.id).await {
        Ok(track) => handlers::format_track_added(&track),
        Err(err) if err.is_user_error() => err.user_message(),
        Err(err) => {
            tracing::error!("Failed to add track: {}", err);
            err.user_message()
        }
    };

    bot.send_message(msg.chat.id, reply)
        .reply_to_message_id(msg.id)
        .await?;
    Ok(())
}
