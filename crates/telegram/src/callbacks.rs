//! Callback query handlers for inline keyboard interactions
//!
//! Callback data is decoded into a [`Nav`] and dispatched with an exhaustive
//! match; there is no prefix-based routing.

use crate::constants::{emoji, MAX_CALLBACK_DATA_LEN};
use crate::error::{BotError, UserMessage};
use crate::handlers;
use crate::navigation::{MalformedToken, Nav};
use crate::types::HandlerResult;
use library::Library;
use teloxide::prelude::*;
use teloxide::types::InputFile;

/// Handle all callback queries from inline keyboards
pub async fn handle_callback(bot: Bot, q: CallbackQuery, library: Library) -> HandlerResult {
    let data = match q.data {
        Some(ref data) => data,
        None => {
            bot.answer_callback_query(&q.id).await?;
            return Ok(());
        }
    };

    let nav = match decode(data) {
        Ok(nav) => nav,
        Err(e) => {
            tracing::warn!("Rejected callback from {}: {}", q.from.id, e);
            let err = BotError::from(e);
            bot.answer_callback_query(&q.id)
                .text(err.user_message())
                .show_alert(true)
                .await?;
            return Err(err.into());
        }
    };

    let message = match q.message {
        Some(ref msg) => msg,
        None => {
            // Too old for Telegram to hand back; nothing to edit or reply to
            bot.answer_callback_query(&q.id).await?;
            return Ok(());
        }
    };

    match nav {
        Nav::Browse { category, page } => {
            bot.answer_callback_query(&q.id).await?;
            let screen = handlers::track_page(&library, &category, page).await?;
            bot.edit_message_text(message.chat.id, message.id, screen.text)
                .reply_markup(screen.keyboard)
                .await?;
        }
        Nav::Categories => {
            bot.answer_callback_query(&q.id).await?;
            let screen = handlers::category_menu(&library).await?;
            bot.edit_message_text(message.chat.id, message.id, screen.text)
                .reply_markup(screen.keyboard)
                .await?;
        }
        Nav::Play { track_id } => match library.track(track_id).await? {
            Some(track) => {
                bot.answer_callback_query(&q.id).await?;
                tracing::debug!(track_id, "Sending track to {}", message.chat.id);
                bot.send_audio(message.chat.id, InputFile::file_id(track.media_ref))
                    .await?;
            }
            None => {
                tracing::info!(track_id, "Requested track no longer exists");
                bot.answer_callback_query(&q.id)
                    .text(format!("{} This track is no longer available.", emoji::WARNING))
                    .await?;
            }
        },
    }

    Ok(())
}

/// Decode callback data, refusing anything over Telegram's size limit
fn decode(data: &str) -> Result<Nav, MalformedToken> {
    if data.len() > MAX_CALLBACK_DATA_LEN {
        return Err(MalformedToken(data.to_string()));
    }
    Nav::decode(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_accepts_tokens() {
        assert_eq!(decode("cat:Rock:2"), Ok(Nav::browse("Rock", 2)));
        assert_eq!(decode("play:9"), Ok(Nav::play(9)));
        assert_eq!(decode("menu"), Ok(Nav::Categories));
    }

    #[test]
    fn test_decode_rejects_oversized_data() {
        let data = format!("cat:{}:1", "a".repeat(MAX_CALLBACK_DATA_LEN));
        assert!(decode(&data).is_err());
    }

    #[test]
    fn test_decode_rejects_foreign_data() {
        assert!(decode("page:1").is_err());
        assert!(decode("cat:Rock").is_err());
    }
}
