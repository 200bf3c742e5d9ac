//! Screen builders shared by commands and callbacks
//!
//! These functions turn library queries into the text and keyboard a handler
//! sends, so the bot-facing endpoints only deal with Telegram requests.

use crate::constants::emoji;
use crate::error::{BotError, BotResult};
use crate::keyboards;
use crate::navigation;
use crate::utils;
use library::{Library, NewTrack, Track};
use teloxide::types::InlineKeyboardMarkup;

/// Message text plus its inline keyboard
#[derive(Debug, Clone)]
pub struct Screen {
    pub text: String,
    pub keyboard: InlineKeyboardMarkup,
}

/// The category list shown by /start
pub async fn category_menu(library: &Library) -> BotResult<Screen> {
    let categories = library.categories().await?;

    let text = if categories.is_empty() {
        format!("{} No songs yet.", emoji::EMPTY)
    } else {
        format!("{} Pick a category:", emoji::MUSIC)
    };

    Ok(Screen {
        text,
        keyboard: keyboards::categories_keyboard(&categories),
    })
}

/// One page of tracks in a category
pub async fn track_page(library: &Library, category: &str, page: u32) -> BotResult<Screen> {
    let tracks = library.page(category, page).await?;
    let total = library.count(category).await?;

    tracing::debug!(category, page, shown = tracks.len(), total, "Rendering track page");

    Ok(Screen {
        text: format!(
            "{} {}:",
            emoji::NOTES,
            utils::format_page_header(category, page, total, library.page_size())
        ),
        keyboard: keyboards::track_page_keyboard(category, page, &tracks, library.page_size()),
    })
}

/// Parse an ingestion caption and store the track
///
/// A caption without `|` or a category that can't be carried in a button is
/// an [`BotError::InvalidArguments`]; empty fields come back as a library
/// validation error. Nothing is written in either case.
pub async fn ingest_track(library: &Library, caption: &str, media_ref: &str) -> BotResult<Track> {
    let (category, title) = utils::parse_caption(caption).map_err(BotError::InvalidArguments)?;
    navigation::check_category(&category).map_err(BotError::InvalidArguments)?;

    let track = library
        .add_track(NewTrack::new(title, category, media_ref))
        .await?;
    tracing::info!(id = track.id, category = %track.category, "Added track {:?}", track.title);
    Ok(track)
}

/// Confirmation sent after a successful ingestion
pub fn format_track_added(track: &Track) -> String {
    format!(
        "{} Added \"{}\" to {}",
        emoji::SUCCESS,
        track.title,
        track.category
    )
}
