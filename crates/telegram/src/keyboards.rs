//! Inline keyboard builders for the song browser
//!
//! Every callback button carries a [`Nav`] token, so the next click knows
//! exactly which screen to render without any server-side session.

use crate::constants::{emoji, MAX_BUTTON_LABEL_CHARS};
use crate::navigation::Nav;
use crate::utils;
use library::TrackSummary;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// Create a callback button for a navigation token
pub fn nav_button(text: impl Into<String>, nav: &Nav) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(text, nav.encode())
}

/// One button per category, each opening page 1
///
/// An empty slice gives an empty keyboard.
pub fn categories_keyboard(categories: &[String]) -> InlineKeyboardMarkup {
    let buttons: Vec<Vec<InlineKeyboardButton>> = categories
        .iter()
        .map(|category| vec![nav_button(category.as_str(), &Nav::browse(category.as_str(), 1))])
        .collect();

    InlineKeyboardMarkup::new(buttons)
}

/// Track buttons for one page of a category
///
/// # Arguments
/// * `category` - Category being browsed
/// * `page` - Current page (1-indexed)
/// * `tracks` - Tracks on this page
/// * `page_size` - Configured page size
///
/// # Returns
/// One row per track, then a navigation row (previous when `page > 1`, next
/// when the page is full), then a row leading back to the categories.
///
/// A full page is taken to mean more tracks follow. When the category holds
/// an exact multiple of `page_size` tracks, the last next button leads to an
/// empty page.
pub fn track_page_keyboard(
    category: &str,
    page: u32,
    tracks: &[TrackSummary],
    page_size: usize,
) -> InlineKeyboardMarkup {
    let mut buttons: Vec<Vec<InlineKeyboardButton>> = tracks
        .iter()
        .map(|track| {
            vec![nav_button(
                format!("{} {}", emoji::TRACK, utils::truncate_label(&track.title, MAX_BUTTON_LABEL_CHARS)),
                &Nav::play(track.id),
            )]
        })
        .collect();

    let mut nav_row = vec![];
    if page > 1 {
        nav_row.push(nav_button(
            format!("{} Previous", emoji::PREVIOUS),
            &Nav::browse(category, page - 1),
        ));
    }
    if tracks.len() == page_size && page < u32::MAX {
        nav_row.push(nav_button(
            format!("Next {}", emoji::NEXT),
            &Nav::browse(category, page + 1),
        ));
    }
    if !nav_row.is_empty() {
        buttons.push(nav_row);
    }

    buttons.push(vec![nav_button(
        format!("{} Categories", emoji::BACK),
        &Nav::Categories,
    )]);

    InlineKeyboardMarkup::new(buttons)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    /// Callback data of a button, if it has any
    pub(crate) fn callback_data(button: &InlineKeyboardButton) -> Option<&str> {
        match &button.kind {
            InlineKeyboardButtonKind::CallbackData(data) => Some(data.as_str()),
            _ => None,
        }
    }

    fn summaries(ids: std::ops::RangeInclusive<i64>) -> Vec<TrackSummary> {
        ids.map(|id| TrackSummary {
            id,
            title: format!("Song {}", id),
        })
        .collect()
    }

    #[test]
    fn test_categories_keyboard() {
        let keyboard = categories_keyboard(&["Jazz".to_string(), "Rock".to_string()]);
        assert_eq!(keyboard.inline_keyboard.len(), 2);
        assert_eq!(keyboard.inline_keyboard[0][0].text, "Jazz");
        assert_eq!(callback_data(&keyboard.inline_keyboard[0][0]), Some("cat:Jazz:1"));
        assert_eq!(callback_data(&keyboard.inline_keyboard[1][0]), Some("cat:Rock:1"));
    }

    #[test]
    fn test_categories_keyboard_empty() {
        let keyboard = categories_keyboard(&[]);
        assert!(keyboard.inline_keyboard.is_empty());
    }

    #[test]
    fn test_first_partial_page() {
        // 3 tracks, page size 5: tracks + back row, no navigation
        let keyboard = track_page_keyboard("Rock", 1, &summaries(1..=3), 5);
        assert_eq!(keyboard.inline_keyboard.len(), 4);
        assert_eq!(callback_data(&keyboard.inline_keyboard[0][0]), Some("play:1"));
        assert_eq!(callback_data(&keyboard.inline_keyboard[2][0]), Some("play:3"));
        assert_eq!(callback_data(&keyboard.inline_keyboard[3][0]), Some("menu"));
    }

    #[test]
    fn test_full_first_page_has_next() {
        let keyboard = track_page_keyboard("Pop", 1, &summaries(1..=5), 5);
        assert_eq!(keyboard.inline_keyboard.len(), 7); // 5 tracks + nav + back
        let nav_row = &keyboard.inline_keyboard[5];
        assert_eq!(nav_row.len(), 1);
        assert_eq!(callback_data(&nav_row[0]), Some("cat:Pop:2"));
    }

    #[test]
    fn test_middle_page_has_both() {
        let keyboard = track_page_keyboard("Pop", 2, &summaries(6..=10), 5);
        let nav_row = &keyboard.inline_keyboard[5];
        assert_eq!(nav_row.len(), 2);
        assert_eq!(callback_data(&nav_row[0]), Some("cat:Pop:1"));
        assert_eq!(callback_data(&nav_row[1]), Some("cat:Pop:3"));
    }

    #[test]
    fn test_empty_page_past_end() {
        // Reached through the next button of an exactly full last page
        let keyboard = track_page_keyboard("Pop", 2, &[], 5);
        assert_eq!(keyboard.inline_keyboard.len(), 2); // previous + back
        assert_eq!(callback_data(&keyboard.inline_keyboard[0][0]), Some("cat:Pop:1"));
    }

    #[test]
    fn test_long_titles_truncated() {
        let tracks = vec![TrackSummary {
            id: 7,
            title: "x".repeat(100),
        }];
        let keyboard = track_page_keyboard("Rock", 1, &tracks, 5);
        let label = &keyboard.inline_keyboard[0][0].text;
        assert!(label.chars().count() <= MAX_BUTTON_LABEL_CHARS + 2);
        assert!(label.ends_with('…'));
    }
}
