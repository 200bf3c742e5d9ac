//! Utility functions for formatting and parsing

use crate::constants::{usage, CAPTION_SEPARATOR};

/// Shorten a label to at most `max_chars` characters, adding an ellipsis
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let keep = max_chars.saturating_sub(1);
    let mut short: String = label.chars().take(keep).collect();
    short.push('…');
    short
}

/// Split an ingestion caption into `(category, title)`
///
/// The caption is split once on `|`, so a title may itself contain `|`.
/// Both parts are trimmed; emptiness is left to the library to reject.
pub fn parse_caption(caption: &str) -> Result<(String, String), String> {
    match caption.split_once(CAPTION_SEPARATOR) {
        Some((category, title)) => Ok((category.trim().to_string(), title.trim().to_string())),
        None => Err(usage::CAPTION.to_string()),
    }
}

/// Page header, e.g. "Rock · page 2 of 3"
pub fn format_page_header(category: &str, page: u32, total_tracks: u64, page_size: usize) -> String {
    let page_size = page_size.max(1) as u64;
    let total_pages = total_tracks.div_ceil(page_size).max(1);
    format!("{} · page {} of {}", category, page, total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Short", 10), "Short");
        assert_eq!(truncate_label("Exactly10!", 10), "Exactly10!");
        assert_eq!(truncate_label("This is far too long", 10), "This is f…");
        // Counts characters, not bytes
        assert_eq!(truncate_label("Пётр Ильич Чайковский", 5), "Пётр…");
        assert_eq!(truncate_label("", 5), "");
    }

    #[test]
    fn test_parse_caption() {
        assert_eq!(
            parse_caption("Rock|Bohemian Rhapsody"),
            Ok(("Rock".to_string(), "Bohemian Rhapsody".to_string()))
        );
        assert_eq!(
            parse_caption("  Jazz  |  So What  "),
            Ok(("Jazz".to_string(), "So What".to_string()))
        );
        // Only the first separator splits
        assert_eq!(
            parse_caption("Pop | Song | Remix"),
            Ok(("Pop".to_string(), "Song | Remix".to_string()))
        );
        // Empty parts are passed through for the library to reject
        assert_eq!(parse_caption("|Title"), Ok((String::new(), "Title".to_string())));
    }

    #[test]
    fn test_parse_caption_without_separator() {
        let err = parse_caption("Rock - Bohemian Rhapsody").unwrap_err();
        assert!(err.starts_with("Format: Category | Title"));
        assert!(parse_caption("").is_err());
    }

    #[test]
    fn test_format_page_header() {
        assert_eq!(format_page_header("Rock", 1, 12, 5), "Rock · page 1 of 3");
        assert_eq!(format_page_header("Rock", 2, 10, 5), "Rock · page 2 of 2");
        // Past the end still reports at least one page
        assert_eq!(format_page_header("Pop", 3, 0, 5), "Pop · page 3 of 1");
    }
}
