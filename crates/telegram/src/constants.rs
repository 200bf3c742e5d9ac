//! Constants used throughout the telegram bot

/// Telegram rejects callback data longer than this many bytes
pub const MAX_CALLBACK_DATA_LEN: usize = 64;

/// Track titles longer than this are shortened on buttons
pub const MAX_BUTTON_LABEL_CHARS: usize = 40;

/// Separator between category and title in an ingestion caption
pub const CAPTION_SEPARATOR: char = '|';

/// Emoji constants for consistent UI
pub mod emoji {
    pub const SUCCESS: &str = "✅";
    pub const ERROR: &str = "❌";
    pub const WARNING: &str = "⚠️";
    pub const MUSIC: &str = "🎵";
    pub const NOTES: &str = "🎶";
    pub const TRACK: &str = "🎧";
    pub const EMPTY: &str = "📭";
    pub const PREVIOUS: &str = "⬅️";
    pub const NEXT: &str = "➡️";
    pub const BACK: &str = "◀️";
}

/// Usage messages
pub mod usage {
    pub const CAPTION: &str = "Format: Category | Title\n\nSend an audio file with a caption like:\nRock | Bohemian Rhapsody";
}
