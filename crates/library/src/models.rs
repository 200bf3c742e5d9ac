/// A stored track
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: i64,
    pub title: String,
    pub category: String,
    /// Opaque media reference (a Telegram file id)
    pub media_ref: String,
}

/// The `(id, title)` projection used by page listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackSummary {
    pub id: i64,
    pub title: String,
}

/// Input for creating a track
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrack {
    pub title: String,
    pub category: String,
    pub media_ref: String,
}

impl NewTrack {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        media_ref: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            media_ref: media_ref.into(),
        }
    }
}
