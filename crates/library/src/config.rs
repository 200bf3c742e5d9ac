//! Library configuration passed in at startup

use std::path::PathBuf;

/// Database file used when `SONGS_DB` is not set
pub const DEFAULT_DB_FILE: &str = "songs.db";

/// Number of tracks shown per page when `PAGE_SIZE` is not set
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Where the songs table lives and how listings are sliced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryConfig {
    /// Path to the SQLite database file
    pub db_path: PathBuf,
    /// Tracks per page, always at least 1
    pub page_size: usize,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_FILE)
    }
}

impl LibraryConfig {
    /// Create a config for the given database file with the default page size
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the page size. Zero is bumped to 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}
