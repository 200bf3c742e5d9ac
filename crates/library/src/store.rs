//! Synchronous access to the `songs` table
//!
//! A [`TrackStore`] wraps one SQLite connection. Opening it ensures the schema
//! exists, so a fresh file and an existing one behave the same.

use crate::error::{LibraryError, Result};
use crate::models::{NewTrack, Track, TrackSummary};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::Duration;

/// How long a connection waits on a locked database before failing
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS songs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        category TEXT NOT NULL,
        media_ref TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_songs_category ON songs(category, id);";

/// One connection to the song database
pub struct TrackStore {
    conn: Connection,
}

impl TrackStore {
    /// Open (or create) the database file and ensure the schema exists
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;
        Self::with_connection(conn)
    }

    /// In-memory store, mostly useful for tests
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Insert a track and return its id
    ///
    /// Title, category and media reference are trimmed; any of them being
    /// empty afterwards is a validation error and nothing is written.
    pub fn create(&self, track: &NewTrack) -> Result<i64> {
        let title = non_empty("title", &track.title)?;
        let category = non_empty("category", &track.category)?;
        let media_ref = non_empty("media reference", &track.media_ref)?;

        self.conn.execute(
            "INSERT INTO songs (title, category, media_ref) VALUES (?1, ?2, ?3)",
            params![title, category, media_ref],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, category, "Stored track");
        Ok(id)
    }

    /// Distinct categories in ascending order
    pub fn list_categories(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT category FROM songs ORDER BY category")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// One page of a category, ordered by id
    ///
    /// `page` is 1-indexed; 0 is rejected. A page past the end, or an unknown
    /// category, yields an empty list.
    pub fn list_page(&self, category: &str, page: u32, page_size: usize) -> Result<Vec<TrackSummary>> {
        if page == 0 {
            return Err(LibraryError::InvalidPage(page));
        }
        let limit = page_size as i64;
        let offset = (i64::from(page) - 1) * limit;

        let mut stmt = self.conn.prepare(
            "SELECT id, title FROM songs WHERE category = ?1 ORDER BY id LIMIT ?2 OFFSET ?3",
        )?;
        let rows = stmt.query_map(params![category, limit, offset], |row| {
            Ok(TrackSummary {
                id: row.get(0)?,
                title: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Number of tracks in a category
    pub fn count_in_category(&self, category: &str) -> Result<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM songs WHERE category = ?1",
            params![category],
            |row| row.get(0),
        )?;
        Ok(count.max(0) as u64)
    }

    /// Point lookup; a missing id is `Ok(None)`
    pub fn get_track(&self, id: i64) -> Result<Option<Track>> {
        let track = self
            .conn
            .query_row(
                "SELECT id, title, category, media_ref FROM songs WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Track {
                        id: row.get(0)?,
                        title: row.get(1)?,
                        category: row.get(2)?,
                        media_ref: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(track)
    }
}

fn non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LibraryError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(trimmed)
}
