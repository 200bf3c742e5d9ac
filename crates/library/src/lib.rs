//! Song library backed by a single SQLite table
//!
//! This crate owns the `songs` table: the synchronous [`TrackStore`] does the
//! SQL work, and [`Library`] is the cloneable async handle the bot injects
//! into its handlers. Every call opens its own connection on the blocking
//! pool, so handlers never share connection state.

pub mod config;
pub mod error;
pub mod library;
pub mod models;
pub mod store;

pub use config::{LibraryConfig, DEFAULT_DB_FILE, DEFAULT_PAGE_SIZE};
pub use error::{LibraryError, Result};
pub use library::Library;
pub use models::{NewTrack, Track, TrackSummary};
pub use store::TrackStore;
