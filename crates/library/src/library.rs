use crate::config::LibraryConfig;
use crate::error::Result;
use crate::models::{NewTrack, Track, TrackSummary};
use crate::store::TrackStore;
use std::sync::Arc;

/// Async handle to the song library
///
/// Cheap to clone; handlers receive it through dependency injection. Each
/// call opens a fresh [`TrackStore`] on tokio's blocking pool and drops it
/// before returning.
#[derive(Debug, Clone)]
pub struct Library {
    config: Arc<LibraryConfig>,
}

impl Library {
    pub fn new(config: LibraryConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Tracks per page
    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    /// Open the database once so schema problems show up at startup
    pub async fn init(&self) -> Result<()> {
        let categories = self.with_store(|store| store.list_categories()).await.map_err(|e| {
            tracing::error!("Failed to open song database {}: {}", self.config.db_path.display(), e);
            e
        })?;
        tracing::info!(
            "Song database ready at {} ({} categories)",
            self.config.db_path.display(),
            categories.len()
        );
        Ok(())
    }

    /// Store a new track, returning it as persisted
    pub async fn add_track(&self, track: NewTrack) -> Result<Track> {
        self.with_store(move |store| {
            let id = store.create(&track)?;
            Ok(Track {
                id,
                title: track.title.trim().to_string(),
                category: track.category.trim().to_string(),
                media_ref: track.media_ref.trim().to_string(),
            })
        })
        .await
    }

    pub async fn categories(&self) -> Result<Vec<String>> {
        self.with_store(|store| store.list_categories()).await
    }

    /// Page `page` (1-indexed) of `category`
    pub async fn page(&self, category: &str, page: u32) -> Result<Vec<TrackSummary>> {
        let category = category.to_string();
        let page_size = self.config.page_size;
        self.with_store(move |store| store.list_page(&category, page, page_size))
            .await
    }

    pub async fn count(&self, category: &str) -> Result<u64> {
        let category = category.to_string();
        self.with_store(move |store| store.count_in_category(&category))
            .await
    }

    pub async fn track(&self, id: i64) -> Result<Option<Track>> {
        self.with_store(move |store| store.get_track(id)).await
    }

    async fn with_store<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&TrackStore) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let path = self.config.db_path.clone();
        tokio::task::spawn_blocking(move || {
            let store = TrackStore::open(&path)?;
            op(&store)
        })
        .await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LibraryError;

    fn temp_library(page_size: usize) -> (tempfile::TempDir, Library) {
        let dir = tempfile::tempdir().unwrap();
        let config = LibraryConfig::new(dir.path().join("songs.db")).with_page_size(page_size);
        (dir, Library::new(config))
    }

    #[tokio::test]
    async fn test_init_creates_database() {
        let (dir, library) = temp_library(5);
        library.init().await.unwrap();
        assert!(dir.path().join("songs.db").exists());
        assert!(library.categories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_and_fetch_track() {
        let (_dir, library) = temp_library(5);
        let added = library
            .add_track(NewTrack::new(" Bohemian Rhapsody ", "Rock ", "file-1"))
            .await
            .unwrap();
        assert_eq!(added.title, "Bohemian Rhapsody");
        assert_eq!(added.category, "Rock");

        let missing_id = added.id + 1;
        let fetched = library.track(added.id).await.unwrap();
        assert_eq!(fetched, Some(added));
        assert_eq!(library.track(missing_id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_paging_uses_configured_size() {
        let (_dir, library) = temp_library(2);
        for i in 0..5 {
            library
                .add_track(NewTrack::new(format!("Song {}", i), "Pop", format!("f{}", i)))
                .await
                .unwrap();
        }

        assert_eq!(library.page_size(), 2);
        assert_eq!(library.page("Pop", 1).await.unwrap().len(), 2);
        assert_eq!(library.page("Pop", 3).await.unwrap().len(), 1);
        assert!(library.page("Pop", 4).await.unwrap().is_empty());
        assert_eq!(library.count("Pop").await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_validation_error_writes_nothing() {
        let (_dir, library) = temp_library(5);
        let result = library.add_track(NewTrack::new("", "Rock", "f1")).await;
        assert!(matches!(result, Err(LibraryError::Validation(_))));
        assert!(library.categories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_database() {
        let (_dir, library) = temp_library(5);
        let other = library.clone();
        library
            .add_track(NewTrack::new("Song", "Jazz", "f1"))
            .await
            .unwrap();
        assert_eq!(other.categories().await.unwrap(), vec!["Jazz"]);
    }
}
