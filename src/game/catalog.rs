//! Content Pool Registry
//!
//! Loads the fixed trivia datasets once at process start and hands out
//! read-only pools keyed by [`Source`]. Ids are assigned purely from load
//! order, so the dataset order below is part of the compatibility contract:
//! reordering datasets (or the genres/media inside one) renumbers every
//! derived id and breaks externally persisted references.
//!
//! The `store` source is never cached here. It is a live adapter over the
//! external theme/question catalog, queried once per generation call through
//! the [`StoreCatalog`] trait; the snapshot lives only for that call.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::{Serialize, Deserialize};
use tracing::info;

use crate::error::Error;
use crate::game::settings::Source;

/// Id distance between two datasets.
pub const SOURCE_OFFSET_UNIT: i64 = 1_000_000;
/// Id distance between two genres of one dataset.
pub const GENRE_STEP: i64 = 1_000;

/// Fixed datasets embedded at build time, in the load order the id scheme
/// depends on. Never reorder.
const FIXED_DATASETS: [(Source, &str, &str); 3] = [
    (Source::Legacy, "legacy.json", include_str!("../../data/legacy.json")),
    (Source::Decade, "decade.json", include_str!("../../data/decade.json")),
    (Source::Genre, "genre.json", include_str!("../../data/genre.json")),
];

// =============================================================================
// CONTENT MODEL
// =============================================================================

/// One trivia unit: a track eligible to become a question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    /// Globally unique entry id (encodes dataset and genre position).
    pub entry_id: i64,
    /// Id of the owning genre.
    pub genre_id: i64,
    /// Track title.
    pub title: String,
    /// Playable media URL.
    pub media_url: String,
    /// Performing artist, when known. Answers fall back to the title
    /// when absent.
    pub artist_name: Option<String>,
    /// External catalog id, when the entry comes from the live store.
    pub deezer_id: Option<i64>,
    /// Album title, when that context is available.
    pub album_title: Option<String>,
}

impl ContentEntry {
    /// Text shown as the answer option for this entry.
    pub fn answer_text(&self) -> &str {
        self.artist_name.as_deref().unwrap_or(&self.title)
    }

    /// Hint shown alongside the answer option.
    pub fn answer_hint(&self) -> String {
        match &self.album_title {
            Some(album) => format!("{} ({})", self.title, album),
            None => self.title.clone(),
        }
    }
}

/// A named grouping of entries. Also supplies the same-topic distractors
/// for a question's wrong answers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    /// Globally unique genre id.
    pub genre_id: i64,
    /// Display title.
    pub title: String,
    /// Entries belonging to this genre.
    pub entries: Vec<ContentEntry>,
}

// =============================================================================
// DATASET FILE SHAPE
// =============================================================================

/// On-disk dataset shape: `{genres: [{genre, media: [{title, music, artist}]}]}`.
#[derive(Debug, Deserialize)]
struct RawDataset {
    genres: Vec<RawGenre>,
}

#[derive(Debug, Deserialize)]
struct RawGenre {
    genre: String,
    media: Vec<RawMedia>,
}

#[derive(Debug, Deserialize)]
struct RawMedia {
    title: String,
    music: String,
    artist: Option<RawArtist>,
}

#[derive(Debug, Deserialize)]
struct RawArtist {
    name: String,
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Read-only registry of the fixed content pools.
///
/// Built once at process start, then shared freely (`Arc`) across
/// concurrent generation calls without synchronization. Uses BTreeMap
/// for deterministic iteration.
#[derive(Clone, Debug)]
pub struct PoolRegistry {
    genres: BTreeMap<i64, Genre>,
    entries: BTreeMap<i64, ContentEntry>,
    pools: BTreeMap<Source, Vec<i64>>,
}

impl PoolRegistry {
    /// Load the embedded datasets in their fixed order.
    ///
    /// A parse failure here means a corrupted build and is fatal at
    /// initialization - it can never happen mid-request.
    pub fn load() -> Result<Self, Error> {
        Self::from_datasets(&FIXED_DATASETS)
    }

    /// Build a registry from explicit datasets (used by `load` and tests).
    ///
    /// Dataset index determines the id offset, so caller-supplied order is
    /// significant.
    pub fn from_datasets(datasets: &[(Source, &str, &str)]) -> Result<Self, Error> {
        let mut genres = BTreeMap::new();
        let mut entries = BTreeMap::new();
        let mut pools: BTreeMap<Source, Vec<i64>> = BTreeMap::new();

        for (dataset_index, (source, name, json)) in datasets.iter().enumerate() {
            let raw: RawDataset = serde_json::from_str(json).map_err(|e| Error::Dataset {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

            let source_offset = SOURCE_OFFSET_UNIT * (dataset_index as i64 + 1);
            let pool = pools.entry(*source).or_default();

            for (genre_index, raw_genre) in raw.genres.into_iter().enumerate() {
                let genre_id = source_offset + GENRE_STEP * (genre_index as i64 + 1);
                let mut genre = Genre {
                    genre_id,
                    title: raw_genre.genre,
                    entries: Vec::with_capacity(raw_genre.media.len()),
                };

                for (media_index, media) in raw_genre.media.into_iter().enumerate() {
                    let entry = ContentEntry {
                        entry_id: genre_id + media_index as i64 + 1,
                        genre_id,
                        title: media.title,
                        media_url: media.music,
                        artist_name: media.artist.map(|a| a.name),
                        deezer_id: None,
                        album_title: None,
                    };
                    pool.push(entry.entry_id);
                    entries.insert(entry.entry_id, entry.clone());
                    genre.entries.push(entry);
                }

                genres.insert(genre_id, genre);
            }

            info!(
                source = source.as_str(),
                entries = pool.len(),
                "loaded content dataset"
            );
        }

        let registry = Self { genres, entries, pools };
        info!(
            genres = registry.genres.len(),
            entries = registry.entries.len(),
            "content pool registry ready"
        );
        Ok(registry)
    }

    /// Flat list of entry ids belonging to a source.
    ///
    /// `Source::Store` is not held here and always yields an empty slice;
    /// its live pool is merged in by [`PoolView`].
    pub fn entry_ids_for(&self, source: Source) -> &[i64] {
        self.pools.get(&source).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Look up an entry by id.
    pub fn entry(&self, id: i64) -> Option<&ContentEntry> {
        self.entries.get(&id)
    }

    /// Look up a genre by id.
    pub fn genre(&self, id: i64) -> Option<&Genre> {
        self.genres.get(&id)
    }

    /// Owning genre of an entry.
    pub fn genre_of(&self, entry: &ContentEntry) -> Option<&Genre> {
        self.genres.get(&entry.genre_id)
    }

    /// Total entries across all fixed pools.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

// =============================================================================
// LIVE STORE CATALOG
// =============================================================================

/// Live backing for [`Source::Store`]: the external, persistence-owned
/// theme/question catalog.
///
/// Queried at most once per generation call; a read failure fails the whole
/// call (no partial game). Isolation against concurrent catalog writes is
/// whatever the external store provides.
pub trait StoreCatalog: Send + Sync {
    /// Snapshot the live catalog as genres with pre-assigned ids.
    ///
    /// Ids are owned by the external catalog and must not collide with the
    /// fixed-dataset offsets.
    fn list_genres(&self) -> Result<Vec<Genre>, Error>;
}

/// Catalog with no content; the default when no store is wired up.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyCatalog;

impl StoreCatalog for EmptyCatalog {
    fn list_genres(&self) -> Result<Vec<Genre>, Error> {
        Ok(Vec::new())
    }
}

/// Fixed in-memory catalog, for tests and the demo binary.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalog {
    genres: Vec<Genre>,
}

impl InMemoryCatalog {
    /// Wrap an explicit genre list.
    pub fn new(genres: Vec<Genre>) -> Self {
        Self { genres }
    }
}

impl StoreCatalog for InMemoryCatalog {
    fn list_genres(&self) -> Result<Vec<Genre>, Error> {
        Ok(self.genres.clone())
    }
}

// =============================================================================
// PER-CALL POOL VIEW
// =============================================================================

/// Merged view of the fixed pools and (when requested) one live store
/// snapshot, scoped to a single generation call.
#[derive(Debug)]
pub struct PoolView<'a> {
    registry: &'a PoolRegistry,
    store_genres: Vec<Genre>,
    store_entry_ids: Vec<i64>,
}

impl<'a> PoolView<'a> {
    /// Open a view for one call. Performs the single store read iff the
    /// request includes [`Source::Store`].
    pub fn open(
        registry: &'a PoolRegistry,
        catalog: &dyn StoreCatalog,
        sources: &BTreeSet<Source>,
    ) -> Result<Self, Error> {
        let store_genres = if sources.contains(&Source::Store) {
            catalog.list_genres()?
        } else {
            Vec::new()
        };

        let store_entry_ids = store_genres
            .iter()
            .flat_map(|g| g.entries.iter().map(|e| e.entry_id))
            .collect();

        Ok(Self { registry, store_genres, store_entry_ids })
    }

    /// Flat list of entry ids for a source, store snapshot included.
    pub fn entry_ids_for(&self, source: Source) -> &[i64] {
        match source {
            Source::Store => &self.store_entry_ids,
            fixed => self.registry.entry_ids_for(fixed),
        }
    }

    /// Look up an entry across the registry and the store snapshot.
    pub fn entry(&self, id: i64) -> Option<&ContentEntry> {
        self.registry.entry(id).or_else(|| {
            self.store_genres
                .iter()
                .flat_map(|g| g.entries.iter())
                .find(|e| e.entry_id == id)
        })
    }

    /// Look up a genre across the registry and the store snapshot.
    pub fn genre(&self, id: i64) -> Option<&Genre> {
        self.registry
            .genre(id)
            .or_else(|| self.store_genres.iter().find(|g| g.genre_id == id))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_dataset() -> &'static str {
        r#"{
            "genres": [
                {
                    "genre": "Pop",
                    "media": [
                        {"title": "Holiday", "music": "http://m/1", "artist": {"name": "Green Day"}},
                        {"title": "Purple rain", "music": "http://m/2", "artist": {"name": "Prince"}}
                    ]
                },
                {
                    "genre": "Jazz",
                    "media": [
                        {"title": "So What", "music": "http://m/3", "artist": {"name": "Miles Davis"}},
                        {"title": "Untitled Take", "music": "http://m/4"}
                    ]
                }
            ]
        }"#
    }

    #[test]
    fn test_load_embedded_datasets() {
        let registry = PoolRegistry::load().unwrap();

        // All three fixed pools are populated
        assert!(!registry.entry_ids_for(Source::Legacy).is_empty());
        assert!(!registry.entry_ids_for(Source::Decade).is_empty());
        assert!(!registry.entry_ids_for(Source::Genre).is_empty());

        // Store is never cached here
        assert!(registry.entry_ids_for(Source::Store).is_empty());
    }

    #[test]
    fn test_id_assignment_from_load_order() {
        let registry =
            PoolRegistry::from_datasets(&[(Source::Legacy, "tiny.json", tiny_dataset())]).unwrap();

        // First dataset: offset 1_000_000; first genre: +1000; first entry: +1
        let pop = registry.genre(1_001_000).unwrap();
        assert_eq!(pop.title, "Pop");
        assert_eq!(pop.entries[0].entry_id, 1_001_001);
        assert_eq!(pop.entries[1].entry_id, 1_001_002);

        let jazz = registry.genre(1_002_000).unwrap();
        assert_eq!(jazz.title, "Jazz");
        assert_eq!(jazz.entries[0].entry_id, 1_002_001);

        // Entry lookup and back-reference to genre
        let purple = registry.entry(1_001_002).unwrap();
        assert_eq!(purple.title, "Purple rain");
        assert_eq!(registry.genre_of(purple).unwrap().genre_id, pop.genre_id);
    }

    #[test]
    fn test_second_dataset_offset() {
        let registry = PoolRegistry::from_datasets(&[
            (Source::Legacy, "a.json", tiny_dataset()),
            (Source::Decade, "b.json", tiny_dataset()),
        ])
        .unwrap();

        // Second dataset starts at 2_000_000, no collision with the first
        assert!(registry.genre(2_001_000).is_some());
        assert_eq!(registry.entry(2_001_001).unwrap().title, "Holiday");
        assert_eq!(registry.entry_ids_for(Source::Decade), &[2_001_001, 2_001_002, 2_002_001, 2_002_002]);
    }

    #[test]
    fn test_missing_artist_falls_back_to_title() {
        let registry =
            PoolRegistry::from_datasets(&[(Source::Legacy, "tiny.json", tiny_dataset())]).unwrap();

        let untitled = registry.entry(1_002_002).unwrap();
        assert_eq!(untitled.artist_name, None);
        assert_eq!(untitled.answer_text(), "Untitled Take");
    }

    #[test]
    fn test_answer_hint_with_album() {
        let mut entry = ContentEntry {
            entry_id: 1,
            genre_id: 1,
            title: "Purple rain".into(),
            media_url: "http://m/2".into(),
            artist_name: Some("Prince".into()),
            deezer_id: None,
            album_title: None,
        };
        assert_eq!(entry.answer_hint(), "Purple rain");

        entry.album_title = Some("Purple Rain".into());
        assert_eq!(entry.answer_hint(), "Purple rain (Purple Rain)");
    }

    #[test]
    fn test_corrupt_dataset_is_an_error() {
        let err = PoolRegistry::from_datasets(&[(Source::Legacy, "bad.json", "{ not json")])
            .unwrap_err();
        assert!(matches!(err, Error::Dataset { .. }));
    }

    #[test]
    fn test_pool_view_merges_store_snapshot() {
        let registry =
            PoolRegistry::from_datasets(&[(Source::Legacy, "tiny.json", tiny_dataset())]).unwrap();

        let store_genre = Genre {
            genre_id: 9_001_000,
            title: "User Picks".into(),
            entries: vec![ContentEntry {
                entry_id: 9_001_001,
                genre_id: 9_001_000,
                title: "Creep".into(),
                media_url: "http://m/9".into(),
                artist_name: Some("Radiohead".into()),
                deezer_id: Some(3155776),
                album_title: Some("Pablo Honey".into()),
            }],
        };
        let catalog = InMemoryCatalog::new(vec![store_genre]);

        // Store requested: snapshot is taken and merged
        let sources = BTreeSet::from([Source::Legacy, Source::Store]);
        let view = PoolView::open(&registry, &catalog, &sources).unwrap();
        assert_eq!(view.entry_ids_for(Source::Store), &[9_001_001]);
        assert_eq!(view.entry(9_001_001).unwrap().title, "Creep");
        assert_eq!(view.genre(9_001_000).unwrap().title, "User Picks");

        // Fixed pools still resolve through the same view
        assert_eq!(view.entry(1_001_002).unwrap().title, "Purple rain");

        // Store not requested: no read, empty store pool
        let sources = BTreeSet::from([Source::Legacy]);
        let view = PoolView::open(&registry, &catalog, &sources).unwrap();
        assert!(view.entry_ids_for(Source::Store).is_empty());
    }

    struct FailingCatalog;

    impl StoreCatalog for FailingCatalog {
        fn list_genres(&self) -> Result<Vec<Genre>, Error> {
            Err(Error::Catalog("connection refused".into()))
        }
    }

    #[test]
    fn test_pool_view_fails_fast_on_catalog_error() {
        let registry =
            PoolRegistry::from_datasets(&[(Source::Legacy, "tiny.json", tiny_dataset())]).unwrap();

        let sources = BTreeSet::from([Source::Store]);
        let err = PoolView::open(&registry, &FailingCatalog, &sources).unwrap_err();
        assert_eq!(err, Error::Catalog("connection refused".into()));

        // No store requested: the failing catalog is never touched
        let sources = BTreeSet::from([Source::Legacy]);
        assert!(PoolView::open(&registry, &FailingCatalog, &sources).is_ok());
    }
}
