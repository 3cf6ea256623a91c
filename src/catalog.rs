//! Catalog loading and TTL caching
//!
//! The feed is a static JSON array of game records. A loaded catalog is
//! served from memory until its TTL lapses, then the next query re-reads the
//! feed. Load failures degrade to an empty catalog instead of an error so
//! page rendering falls back to "no games".

use crate::error::{CatalogError, Result};
use crate::models::GameRecord;
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// How long a loaded catalog is served before the feed is re-read
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Immutable snapshot of all game records loaded from the feed
///
/// Records keep feed order. Duplicate ids pass through unchanged; id lookups
/// resolve to the first match.
#[derive(Debug, Default)]
pub struct Catalog {
    games: Vec<GameRecord>,
}

impl Catalog {
    /// Build a catalog from already-parsed records
    pub fn from_games(games: Vec<GameRecord>) -> Self {
        Self { games }
    }

    /// All records in feed order
    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    /// Iterate over all records
    pub fn iter(&self) -> impl Iterator<Item = &GameRecord> {
        self.games.iter()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

/// Parse the feed document, skipping entries that do not conform
///
/// The top-level value must be an array. Elements that are not objects or
/// carry mistyped fields are dropped with a warning instead of failing the
/// whole load.
fn parse_feed(raw: &str) -> Result<Vec<GameRecord>> {
    let doc: serde_json::Value = serde_json::from_str(raw)?;
    let entries = match doc.as_array() {
        Some(entries) => entries,
        None => {
            return Err(CatalogError::InvalidFeed(
                "top-level value is not an array".to_string(),
            ))
        }
    };

    let mut games = Vec::with_capacity(entries.len());
    let mut skipped = 0usize;
    for entry in entries {
        match serde_json::from_value::<GameRecord>(entry.clone()) {
            Ok(game) => games.push(game),
            Err(e) => {
                skipped += 1;
                log::warn!("Skipping malformed feed entry: {}", e);
            }
        }
    }

    if skipped > 0 {
        log::warn!(
            "Skipped {} malformed entries out of {}",
            skipped,
            entries.len()
        );
    }

    Ok(games)
}

/// Read and parse the feed file
fn load_feed(path: &Path) -> Result<Vec<GameRecord>> {
    let raw = std::fs::read_to_string(path)?;
    parse_feed(&raw)
}

/// Cache slot holding the current snapshot and its load time
struct CacheSlot {
    catalog: Arc<Catalog>,
    loaded_at: Option<Instant>,
    loaded_time: Option<String>,
}

/// Feed loader with a process-wide TTL cache
///
/// Queries call `snapshot` and operate on the returned `Arc<Catalog>`; the
/// slot is only locked long enough to clone or replace the reference, so a
/// reader always sees either the old or the new complete catalog.
pub struct CatalogService {
    feed_path: PathBuf,
    ttl: Duration,
    slot: Mutex<CacheSlot>,
}

impl CatalogService {
    /// Create a service for the given feed path with the default 5 minute TTL
    pub fn new(feed_path: impl Into<PathBuf>) -> Self {
        Self::with_ttl(feed_path, DEFAULT_TTL)
    }

    /// Create a service with a custom TTL
    pub fn with_ttl(feed_path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            feed_path: feed_path.into(),
            ttl,
            slot: Mutex::new(CacheSlot {
                catalog: Arc::new(Catalog::default()),
                loaded_at: None,
                loaded_time: None,
            }),
        }
    }

    /// Path of the backing feed file
    pub fn feed_path(&self) -> &Path {
        &self.feed_path
    }

    /// Current catalog snapshot, reloading the feed if the cache is stale
    ///
    /// Never fails: an unreadable or malformed feed yields an empty catalog
    /// for this attempt, cached like a successful load so the reload is
    /// retried once the TTL lapses again.
    pub fn snapshot(&self) -> Arc<Catalog> {
        let mut slot = self.slot.lock().unwrap();

        if let Some(loaded_at) = slot.loaded_at {
            if loaded_at.elapsed() < self.ttl {
                return Arc::clone(&slot.catalog);
            }
        }

        let catalog = match load_feed(&self.feed_path) {
            Ok(games) => {
                log::info!(
                    "Loaded {} games from {}",
                    games.len(),
                    self.feed_path.display()
                );
                Arc::new(Catalog::from_games(games))
            }
            Err(e) => {
                log::error!(
                    "Failed to load game feed {}: {}",
                    self.feed_path.display(),
                    e
                );
                Arc::new(Catalog::default())
            }
        };

        slot.catalog = Arc::clone(&catalog);
        slot.loaded_at = Some(Instant::now());
        slot.loaded_time = Some(Utc::now().to_rfc3339());
        catalog
    }

    /// Drop the cached catalog so the next `snapshot` re-reads the feed
    pub fn invalidate(&self) {
        let mut slot = self.slot.lock().unwrap();
        slot.loaded_at = None;
        log::debug!("Catalog cache invalidated");
    }

    /// RFC 3339 timestamp of the last load, if any
    pub fn loaded_time(&self) -> Option<String> {
        self.slot.lock().unwrap().loaded_time.clone()
    }
}
