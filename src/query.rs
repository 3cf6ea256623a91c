//! Read-only queries over a catalog snapshot
//!
//! Every function is a pure function of the snapshot it is given. Totals are
//! counted before slicing so callers can build pagination controls; offsets
//! past the end clamp to an empty page rather than erroring.

use crate::catalog::Catalog;
use crate::models::GameRecord;
use serde::Serialize;
use std::collections::BTreeSet;

/// One page of query results plus the total match count before slicing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub games: Vec<GameRecord>,
    pub total: usize,
}

impl Page {
    /// The empty page
    pub fn empty() -> Self {
        Self {
            games: Vec::new(),
            total: 0,
        }
    }
}

/// Slice the match list: `matches[offset..offset + limit]` bounds-clamped,
/// or the full list when no limit is given
fn paged(matches: Vec<GameRecord>, limit: Option<usize>, offset: usize) -> Page {
    let total = matches.len();
    let games = match limit {
        Some(limit) => {
            let start = offset.min(total);
            let end = offset.saturating_add(limit).min(total);
            matches[start..end].to_vec()
        }
        None => matches,
    };
    Page { games, total }
}

/// All games in feed order, paged
pub fn all_games(catalog: &Catalog, limit: Option<usize>, offset: usize) -> Page {
    paged(catalog.games().to_vec(), limit, offset)
}

/// Games whose category equals `name` case-insensitively, paged
pub fn games_by_category(
    catalog: &Catalog,
    name: &str,
    limit: Option<usize>,
    offset: usize,
) -> Page {
    let matches: Vec<GameRecord> = catalog
        .iter()
        .filter(|g| g.in_category(name))
        .cloned()
        .collect();
    paged(matches, limit, offset)
}

/// Games whose parsed tag set contains `name` case-insensitively, paged
pub fn games_by_tag(catalog: &Catalog, name: &str, limit: Option<usize>, offset: usize) -> Page {
    let matches: Vec<GameRecord> = catalog
        .iter()
        .filter(|g| g.has_tag(name))
        .cloned()
        .collect();
    paged(matches, limit, offset)
}

/// Distinct non-empty category names, sorted, stored case preserved
pub fn all_categories(catalog: &Catalog) -> Vec<String> {
    let categories: BTreeSet<&str> = catalog
        .iter()
        .filter(|g| !g.category.is_empty())
        .map(|g| g.category.as_str())
        .collect();
    categories.into_iter().map(str::to_string).collect()
}

/// Distinct trimmed tags across the whole catalog, sorted
pub fn all_tags(catalog: &Catalog) -> Vec<String> {
    let tags: BTreeSet<&str> = catalog.iter().flat_map(|g| g.tag_list()).collect();
    tags.into_iter().map(str::to_string).collect()
}

/// Look up a game by exact id. First match wins when the feed carries
/// duplicate ids.
pub fn game_by_id(catalog: &Catalog, id: &str) -> Option<GameRecord> {
    catalog.iter().find(|g| g.id == id).cloned()
}

/// Games shown alongside a game page: everything except records with the
/// given id, in feed order, capped at `limit`
pub fn related_games(catalog: &Catalog, id: &str, limit: usize) -> Vec<GameRecord> {
    catalog
        .iter()
        .filter(|g| g.id != id)
        .take(limit)
        .cloned()
        .collect()
}
