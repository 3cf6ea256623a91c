//! Free-text search over the catalog
//!
//! Matching is lowercase substring containment over title, description,
//! category and the raw tags field. Matches keep feed order; there is no
//! relevance ranking.

use crate::catalog::Catalog;
use crate::config::SEARCH_RESULTS_LIMIT;
use crate::models::GameRecord;
use crate::query::{all_games, Page};

/// Search the catalog, paged
///
/// An empty or whitespace-only query returns the empty page by contract:
/// the site requires a non-empty search term before acting.
pub fn search_games(catalog: &Catalog, query: &str, limit: Option<usize>, offset: usize) -> Page {
    let matches = match search_matches(catalog, query) {
        Some(matches) => matches,
        None => return Page::empty(),
    };
    // Reuse the listing slicer over a pre-filtered catalog
    all_games(&Catalog::from_games(matches), limit, offset)
}

/// Bounded search for the header dropdown: first matches in feed order,
/// capped at the dropdown limit, no pagination
pub fn suggest_games(catalog: &Catalog, query: &str) -> Vec<GameRecord> {
    match search_matches(catalog, query) {
        Some(mut matches) => {
            matches.truncate(SEARCH_RESULTS_LIMIT);
            matches
        }
        None => Vec::new(),
    }
}

/// Shared predicate pass. `None` means the query was blank.
fn search_matches(catalog: &Catalog, query: &str) -> Option<Vec<GameRecord>> {
    if query.trim().is_empty() {
        return None;
    }
    let needle = query.to_lowercase();
    Some(
        catalog
            .iter()
            .filter(|g| g.matches_query(&needle))
            .cloned()
            .collect(),
    )
}
