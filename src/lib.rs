//! Game Catalog - static feed query layer
//!
//! Loads game records from a static JSON feed into an in-memory catalog with
//! a short TTL cache and answers listing, category, tag, search and
//! aggregation queries for the site's page handlers.

pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod query;
pub mod search;
pub mod web;

// Re-export commonly used items
pub use aggregate::{popular_categories, popular_tags, CategoryCount, TagCount};
pub use catalog::{Catalog, CatalogService, DEFAULT_TTL};
pub use error::{CatalogError, Result};
pub use models::GameRecord;
pub use pagination::{offset_for_page, page_window, total_pages, PageItem};
pub use query::{
    all_categories, all_games, all_tags, game_by_id, games_by_category, games_by_tag,
    related_games, Page,
};
pub use search::{search_games, suggest_games};
