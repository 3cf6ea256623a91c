//! Listing and pagination policy constants
//!
//! Passed into the query layer by consumers; the query functions themselves
//! never assume a page size.

/// Games per listing page
pub const PAGE_SIZE: usize = 48;

/// Maximum page buttons shown by the pagination widget
pub const MAX_VISIBLE_PAGES: usize = 7;

/// Results shown in the header search dropdown
pub const SEARCH_RESULTS_LIMIT: usize = 8;

/// Related games shown under the player (4 rows of 8)
pub const MAX_RELATED_GAMES: usize = 16;

/// Default entry count for the popular tag/category widgets
pub const POPULAR_LIMIT: usize = 5;
