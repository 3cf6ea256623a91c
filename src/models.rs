use serde::{Deserialize, Serialize};

/// One game entry from the static feed
///
/// Every field is a string in the feed; absent fields deserialize to the
/// empty string. `tags` stays comma-separated as stored, `tag_list` gives
/// the parsed form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructions: String,
    pub url: String,
    pub category: String,
    pub tags: String,
    pub thumb: String,
    pub width: String,
    pub height: String,
}

impl GameRecord {
    /// Parsed tags: split on commas, trimmed, empty segments dropped
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Returns true if the parsed tag set contains `name` (case-insensitive)
    pub fn has_tag(&self, name: &str) -> bool {
        self.tag_list()
            .iter()
            .any(|t| t.eq_ignore_ascii_case(name))
    }

    /// Returns true if the record's category equals `name` (case-insensitive).
    /// Records without a category never match.
    pub fn in_category(&self, name: &str) -> bool {
        !self.category.is_empty() && self.category.eq_ignore_ascii_case(name)
    }

    /// Returns true if `needle` (already lowercased) is a substring of the
    /// title, description, category or raw tags field
    pub fn matches_query(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self.tags.to_lowercase().contains(needle)
    }
}
