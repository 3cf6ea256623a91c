//! Popularity aggregation over tags and categories
//!
//! Counts are grouped in first-encountered order and sorted with a stable
//! sort, so equal counts keep feed order.

use crate::catalog::Catalog;
use serde::Serialize;
use std::collections::HashMap;

/// A tag with its usage count and the link target for its listing page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagCount {
    pub name: String,
    pub href: String,
    pub count: usize,
}

/// A category with its usage count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Link target for a tag listing page ("Tower Defense" -> "/tags/tower-defense")
pub fn tag_href(name: &str) -> String {
    let slug = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("/tags/{}", urlencoding::encode(&slug))
}

/// Count occurrences keyed by name, preserving first-encountered order
fn count_in_order<I: IntoIterator<Item = String>>(names: I) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for name in names {
        match index.get(&name) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(name.clone(), counts.len());
                counts.push((name, 1));
            }
        }
    }
    counts
}

/// Most-used tags across the catalog, descending by count, ties in
/// first-encountered order
pub fn popular_tags(catalog: &Catalog, limit: usize) -> Vec<TagCount> {
    let mut counts = count_in_order(
        catalog
            .iter()
            .flat_map(|g| g.tag_list())
            .map(str::to_string),
    );
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(name, count)| TagCount {
            href: tag_href(&name),
            name,
            count,
        })
        .collect()
}

/// Most-used categories across the catalog, same ordering policy. Records
/// without a category count under "Uncategorized".
pub fn popular_categories(catalog: &Catalog, limit: usize) -> Vec<CategoryCount> {
    let mut counts = count_in_order(catalog.iter().map(|g| {
        if g.category.is_empty() {
            "Uncategorized".to_string()
        } else {
            g.category.clone()
        }
    }));
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(name, count)| CategoryCount { name, count })
        .collect()
}
