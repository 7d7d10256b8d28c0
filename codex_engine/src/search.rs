//! Keyword search across every category listing.

use codex_content::{Category, ContentStore, ItemSummary};
use serde::Serialize;

use crate::cache::CategoryCache;

/// An item whose summary mentions the search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub category: Category,
    pub item: ItemSummary,
}

/// Find summaries whose id, name or description contain `term`
/// (case-insensitive).
///
/// Listings are obtained through the cache, so unavailable categories simply
/// contribute nothing. Hits are ordered by category, then by listing order.
pub fn search<S: ContentStore + ?Sized>(
    cache: &CategoryCache,
    store: &S,
    term: &str,
) -> Vec<SearchHit> {
    let term = term.trim();
    if term.is_empty() {
        return Vec::new();
    }

    let hits: Vec<SearchHit> = Category::ALL
        .into_iter()
        .flat_map(|category| {
            cache
                .category_items(store, category)
                .iter()
                .filter(|item| item.mentions(term))
                .map(|item| SearchHit {
                    category,
                    item: item.clone(),
                })
                .collect::<Vec<_>>()
        })
        .collect();

    tracing::debug!(term, hits = hits.len(), "search complete");
    hits
}
