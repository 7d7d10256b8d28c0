//! The bulk metadata bundle - summaries for every category in one resource.

use serde::Deserialize;
use std::collections::HashMap;

use super::ItemSummary;
use crate::Category;

/// Listings for all categories, as loaded from the `metadata` resource.
///
/// Keys in the source document that are not known categories are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<String, Vec<ItemSummary>>")]
pub struct MetadataBundle {
    listings: HashMap<Category, Vec<ItemSummary>>,
}

impl MetadataBundle {
    /// Create a bundle with no categories at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// A bundle where every category is present but has no items.
    ///
    /// This is what a failed bulk load degrades to.
    pub fn all_empty() -> Self {
        Self {
            listings: Category::ALL.into_iter().map(|c| (c, Vec::new())).collect(),
        }
    }

    /// Parse the `metadata` document.
    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }

    /// Set the listing of a category, replacing any previous one.
    pub fn with_listing(mut self, category: Category, items: Vec<ItemSummary>) -> Self {
        self.listings.insert(category, items);
        self
    }

    /// The listing for a category, if the bundle has an entry for it.
    pub fn listing(&self, category: Category) -> Option<&[ItemSummary]> {
        self.listings.get(&category).map(Vec::as_slice)
    }

    /// Whether the bundle has a non-empty listing for the category.
    pub fn covers(&self, category: Category) -> bool {
        self.listing(category).is_some_and(|items| !items.is_empty())
    }

    /// Total number of summaries across all categories.
    pub fn item_count(&self) -> usize {
        self.listings.values().map(Vec::len).sum()
    }
}

impl From<HashMap<String, Vec<ItemSummary>>> for MetadataBundle {
    fn from(raw: HashMap<String, Vec<ItemSummary>>) -> Self {
        let mut listings = HashMap::new();
        for (key, items) in raw {
            match key.parse::<Category>() {
                Ok(category) => {
                    listings.insert(category, items);
                }
                Err(_) => tracing::debug!(key = %key, "ignoring unknown metadata section"),
            }
        }
        Self { listings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metadata_document() {
        let bundle = MetadataBundle::from_json(
            r#"{
                "characters": [{"id": "aldric", "name": "Aldric", "description": "Knight"}],
                "skills": [{"id": "fireball", "name": "Fireball"}],
                "artifacts": [{"id": "crown", "name": "Crown"}]
            }"#,
        )
        .unwrap();

        assert_eq!(bundle.listing(Category::Characters).unwrap().len(), 1);
        assert_eq!(bundle.listing(Category::Skills).unwrap()[0].id, "fireball");
        assert!(bundle.listing(Category::Locations).is_none());
        assert_eq!(bundle.item_count(), 2);
    }

    #[test]
    fn test_all_empty_has_every_category() {
        let bundle = MetadataBundle::all_empty();
        for category in Category::ALL {
            assert_eq!(bundle.listing(category), Some(&[][..]));
            assert!(!bundle.covers(category));
        }
    }

    #[test]
    fn test_covers_requires_items() {
        let bundle = MetadataBundle::new()
            .with_listing(Category::Deities, vec![ItemSummary::new("sol", "Sol")])
            .with_listing(Category::Locations, Vec::new());

        assert!(bundle.covers(Category::Deities));
        assert!(!bundle.covers(Category::Locations));
        assert!(!bundle.covers(Category::Skills));
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(MetadataBundle::from_json("[1, 2, 3]").is_err());
        assert!(MetadataBundle::from_json(r#"{"characters": [{"name": "no id"}]}"#).is_err());
    }
}
