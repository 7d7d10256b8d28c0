//! Item resolution - from a category and id to the item's content.
//!
//! Characters, locations and deities each have one text resource per item.
//! Skills share a single blob, so resolving a skill fetches the blob and
//! extracts the matching entry from it.

pub mod skills;

pub use skills::SkillEntry;

use codex_content::{Category, ContentStore, ItemDetail, ResourcePath, Result};

/// Resolves items against a content store.
pub struct ItemResolver<'s, S: ContentStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: ContentStore + ?Sized> ItemResolver<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Resolve one item.
    ///
    /// # Errors
    ///
    /// Returns the store's `RetrievalError` when the item text (or, for
    /// skills, the skills blob) cannot be fetched. A skill missing from an
    /// available blob is not an error: the detail comes back with no name and
    /// empty content.
    pub fn resolve(&self, category: Category, id: &str) -> Result<ItemDetail> {
        if !category.has_item_resources() {
            let blob = self.store.fetch(&ResourcePath::Skills)?;
            let entry = skills::extract(&blob, id);
            tracing::debug!(id, found = entry.is_found(), "skill resolved");
            return Ok(entry.into());
        }

        let detail = ItemDetail::new(id, self.store.fetch(&ResourcePath::item(category, id))?);
        tracing::debug!(%category, id, empty = detail.is_empty(), "item resolved");
        Ok(detail)
    }
}
