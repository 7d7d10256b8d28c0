//! Category cache - the in-memory home of the metadata bundle.
//!
//! The bundle is written once, by [`CategoryCache::load`], which takes
//! `&mut self`; every lookup afterwards goes through `&self`. Category
//! listings fetched on a miss are handed back to the caller but never stored,
//! so the bundle only ever reflects the bulk load.

use std::borrow::Cow;

use codex_content::{Category, ContentStore, ItemSummary, MetadataBundle};

/// Memoized listings for the encyclopedia's categories.
#[derive(Debug, Clone, Default)]
pub struct CategoryCache {
    bundle: Option<MetadataBundle>,
}

impl CategoryCache {
    /// Create an empty cache. Nothing is loaded until [`CategoryCache::load`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache around an already-loaded bundle.
    pub fn with_bundle(bundle: MetadataBundle) -> Self {
        Self {
            bundle: Some(bundle),
        }
    }

    /// Run the bulk load of the metadata bundle.
    ///
    /// A failed load leaves a bundle with every category present and empty.
    /// Calling this again after a load (successful or not) does nothing.
    pub fn load<S: ContentStore + ?Sized>(&mut self, store: &S) -> &MetadataBundle {
        if self.bundle.is_none() {
            let bundle = match store.fetch_metadata() {
                Ok(bundle) => {
                    tracing::info!(items = bundle.item_count(), "metadata bundle loaded");
                    bundle
                }
                Err(e) => {
                    tracing::warn!(error = %e, "metadata load failed; starting with empty listings");
                    MetadataBundle::all_empty()
                }
            };
            self.bundle = Some(bundle);
        }
        self.bundle.get_or_insert_with(MetadataBundle::all_empty)
    }

    /// Whether the bulk load has run.
    pub fn is_loaded(&self) -> bool {
        self.bundle.is_some()
    }

    /// The loaded bundle, if any.
    pub fn bundle(&self) -> Option<&MetadataBundle> {
        self.bundle.as_ref()
    }

    /// Items of a category.
    ///
    /// Served from the bundle when it has a non-empty listing for the
    /// category; otherwise fetched from the category's own resource. A failed
    /// fetch yields an empty listing.
    pub fn category_items<'a, S: ContentStore + ?Sized>(
        &'a self,
        store: &S,
        category: Category,
    ) -> Cow<'a, [ItemSummary]> {
        if let Some(items) = self
            .bundle
            .as_ref()
            .filter(|b| b.covers(category))
            .and_then(|b| b.listing(category))
        {
            tracing::debug!(%category, count = items.len(), "category served from cache");
            return Cow::Borrowed(items);
        }

        match store.fetch_listing(category) {
            Ok(items) => {
                tracing::debug!(%category, count = items.len(), "category fetched");
                Cow::Owned(items)
            }
            Err(e) => {
                tracing::warn!(%category, error = %e, "category listing unavailable");
                Cow::Owned(Vec::new())
            }
        }
    }
}
