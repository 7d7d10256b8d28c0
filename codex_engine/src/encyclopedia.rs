//! The engine facade the presentation layer talks to.

use codex_content::{Category, ContentStore, ItemDetail};

use crate::cache::CategoryCache;
use crate::config::{CodexConfig, ConfigError};
use crate::events::{Request, Response};
use crate::pages::{CategoryListing, DetailPage, ItemView};
use crate::query::{QueryError, QueryRouter, Route};
use crate::resolver::ItemResolver;
use crate::search::{self, SearchHit};

/// Owns the content store, the category cache and the query router.
///
/// Call [`Encyclopedia::initialize`] once before serving requests; it runs
/// the bulk metadata load, the only write the cache ever sees.
pub struct Encyclopedia<S> {
    store: S,
    cache: CategoryCache,
    router: QueryRouter,
}

impl<S: ContentStore> Encyclopedia<S> {
    /// Create an engine with the default router.
    pub fn new(store: S) -> Self {
        Self {
            store,
            cache: CategoryCache::new(),
            router: QueryRouter::default(),
        }
    }

    /// Create an engine whose router follows `config`.
    pub fn from_config(store: S, config: &CodexConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            store,
            cache: CategoryCache::new(),
            router: config.router()?,
        })
    }

    /// Load the metadata bundle. Failures degrade to empty listings.
    pub fn initialize(&mut self) {
        self.cache.load(&self.store);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn cache(&self) -> &CategoryCache {
        &self.cache
    }

    /// Validate and classify raw input.
    pub fn route(&self, input: &str) -> Result<Route, QueryError> {
        self.router.route(input)
    }

    /// Listing of one category; empty when nothing could be retrieved.
    pub fn list_category(&self, category: Category) -> CategoryListing {
        let items = self.cache.category_items(&self.store, category).into_owned();
        CategoryListing::new(category, items)
    }

    /// Keyword search over all listings.
    pub fn search(&self, term: &str) -> Vec<SearchHit> {
        search::search(&self.cache, &self.store, term)
    }

    /// Resolve an item, propagating retrieval failures.
    pub fn resolve_item(&self, category: Category, id: &str) -> codex_content::Result<ItemDetail> {
        ItemResolver::new(&self.store).resolve(category, id)
    }

    /// Resolve and format an item. A retrieval failure becomes
    /// [`ItemView::Unavailable`] rather than an error.
    pub fn show_item(&self, category: Category, id: &str) -> ItemView {
        match self.resolve_item(category, id) {
            Ok(detail) => ItemView::Detail(DetailPage::new(category, &detail)),
            Err(e) => {
                tracing::warn!(%category, id, resource = ?e.path(), error = %e, "item details unavailable");
                ItemView::Unavailable {
                    category,
                    id: id.to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Route raw input to the search path or the question path.
    pub fn submit(&self, input: &str) -> Response {
        match self.route(input) {
            Ok(Route::Question(text)) => Response::Question { text },
            Ok(Route::Search(term)) => {
                let hits = self.search(&term);
                Response::SearchResults { term, hits }
            }
            Err(e) => Response::Rejected(e),
        }
    }

    /// Dispatch a presentation-layer request.
    pub fn handle(&self, request: Request) -> Response {
        match request {
            Request::Submit(input) => self.submit(&input),
            Request::ShowCategory(category) => Response::Listing(self.list_category(category)),
            Request::ShowItem { category, id } => Response::Item(self.show_item(category, &id)),
        }
    }
}
