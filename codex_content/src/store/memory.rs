//! In-memory content store.

use std::cell::RefCell;
use std::collections::HashMap;

use super::{ContentStore, ResourcePath, Result, RetrievalError};

/// A content store backed by a map, recording every fetch it serves.
///
/// Useful for embedding a small dataset directly and for observing which
/// resources a caller actually requested.
#[derive(Debug, Default)]
pub struct MemoryContentStore {
    resources: HashMap<ResourcePath, String>,
    fetch_log: RefCell<Vec<ResourcePath>>,
}

impl MemoryContentStore {
    /// Create an empty store. Every fetch fails with `NotFound`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource.
    pub fn with_resource(mut self, path: ResourcePath, payload: impl Into<String>) -> Self {
        self.insert(path, payload);
        self
    }

    /// Add or replace a resource.
    pub fn insert(&mut self, path: ResourcePath, payload: impl Into<String>) {
        self.resources.insert(path, payload.into());
    }

    /// Every path requested so far, in order, including failed requests.
    pub fn fetch_log(&self) -> Vec<ResourcePath> {
        self.fetch_log.borrow().clone()
    }

    /// How many times a path was requested.
    pub fn fetch_count(&self, path: &ResourcePath) -> usize {
        self.fetch_log.borrow().iter().filter(|p| *p == path).count()
    }
}

impl ContentStore for MemoryContentStore {
    fn fetch(&self, path: &ResourcePath) -> Result<String> {
        self.fetch_log.borrow_mut().push(path.clone());
        self.resources
            .get(path)
            .cloned()
            .ok_or_else(|| RetrievalError::NotFound(path.clone()))
    }
}
