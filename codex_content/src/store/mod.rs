//! Content store access.
//!
//! The encyclopedia never touches storage directly. Everything goes through a
//! [`ContentStore`], which maps a logical [`ResourcePath`] to a raw payload:
//!
//! | Path               | Payload                                   |
//! |--------------------|-------------------------------------------|
//! | `metadata`         | JSON object: category name -> summaries   |
//! | `<category>`       | JSON array of summaries                   |
//! | `<category>/<id>`  | raw text of one item                      |
//! | `skills`           | raw text blob holding every skill entry   |

mod fs;
mod memory;

pub use fs::*;
pub use memory::*;

use thiserror::Error;

use crate::{Category, ItemSummary, MetadataBundle};

/// Logical address of a resource in the content store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourcePath {
    /// The bulk metadata bundle.
    Metadata,
    /// The standalone listing of one category.
    Listing(Category),
    /// The text of a single item.
    Item { category: Category, id: String },
    /// The shared skills text blob.
    Skills,
}

impl ResourcePath {
    /// Address of a single item's text.
    pub fn item(category: Category, id: impl Into<String>) -> Self {
        ResourcePath::Item {
            category,
            id: id.into(),
        }
    }
}

impl std::fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourcePath::Metadata => f.write_str("metadata"),
            ResourcePath::Listing(category) => write!(f, "{}", category),
            ResourcePath::Item { category, id } => write!(f, "{}/{}", category, id),
            ResourcePath::Skills => f.write_str("skills"),
        }
    }
}

/// Failure to obtain a resource from the content store.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("resource not found: {0}")]
    NotFound(ResourcePath),

    #[error("resource unavailable: {path}")]
    Unavailable {
        path: ResourcePath,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid resource address: {0}")]
    InvalidAddress(String),

    #[error("malformed payload at {path}")]
    Malformed {
        path: ResourcePath,
        #[source]
        source: serde_json::Error,
    },
}

impl RetrievalError {
    /// The address that failed, when there is a well-formed one.
    pub fn path(&self) -> Option<&ResourcePath> {
        match self {
            RetrievalError::NotFound(path)
            | RetrievalError::Unavailable { path, .. }
            | RetrievalError::Malformed { path, .. } => Some(path),
            RetrievalError::InvalidAddress(_) => None,
        }
    }
}

/// Result type alias for content store operations.
pub type Result<T> = std::result::Result<T, RetrievalError>;

/// Source of raw encyclopedia payloads.
///
/// Implementors only provide [`ContentStore::fetch`]; the typed helpers
/// decode the structured resources on top of it.
pub trait ContentStore {
    /// Retrieve the raw payload stored at `path`.
    fn fetch(&self, path: &ResourcePath) -> Result<String>;

    /// Retrieve and decode the bulk metadata bundle.
    fn fetch_metadata(&self) -> Result<MetadataBundle> {
        let path = ResourcePath::Metadata;
        let payload = self.fetch(&path)?;
        MetadataBundle::from_json(&payload).map_err(|source| RetrievalError::Malformed { path, source })
    }

    /// Retrieve and decode the standalone listing of one category.
    fn fetch_listing(&self, category: Category) -> Result<Vec<ItemSummary>> {
        let path = ResourcePath::Listing(category);
        let payload = self.fetch(&path)?;
        serde_json::from_str(&payload).map_err(|source| RetrievalError::Malformed { path, source })
    }
}

impl<S: ContentStore + ?Sized> ContentStore for &S {
    fn fetch(&self, path: &ResourcePath) -> Result<String> {
        (**self).fetch(path)
    }
}

impl<S: ContentStore + ?Sized> ContentStore for Box<S> {
    fn fetch(&self, path: &ResourcePath) -> Result<String> {
        (**self).fetch(path)
    }
}
