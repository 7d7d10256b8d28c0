//! Item records: listing summaries and resolved detail entries.

mod bundle;

pub use bundle::*;

use serde::{Deserialize, Serialize};

use crate::Category;

/// A single entry in a category listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    /// Unique within its category; used to address the detail resource.
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ItemSummary {
    /// Create a summary without a description.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The description, treating a blank one as absent.
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
    }

    /// Case-insensitive containment check over id, name and description.
    pub fn mentions(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.id.to_lowercase().contains(&needle)
            || self.name.to_lowercase().contains(&needle)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }
}

/// The resolved content of one item.
///
/// `name` is only known when the content itself carries it (skills); for
/// per-item text resources it stays `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Raw multi-line text.
    pub content: String,
}

impl ItemDetail {
    /// Wrap raw text for the given item id.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            content: content.into(),
        }
    }

    /// Set the display name. A blank name is stored as absent.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = if name.trim().is_empty() { None } else { Some(name) };
        self
    }

    /// Heading for a detail page: the name, or `"<Singular> : <id>"`.
    pub fn title(&self, category: Category) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{} : {}", category.singular_title(), self.id),
        }
    }

    /// Whether there is anything to show.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}
