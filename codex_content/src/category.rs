//! The fixed set of content categories.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// One of the four groupings the encyclopedia is organized into.
///
/// The set is closed: the data layout (one listing per category, per-item
/// text files except for skills) is tied to these exact names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Characters,
    Locations,
    Deities,
    /// Stored as a single shared text blob rather than one record per item.
    Skills,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 4] = [
        Category::Characters,
        Category::Locations,
        Category::Deities,
        Category::Skills,
    ];

    /// The identifier used in resource addresses and metadata keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Characters => "characters",
            Category::Locations => "locations",
            Category::Deities => "deities",
            Category::Skills => "skills",
        }
    }

    /// Heading for a listing of this category.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Characters => "Characters",
            Category::Locations => "Locations",
            Category::Deities => "Deities",
            Category::Skills => "Skills",
        }
    }

    /// Label for a single item of this category.
    pub fn singular_title(&self) -> &'static str {
        match self {
            Category::Characters => "Character",
            Category::Locations => "Location",
            Category::Deities => "Deity",
            Category::Skills => "Skill",
        }
    }

    /// Whether each item has its own detail resource.
    pub fn has_item_resources(&self) -> bool {
        !matches!(self, Category::Skills)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!("characters".parse::<Category>(), Ok(Category::Characters));
        assert_eq!("Skills".parse::<Category>(), Ok(Category::Skills));
        assert_eq!(" deities ".parse::<Category>(), Ok(Category::Deities));
        assert!("weapons".parse::<Category>().is_err());
    }

    #[test]
    fn test_display_matches_address_name() {
        for category in Category::ALL {
            assert_eq!(category.to_string(), category.as_str());
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_only_skills_lacks_item_resources() {
        assert!(Category::Characters.has_item_resources());
        assert!(Category::Locations.has_item_resources());
        assert!(Category::Deities.has_item_resources());
        assert!(!Category::Skills.has_item_resources());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Category::Locations).unwrap();
        assert_eq!(json, "\"locations\"");

        let parsed: Category = serde_json::from_str("\"deities\"").unwrap();
        assert_eq!(parsed, Category::Deities);
    }
}
