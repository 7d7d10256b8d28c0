//! Structured results handed to the presentation layer.

use codex_content::{Category, ItemDetail, ItemSummary};
use serde::Serialize;

use crate::formatter;

/// A category listing, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListing {
    pub category: Category,
    pub title: String,
    pub items: Vec<ItemSummary>,
}

impl CategoryListing {
    pub fn new(category: Category, items: Vec<ItemSummary>) -> Self {
        Self {
            category,
            title: category.title().to_string(),
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A resolved item, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailPage {
    pub category: Category,
    pub id: String,
    pub title: String,
    /// Paragraphs with their lines joined by [`formatter::SOFT_BREAK`].
    pub paragraphs: Vec<String>,
}

impl DetailPage {
    pub fn new(category: Category, detail: &ItemDetail) -> Self {
        Self {
            category,
            id: detail.id.clone(),
            title: detail.title(category),
            paragraphs: formatter::format(&detail.content)
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

/// Outcome of opening an item.
///
/// Both variants remember the category, so the reader can always go back
/// to the listing they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemView {
    Detail(DetailPage),
    Unavailable {
        category: Category,
        id: String,
        reason: String,
    },
}

impl ItemView {
    /// The listing to return to.
    pub fn back_to(&self) -> Category {
        match self {
            ItemView::Detail(page) => page.category,
            ItemView::Unavailable { category, .. } => *category,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, ItemView::Detail(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_title() {
        let listing = CategoryListing::new(Category::Deities, Vec::new());
        assert_eq!(listing.title, "Deities");
        assert!(listing.is_empty());
    }

    #[test]
    fn test_detail_page_formats_content() {
        let detail = ItemDetail::new("aldric", "Aldric of the March.\n  Sworn to the crown.\n\nHe rides north.");
        let page = DetailPage::new(Category::Characters, &detail);

        assert_eq!(page.title, "Character : aldric");
        assert_eq!(
            page.paragraphs,
            vec!["Aldric of the March.\nSworn to the crown.", "He rides north."]
        );
    }

    #[test]
    fn test_back_to_listing() {
        let view = ItemView::Unavailable {
            category: Category::Locations,
            id: "harbor".to_string(),
            reason: "resource not found: locations/harbor".to_string(),
        };
        assert_eq!(view.back_to(), Category::Locations);
        assert!(!view.is_available());
    }

    #[test]
    fn test_serialized_shape() {
        let page = DetailPage::new(
            Category::Skills,
            &ItemDetail::new("parry", "Parry: blocks").with_name("Parry"),
        );
        let json = serde_json::to_value(ItemView::Detail(page)).unwrap();

        assert_eq!(json["status"], "detail");
        assert_eq!(json["category"], "skills");
        assert_eq!(json["title"], "Parry");
        assert_eq!(json["paragraphs"][0], "Parry: blocks");
    }
}
