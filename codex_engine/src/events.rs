//! Request and response messages exchanged with the presentation layer.

use codex_content::Category;
use serde::{Deserialize, Serialize};

use crate::pages::{CategoryListing, ItemView};
use crate::query::QueryError;
use crate::search::SearchHit;

/// Something the reader asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Request {
    /// Free text typed into the search box.
    Submit(String),
    /// A category picked from the menu.
    ShowCategory(Category),
    /// An item picked from a listing.
    ShowItem { category: Category, id: String },
}

/// What the engine answers with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Response {
    /// The input is a question for the answer collaborator.
    Question { text: String },
    /// The input was a search term.
    SearchResults { term: String, hits: Vec<SearchHit> },
    Listing(CategoryListing),
    Item(ItemView),
    /// The input was not accepted.
    Rejected(QueryError),
}
