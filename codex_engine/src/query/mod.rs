//! Query routing - turning raw reader input into a search or a question.

mod classifier;

pub use classifier::*;

use serde::Serialize;
use thiserror::Error;

/// Default minimum number of characters a query must have after trimming.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Where an accepted input goes next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Route {
    /// Hand the text to the answer collaborator.
    Question(String),
    /// Run a keyword search with the text as the term.
    Search(String),
}

impl Route {
    pub fn kind(&self) -> QueryKind {
        match self {
            Route::Question(_) => QueryKind::Question,
            Route::Search(_) => QueryKind::Search,
        }
    }

    /// The trimmed input.
    pub fn text(&self) -> &str {
        match self {
            Route::Question(text) | Route::Search(text) => text,
        }
    }
}

/// Why an input was not routed anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum QueryError {
    #[error("query is empty")]
    Empty,

    #[error("query must be at least {min} characters long (got {len})")]
    TooShort { min: usize, len: usize },
}

/// Validates input length, then classifies.
#[derive(Debug, Clone)]
pub struct QueryRouter {
    classifier: QueryClassifier,
    min_len: usize,
}

impl QueryRouter {
    pub fn new(classifier: QueryClassifier, min_len: usize) -> Self {
        Self { classifier, min_len }
    }

    pub fn classifier(&self) -> &QueryClassifier {
        &self.classifier
    }

    /// Route a raw input.
    ///
    /// The input is trimmed before both the length check and classification.
    pub fn route(&self, input: &str) -> Result<Route, QueryError> {
        let text = input.trim();
        let len = text.chars().count();
        if len == 0 {
            return Err(QueryError::Empty);
        }
        if len < self.min_len {
            return Err(QueryError::TooShort {
                min: self.min_len,
                len,
            });
        }

        let route = match self.classifier.classify(text) {
            QueryKind::Question => Route::Question(text.to_string()),
            QueryKind::Search => Route::Search(text.to_string()),
        };
        tracing::debug!(kind = ?route.kind(), text, "routed query");
        Ok(route)
    }
}

impl Default for QueryRouter {
    fn default() -> Self {
        Self::new(QueryClassifier::new(), DEFAULT_MIN_QUERY_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_question_and_search() {
        let router = QueryRouter::default();

        assert_eq!(
            router.route("  Who is Aldric  ").unwrap(),
            Route::Question("Who is Aldric".to_string())
        );
        assert_eq!(
            router.route("harbor").unwrap(),
            Route::Search("harbor".to_string())
        );
    }

    #[test]
    fn test_trailing_mark_survives_trim() {
        let router = QueryRouter::default();
        let route = router.route("Aldric? \n").unwrap();
        assert_eq!(route.kind(), QueryKind::Question);
        assert_eq!(route.text(), "Aldric?");
    }

    #[test]
    fn test_rejects_short_input() {
        let router = QueryRouter::default();

        assert_eq!(router.route("   "), Err(QueryError::Empty));
        assert_eq!(
            router.route(" a "),
            Err(QueryError::TooShort { min: 2, len: 1 })
        );
        assert!(router.route("ab").is_ok());
    }

    #[test]
    fn test_length_counts_characters() {
        let router = QueryRouter::new(QueryClassifier::new(), 3);
        assert!(router.route("éé").is_err());
        assert!(router.route("ééé").is_ok());
    }
}
