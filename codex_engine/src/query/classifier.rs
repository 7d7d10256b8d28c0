//! Pattern-based question detection.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Lead words that mark an input as a question when it starts with them.
pub const DEFAULT_LEAD_WORDS: &[&str] = &[
    "who", "what", "how", "why", "where", "when", "which", "tell", "speak", "say",
];

/// What kind of request a raw input is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    /// Natural-language question, answered by the chat collaborator.
    Question,
    /// Keyword search over the listings.
    Search,
}

/// One way an input can qualify as a question.
#[derive(Debug, Clone)]
pub enum QuestionPattern {
    /// Input starts with this word, ignoring case.
    LeadWord(String),
    /// Input ends with `?`.
    TrailingMark,
    /// Extra pattern supplied through configuration.
    Regex(Regex),
}

impl QuestionPattern {
    pub fn matches(&self, input: &str) -> bool {
        match self {
            Self::LeadWord(word) => starts_with_ignore_case(input, word),
            Self::TrailingMark => input.ends_with('?'),
            Self::Regex(re) => re.is_match(input),
        }
    }
}

fn starts_with_ignore_case(input: &str, prefix: &str) -> bool {
    let mut input = input.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|c| input.next() == Some(c))
}

/// Decides whether an input is a question or a search term.
///
/// Holds an ordered set of patterns: one case-insensitive prefix per lead
/// word, then the trailing question mark, then any configured extras. An
/// input is a question when any pattern matches. Matching is by prefix only,
/// so "whatever" counts as starting with "what".
#[derive(Debug, Clone)]
pub struct QueryClassifier {
    patterns: Vec<QuestionPattern>,
}

impl QueryClassifier {
    /// Create a classifier using [`DEFAULT_LEAD_WORDS`].
    pub fn new() -> Self {
        Self::with_lead_words(DEFAULT_LEAD_WORDS)
    }

    /// Create a classifier with a custom set of lead words.
    ///
    /// Blank words are skipped; a blank prefix would match every input.
    pub fn with_lead_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut patterns: Vec<_> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .map(QuestionPattern::LeadWord)
            .collect();
        patterns.push(QuestionPattern::TrailingMark);
        Self { patterns }
    }

    /// Add a regular expression that also marks an input as a question.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.patterns.push(QuestionPattern::Regex(Regex::new(pattern)?));
        Ok(self)
    }

    /// Classify a raw input.
    pub fn classify(&self, input: &str) -> QueryKind {
        if self.is_question(input) {
            QueryKind::Question
        } else {
            QueryKind::Search
        }
    }

    /// Whether any pattern matches.
    pub fn is_question(&self, input: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(input))
    }

    /// Number of patterns consulted per input.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

impl Default for QueryClassifier {
    fn default() -> Self {
        Self::new()
    }
}
