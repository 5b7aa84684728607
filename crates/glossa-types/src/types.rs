use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// User typed a word or phrase to look up
    SubmitQuery(String),
    /// The spawned fetch task came back with raw response text
    FetchResolved(String),
    /// The spawned fetch task came back with nothing usable
    LookupFailed,
}

/// Structured explanation extracted from the raw service response.
///
/// Every field defaults to empty; the parser never fails, it just leaves
/// fields blank when their marker line is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedExplanation {
    pub headword: String,
    pub definition: String,
    /// Bracketed (`[ih-FEM-er-uhl]`) when present, empty string otherwise
    pub pronunciation: String,
    /// Numbered example sentences, in response order
    pub examples: Vec<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub translation: String,
    pub idioms: String,
}
