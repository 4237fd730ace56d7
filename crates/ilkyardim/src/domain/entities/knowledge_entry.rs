//! KnowledgeEntry Entity
//!
//! One row of the local first-aid table: a keyword and the stored response
//! returned when a question contains it.

use serde::{Deserialize, Serialize};

/// Keyword → stored response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub keyword: String,
    pub response: String,
}

impl KnowledgeEntry {
    /// Create an entry, trimming both columns
    pub fn new(keyword: impl AsRef<str>, response: impl AsRef<str>) -> Self {
        Self {
            keyword: keyword.as_ref().trim().to_string(),
            response: response.as_ref().trim().to_string(),
        }
    }

    /// Whether the keyword occurs in a question already passed through
    /// [`fold_case`]. Empty keywords never match.
    pub fn matches(&self, folded_question: &str) -> bool {
        !self.keyword.is_empty() && folded_question.contains(&fold_case(&self.keyword))
    }
}

/// Lowercase for matching. All four Turkish i forms (I, İ, ı, i) fold to
/// `i`, so "YANIK" and "yanık" compare equal.
pub fn fold_case(text: &str) -> String {
    text.chars()
        .flat_map(|c| match c {
            'I' | 'İ' | 'ı' => 'i'.to_lowercase(),
            c => c.to_lowercase(),
        })
        .collect()
}

/// Stored response of the first entry (in table order) whose keyword is a
/// case-insensitive substring of `question`
pub fn find_response<'a>(entries: &'a [KnowledgeEntry], question: &str) -> Option<&'a str> {
    let folded = fold_case(question);
    entries
        .iter()
        .find(|entry| entry.matches(&folded))
        .map(|entry| entry.response.as_str())
}
