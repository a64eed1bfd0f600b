//! Substring search helpers
//!
//! SQLite's `LIKE` folds case for ASCII only, so name and question searches
//! load their candidate rows and match here with full Unicode lowercasing.

/// A case-folded search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    folded: String,
}

impl SearchTerm {
    pub fn new(term: &str) -> Self {
        Self {
            folded: term.to_lowercase(),
        }
    }

    /// True when `text` contains the term, ignoring case
    ///
    /// The empty term matches everything. Characters such as `%` and `_`
    /// have no special meaning.
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.folded)
    }
}
