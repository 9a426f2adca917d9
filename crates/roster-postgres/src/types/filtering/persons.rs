//! Filtering options for person queries.

use serde::{Deserialize, Serialize};

/// Character used to escape `LIKE` metacharacters in search patterns.
pub(crate) const LIKE_ESCAPE: char = '\\';

/// Filter options for person listings.
///
/// The search term is matched as a literal substring of the first name.
/// It always travels to the database as a bound parameter.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonFilter {
    /// Substring searched for in the first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
}

impl PersonFilter {
    /// Creates a new empty filter.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by a first-name substring.
    ///
    /// Surrounding whitespace is trimmed; a blank term leaves the filter empty.
    pub fn with_search_term(mut self, search_term: impl AsRef<str>) -> Self {
        let search_term = search_term.as_ref().trim();
        self.search_term = (!search_term.is_empty()).then(|| search_term.to_owned());
        self
    }

    /// Returns the trimmed search term, if any.
    #[inline]
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref()
    }

    /// Returns the `LIKE` pattern for the search term, if any.
    ///
    /// `%`, `_` and the escape character itself are escaped so that the
    /// user's input only ever matches literally.
    pub fn like_pattern(&self) -> Option<String> {
        let search_term = self.search_term()?;
        let mut pattern = String::with_capacity(search_term.len() + 2);

        pattern.push('%');
        for c in search_term.chars() {
            if matches!(c, '%' | '_' | LIKE_ESCAPE) {
                pattern.push(LIKE_ESCAPE);
            }
            pattern.push(c);
        }
        pattern.push('%');

        Some(pattern)
    }

    /// Returns whether any filter is active.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.search_term.is_none()
    }
}
