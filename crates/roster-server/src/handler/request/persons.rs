//! Person listing request types.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string of `GET /persons`.
///
/// Every parameter is optional: `search` defaults to the empty string, which
/// matches everyone, `page` to the first page and `pageSize` to the server's
/// configured default.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonSearchQuery {
    /// Substring matched against the first name.
    ///
    /// Never longer than the `first_name` column.
    #[serde(default)]
    #[validate(length(max = 50))]
    pub search: String,

    /// Requested page number (1-based).
    #[serde(default = "PersonSearchQuery::first_page")]
    #[validate(range(min = 1))]
    pub page: i64,

    /// Number of persons per page.
    #[serde(default)]
    pub page_size: Option<i64>,
}

impl PersonSearchQuery {
    const fn first_page() -> i64 {
        1
    }

    /// Returns the search term with surrounding whitespace removed.
    pub fn search_term(&self) -> &str {
        self.search.trim()
    }
}

impl Default for PersonSearchQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: Self::first_page(),
            page_size: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let query = PersonSearchQuery::default();
        assert_eq!(query.page, 1);
        assert!(query.page_size.is_none());
        assert!(query.validate().is_ok());
    }

    #[test]
    fn search_longer_than_column_is_rejected() {
        let query = PersonSearchQuery {
            search: "a".repeat(51),
            ..Default::default()
        };
        assert!(query.validate().is_err());

        let query = PersonSearchQuery {
            search: "a".repeat(50),
            ..Default::default()
        };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn page_below_one_is_rejected() {
        let query = PersonSearchQuery {
            page: 0,
            ..Default::default()
        };
        let errors = query.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("page"));
    }

    #[test]
    fn search_term_is_trimmed() {
        let query = PersonSearchQuery {
            search: "  Ken ".to_owned(),
            ..Default::default()
        };
        assert_eq!(query.search_term(), "Ken");
    }
}
