//! Person response types.

use jiff::Timestamp;
use roster_postgres::PagedResult;
use roster_postgres::model;
use serde::{Deserialize, Serialize};

/// A person as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Unique person identifier.
    pub id: i32,
    /// Two-letter person category code.
    pub person_type: String,
    /// Courtesy title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// First name.
    pub first_name: String,
    /// Middle name or initial.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Last name.
    pub last_name: String,
    /// Name suffix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// First, middle and last name joined by spaces.
    pub full_name: String,
    /// Last modification time recorded by the owning system.
    pub modified_at: Timestamp,
}

impl From<model::Person> for Person {
    fn from(person: model::Person) -> Self {
        Self {
            full_name: person.full_name(),
            id: person.id,
            person_type: person.person_type,
            title: person.title,
            first_name: person.first_name,
            middle_name: person.middle_name,
            last_name: person.last_name,
            suffix: person.suffix,
            modified_at: person.modified_at.into(),
        }
    }
}

/// One page of persons together with its navigation window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonsPage {
    /// Persons of the current page, ordered by id.
    pub items: Vec<Person>,
    /// Number of persons matching the search across all pages.
    pub total_items: i64,
    /// Number of persons per page.
    pub page_size: i64,
    /// Current page after clamping.
    pub current_page: i64,
    /// Number of pages.
    pub total_pages: i64,
    /// First page number of the navigation window.
    pub start_page: i64,
    /// Last page number of the navigation window (inclusive).
    pub end_page: i64,
    /// Page numbers from `startPage` to `endPage`.
    pub page_numbers: Vec<i64>,
    /// Whether a previous page exists.
    pub has_previous_page: bool,
    /// Whether a next page exists.
    pub has_next_page: bool,
}

impl From<PagedResult<model::Person>> for PersonsPage {
    fn from(paged: PagedResult<model::Person>) -> Self {
        let has_previous_page = paged.has_previous_page();
        let has_next_page = paged.has_next_page();
        let paged = paged.map(Person::from);

        Self {
            items: paged.items,
            total_items: paged.total_items,
            page_size: paged.page_size,
            current_page: paged.current_page,
            total_pages: paged.total_pages,
            start_page: paged.start_page,
            end_page: paged.end_page,
            page_numbers: paged.page_numbers,
            has_previous_page,
            has_next_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use roster_postgres::PageRequest;

    use super::*;

    fn person(id: i32) -> model::Person {
        model::Person {
            id,
            person_type: "EM".to_owned(),
            title: None,
            first_name: "Ken".to_owned(),
            middle_name: Some("J".to_owned()),
            last_name: "Sánchez".to_owned(),
            suffix: None,
            modified_at: Timestamp::UNIX_EPOCH.into(),
        }
    }

    #[test]
    fn persons_page_from_paged_result() {
        let paged = PagedResult::new(vec![person(11), person(12)], 47, &PageRequest::new(2, 10, 5))
            .unwrap();
        let page = PersonsPage::from(paged);

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id, 11);
        assert_eq!(page.items[0].full_name, "Ken J Sánchez");
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.page_numbers, vec![1, 2, 3, 4, 5]);
        assert!(page.has_previous_page);
        assert!(page.has_next_page);
    }

    #[test]
    fn persons_page_serializes_camel_case() {
        let paged = PagedResult::new(vec![person(1)], 1, &PageRequest::new(1, 10, 5)).unwrap();
        let json = serde_json::to_value(PersonsPage::from(paged)).unwrap();

        assert_eq!(json["totalItems"], 1);
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["pageNumbers"], serde_json::json!([1]));
        assert_eq!(json["items"][0]["firstName"], "Ken");
        assert_eq!(json["items"][0]["personType"], "EM");
        assert!(json["items"][0].get("title").is_none());
        assert_eq!(json["hasNextPage"], false);
    }
}
