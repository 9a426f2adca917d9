//! Person model for PostgreSQL database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;

use crate::schema::persons;

/// Person model representing a single row of the `persons` table.
///
/// A read-time snapshot: identity is [`Person::id`], every other field is
/// whatever the owning system last wrote.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = persons)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Person {
    /// Unique, stable person identifier.
    pub id: i32,
    /// Two-letter person category code.
    pub person_type: String,
    /// Courtesy title (e.g. "Mr.", "Ms.").
    pub title: Option<String>,
    /// First name, the field searched by the listing filter.
    pub first_name: String,
    /// Middle name or initial.
    pub middle_name: Option<String>,
    /// Last name.
    pub last_name: String,
    /// Name suffix (e.g. "Jr.", "PhD").
    pub suffix: Option<String>,
    /// Timestamp of the last modification made by the owning system.
    pub modified_at: Timestamp,
}

impl Person {
    /// Returns the display name: first, middle and last name joined by spaces.
    pub fn full_name(&self) -> String {
        [
            Some(self.first_name.as_str()),
            self.middle_name.as_deref(),
            Some(self.last_name.as_str()),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(middle_name: Option<&str>) -> Person {
        Person {
            id: 1,
            person_type: "EM".to_owned(),
            title: None,
            first_name: "Ken".to_owned(),
            middle_name: middle_name.map(str::to_owned),
            last_name: "Sánchez".to_owned(),
            suffix: None,
            modified_at: jiff::Timestamp::UNIX_EPOCH.into(),
        }
    }

    #[test]
    fn full_name_includes_middle_name() {
        assert_eq!(person(Some("J")).full_name(), "Ken J Sánchez");
    }

    #[test]
    fn full_name_skips_missing_or_blank_middle_name() {
        assert_eq!(person(None).full_name(), "Ken Sánchez");
        assert_eq!(person(Some(" ")).full_name(), "Ken Sánchez");
    }
}
