//! The base field group shared by every member kind.

use clubhouse_core::{Field, Record, check_in_order};

use crate::fields::{ID, NAME, PHONE, SURNAME};
use crate::values::PersonValues;

/// Person fields: id, name, surname and phone, in that order.
///
/// This is both the plain "person" member and the base group that soldiers
/// and students compose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonFields {
    id: Field,
    name: Field,
    surname: Field,
    phone: Field,
}

impl PersonFields {
    /// Blank, never-committed fields.
    pub fn new() -> Self {
        Self {
            id: Field::new(&ID),
            name: Field::new(&NAME),
            surname: Field::new(&SURNAME),
            phone: Field::new(&PHONE),
        }
    }

    /// Fields whose committed values (and drafts) are `values`.
    pub fn restore(values: &PersonValues) -> Self {
        Self {
            id: Field::with_value(&ID, values.id.as_str()),
            name: Field::with_value(&NAME, values.name.as_str()),
            surname: Field::with_value(&SURNAME, values.surname.as_str()),
            phone: Field::with_value(&PHONE, values.phone.as_str()),
        }
    }

    pub fn id(&self) -> &Field {
        &self.id
    }

    /// Committed values.
    pub fn values(&self) -> PersonValues {
        PersonValues {
            id: self.id.committed().to_string(),
            name: self.name.committed().to_string(),
            surname: self.surname.committed().to_string(),
            phone: self.phone.committed().to_string(),
        }
    }

    fn fields_mut(&mut self) -> [&mut Field; 4] {
        [
            &mut self.id,
            &mut self.name,
            &mut self.surname,
            &mut self.phone,
        ]
    }
}

impl Default for PersonFields {
    fn default() -> Self {
        Self::new()
    }
}

impl Record for PersonFields {
    fn fields(&self) -> Vec<&Field> {
        vec![&self.id, &self.name, &self.surname, &self.phone]
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut Field> {
        self.fields_mut().into_iter().find(|field| field.key() == key)
    }

    fn matches(&self, key: &str) -> bool {
        self.id.committed() == key
    }

    fn validate(&mut self) -> bool {
        check_in_order(self.fields_mut())
    }

    fn commit(&mut self) {
        for field in self.fields_mut() {
            field.commit();
        }
    }

    fn rollback(&mut self) {
        for field in self.fields_mut() {
            field.rollback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubhouse_core::Marker;

    fn fill(person: &mut PersonFields, id: &str, name: &str, surname: &str, phone: &str) {
        person.field_mut("id").unwrap().set_draft(id);
        person.field_mut("name").unwrap().set_draft(name);
        person.field_mut("surname").unwrap().set_draft(surname);
        person.field_mut("phone").unwrap().set_draft(phone);
    }

    #[test]
    fn valid_person_validates_and_commits_exact_values() {
        let mut person = PersonFields::new();
        fill(
            &mut person,
            "1-2345678|9",
            "John",
            "O'Brien-Smith",
            "+(1)234-5678901",
        );

        assert!(person.validate());
        assert!(person.first_error().is_none());
        assert!(person.fields().iter().all(|f| f.marker() == Marker::Ok));

        person.commit();
        assert_eq!(
            person.values(),
            PersonValues {
                id: "1-2345678|9".to_string(),
                name: "John".to_string(),
                surname: "O'Brien-Smith".to_string(),
                phone: "+(1)234-5678901".to_string(),
            }
        );
    }

    #[test]
    fn invalid_first_field_marks_only_that_field() {
        let mut person = PersonFields::new();
        fill(&mut person, "bad", "john", "smith", "nope");

        assert!(!person.validate());
        let markers: Vec<Marker> = person.fields().iter().map(|f| f.marker()).collect();
        assert_eq!(
            markers,
            vec![
                Marker::Error,
                Marker::Unchecked,
                Marker::Unchecked,
                Marker::Unchecked
            ]
        );
        assert_eq!(person.first_error().map(|f| f.key()), Some("id"));
    }

    #[test]
    fn invalid_later_field_marks_earlier_fields_ok() {
        let mut person = PersonFields::new();
        fill(&mut person, "1-2345678|9", "John", "smith", "+(1)234-5678901");

        assert!(!person.validate());
        let markers: Vec<Marker> = person.fields().iter().map(|f| f.marker()).collect();
        assert_eq!(
            markers,
            vec![Marker::Ok, Marker::Ok, Marker::Error, Marker::Unchecked]
        );
    }

    #[test]
    fn matches_only_committed_id() {
        let mut person = PersonFields::new();
        assert!(person.matches(""));

        fill(
            &mut person,
            "1-2345678|9",
            "John",
            "Smith",
            "+(1)234-5678901",
        );
        // Drafts are never matched.
        assert!(!person.matches("1-2345678|9"));
        assert!(person.matches(""));

        person.commit();
        assert!(person.matches("1-2345678|9"));
        assert!(!person.matches(""));
    }

    #[test]
    fn rollback_resets_drafts_and_clears_markers() {
        let values = PersonValues {
            id: "1-2345678|9".to_string(),
            name: "John".to_string(),
            surname: "Smith".to_string(),
            phone: "+(1)234-5678901".to_string(),
        };
        let mut person = PersonFields::restore(&values);
        fill(&mut person, "x", "y", "z", "w");
        assert!(!person.validate());
        assert!(person.is_dirty());

        person.rollback();
        assert!(!person.is_dirty());
        assert!(person.first_error().is_none());
        assert!(person.fields().iter().all(|f| f.marker() == Marker::Unchecked));
        assert_eq!(person.values(), values);
    }

    #[test]
    fn unknown_key_has_no_field() {
        let mut person = PersonFields::new();
        assert!(person.field_mut("personal_number").is_none());
    }
}
