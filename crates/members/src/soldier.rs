//! Soldier members: a person plus a personal number.

use clubhouse_core::{Field, Record};

use crate::fields::{PERSONAL_NUMBER, suffix_matches};
use crate::person::PersonFields;
use crate::values::{PersonValues, SoldierValues};

/// Length of the rank prefix (`R/`, `O/`, `C/`) skipped when a personal number
/// is matched against a search key.
pub const PERSONAL_NUMBER_KEY_OFFSET: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Soldier {
    base: PersonFields,
    personal_number: Field,
}

impl Soldier {
    pub fn new() -> Self {
        Self {
            base: PersonFields::new(),
            personal_number: Field::new(&PERSONAL_NUMBER),
        }
    }

    pub fn restore(values: &SoldierValues) -> Self {
        Self {
            base: PersonFields::restore(&PersonValues {
                id: values.id.clone(),
                name: values.name.clone(),
                surname: values.surname.clone(),
                phone: values.phone.clone(),
            }),
            personal_number: Field::with_value(&PERSONAL_NUMBER, values.personal_number.as_str()),
        }
    }

    pub fn base(&self) -> &PersonFields {
        &self.base
    }

    pub fn personal_number(&self) -> &Field {
        &self.personal_number
    }

    pub fn values(&self) -> SoldierValues {
        let base = self.base.values();
        SoldierValues {
            id: base.id,
            name: base.name,
            surname: base.surname,
            phone: base.phone,
            personal_number: self.personal_number.committed().to_string(),
        }
    }
}

impl Default for Soldier {
    fn default() -> Self {
        Self::new()
    }
}

impl Record for Soldier {
    fn fields(&self) -> Vec<&Field> {
        let mut fields = self.base.fields();
        fields.push(&self.personal_number);
        fields
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut Field> {
        if self.personal_number.key() == key {
            return Some(&mut self.personal_number);
        }
        self.base.field_mut(key)
    }

    /// Matches the committed id, or the committed personal number without its
    /// rank prefix (`R/1234567` matches `1234567`).
    fn matches(&self, key: &str) -> bool {
        self.base.matches(key)
            || suffix_matches(
                self.personal_number.committed(),
                PERSONAL_NUMBER_KEY_OFFSET,
                key,
            )
    }

    fn validate(&mut self) -> bool {
        self.base.validate() && self.personal_number.check()
    }

    fn commit(&mut self) {
        self.base.commit();
        self.personal_number.commit();
    }

    fn rollback(&mut self) {
        self.base.rollback();
        self.personal_number.rollback();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubhouse_core::Marker;

    fn committed_soldier(personal_number: &str) -> Soldier {
        Soldier::restore(&SoldierValues {
            id: "1-2345678|9".to_string(),
            name: "John".to_string(),
            surname: "Smith".to_string(),
            phone: "+(1)234-5678901".to_string(),
            personal_number: personal_number.to_string(),
        })
    }

    #[test]
    fn matches_personal_number_suffix() {
        let soldier = committed_soldier("R/1234567");
        assert!(soldier.matches("1234567"));
        assert!(!soldier.matches("7654321"));
        assert!(!soldier.matches("R/1234567"));
        assert!(soldier.matches("1-2345678|9"));
    }

    #[test]
    fn blank_soldier_matches_only_the_empty_key() {
        let soldier = Soldier::new();
        assert!(soldier.matches(""));
        assert!(!soldier.matches("1234567"));
    }

    #[test]
    fn base_failure_leaves_personal_number_unchecked() {
        let mut soldier = Soldier::new();
        soldier
            .field_mut("personal_number")
            .unwrap()
            .set_draft("R/1234567");

        assert!(!soldier.validate());
        assert_eq!(soldier.first_error().map(|f| f.key()), Some("id"));
        assert_eq!(soldier.personal_number().marker(), Marker::Unchecked);
    }

    #[test]
    fn personal_number_checked_after_base() {
        let mut soldier = committed_soldier("R/1234567");
        soldier
            .field_mut("personal_number")
            .unwrap()
            .set_draft("X/1234567");

        assert!(!soldier.validate());
        assert!(soldier.base().fields().iter().all(|f| f.marker() == Marker::Ok));
        assert_eq!(soldier.personal_number().marker(), Marker::Error);
    }

    #[test]
    fn commit_and_rollback_cover_the_extra_field() {
        let mut soldier = committed_soldier("R/1234567");
        soldier
            .field_mut("personal_number")
            .unwrap()
            .set_draft("O/7654321");
        assert!(soldier.validate());
        soldier.commit();
        assert_eq!(soldier.values().personal_number, "O/7654321");
        assert!(soldier.matches("7654321"));

        soldier
            .field_mut("personal_number")
            .unwrap()
            .set_draft("C/1111111");
        soldier.rollback();
        assert_eq!(soldier.personal_number().draft(), "O/7654321");
    }
}
