//! Student members: a person plus a student id.

use clubhouse_core::{Field, Record};

use crate::fields::{STUDENT_ID, suffix_matches};
use crate::person::PersonFields;
use crate::values::{PersonValues, StudentValues};

/// Length of the faculty prefix (`ABC/`) skipped when a student id is matched
/// against a search key.
pub const STUDENT_ID_KEY_OFFSET: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    base: PersonFields,
    student_id: Field,
}

impl Student {
    pub fn new() -> Self {
        Self {
            base: PersonFields::new(),
            student_id: Field::new(&STUDENT_ID),
        }
    }

    pub fn restore(values: &StudentValues) -> Self {
        Self {
            base: PersonFields::restore(&PersonValues {
                id: values.id.clone(),
                name: values.name.clone(),
                surname: values.surname.clone(),
                phone: values.phone.clone(),
            }),
            student_id: Field::with_value(&STUDENT_ID, values.student_id.as_str()),
        }
    }

    pub fn base(&self) -> &PersonFields {
        &self.base
    }

    pub fn student_id(&self) -> &Field {
        &self.student_id
    }

    pub fn values(&self) -> StudentValues {
        let base = self.base.values();
        StudentValues {
            id: base.id,
            name: base.name,
            surname: base.surname,
            phone: base.phone,
            student_id: self.student_id.committed().to_string(),
        }
    }
}

impl Default for Student {
    fn default() -> Self {
        Self::new()
    }
}

impl Record for Student {
    fn fields(&self) -> Vec<&Field> {
        let mut fields = self.base.fields();
        fields.push(&self.student_id);
        fields
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut Field> {
        if self.student_id.key() == key {
            return Some(&mut self.student_id);
        }
        self.base.field_mut(key)
    }

    fn matches(&self, key: &str) -> bool {
        self.base.matches(key)
            || suffix_matches(self.student_id.committed(), STUDENT_ID_KEY_OFFSET, key)
    }

    fn validate(&mut self) -> bool {
        self.base.validate() && self.student_id.check()
    }

    fn commit(&mut self) {
        self.base.commit();
        self.student_id.commit();
    }

    fn rollback(&mut self) {
        self.base.rollback();
        self.student_id.rollback();
    }
}
