//! Committed field values, detached from any editing state.
//!
//! These are the shapes written to and read from storage. The `kind` tag
//! selects the variant when reading back.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonValues {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoldierValues {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub personal_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentValues {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub student_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MemberValues {
    Person(PersonValues),
    Soldier(SoldierValues),
    Student(StudentValues),
}
