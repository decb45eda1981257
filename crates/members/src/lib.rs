//! Member records: persons, soldiers and students.
//!
//! This crate contains the field rules and record behaviour for each member
//! kind, implemented purely as deterministic domain logic (no IO, no storage,
//! no presentation).

pub mod fields;
pub mod lifecycle;
pub mod member;
pub mod person;
pub mod soldier;
pub mod student;
pub mod values;

pub use fields::FieldName;
pub use lifecycle::LifecycleState;
pub use member::{Member, MemberKind};
pub use person::PersonFields;
pub use soldier::Soldier;
pub use student::Student;
pub use values::{MemberValues, PersonValues, SoldierValues, StudentValues};
