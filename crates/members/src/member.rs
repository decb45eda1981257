//! `Member`: any club member record, with its identity and lifecycle.

use core::str::FromStr;

use clubhouse_core::{DomainError, DomainResult, Field, Record, RecordId};

use crate::fields::FieldName;
use crate::lifecycle::{Lifecycle, LifecycleState};
use crate::person::PersonFields;
use crate::soldier::Soldier;
use crate::student::Student;
use crate::values::MemberValues;

/// Member kind: the three record variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Person,
    Soldier,
    Student,
}

impl MemberKind {
    pub const ALL: [MemberKind; 3] = [MemberKind::Person, MemberKind::Soldier, MemberKind::Student];

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Person => "person",
            MemberKind::Soldier => "soldier",
            MemberKind::Student => "student",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MemberKind::Person => "Person",
            MemberKind::Soldier => "Soldier",
            MemberKind::Student => "Student",
        }
    }
}

impl core::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemberKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "person" => Ok(MemberKind::Person),
            "soldier" => Ok(MemberKind::Soldier),
            "student" => Ok(MemberKind::Student),
            other => Err(DomainError::validation(format!(
                "unknown member kind `{other}` (expected person, soldier or student)"
            ))),
        }
    }
}

/// The field data of a member, by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
enum MemberBody {
    Person(PersonFields),
    Soldier(Soldier),
    Student(Student),
}

impl MemberBody {
    fn as_record(&self) -> &dyn Record {
        match self {
            MemberBody::Person(r) => r,
            MemberBody::Soldier(r) => r,
            MemberBody::Student(r) => r,
        }
    }

    fn as_record_mut(&mut self) -> &mut dyn Record {
        match self {
            MemberBody::Person(r) => r,
            MemberBody::Soldier(r) => r,
            MemberBody::Student(r) => r,
        }
    }

    fn base(&self) -> &PersonFields {
        match self {
            MemberBody::Person(r) => r,
            MemberBody::Soldier(r) => r.base(),
            MemberBody::Student(r) => r.base(),
        }
    }
}

/// A club member record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    record_id: RecordId,
    lifecycle: Lifecycle,
    body: MemberBody,
}

impl Member {
    /// A new, blank member of the given kind.
    pub fn empty(kind: MemberKind) -> Self {
        let body = match kind {
            MemberKind::Person => MemberBody::Person(PersonFields::new()),
            MemberKind::Soldier => MemberBody::Soldier(Soldier::new()),
            MemberKind::Student => MemberBody::Student(Student::new()),
        };
        Self {
            record_id: RecordId::new(),
            lifecycle: Lifecycle::new(),
            body,
        }
    }

    /// Rebuild a committed member from stored values.
    pub fn restore(values: &MemberValues) -> Self {
        let body = match values {
            MemberValues::Person(v) => MemberBody::Person(PersonFields::restore(v)),
            MemberValues::Soldier(v) => MemberBody::Soldier(Soldier::restore(v)),
            MemberValues::Student(v) => MemberBody::Student(Student::restore(v)),
        };
        Self {
            record_id: RecordId::new(),
            lifecycle: Lifecycle::restored(),
            body,
        }
    }

    pub fn record_id(&self) -> RecordId {
        self.record_id
    }

    pub fn kind(&self) -> MemberKind {
        match self.body {
            MemberBody::Person(_) => MemberKind::Person,
            MemberBody::Soldier(_) => MemberKind::Soldier,
            MemberBody::Student(_) => MemberKind::Student,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    pub fn has_been_committed(&self) -> bool {
        self.lifecycle.has_been_committed()
    }

    /// The id currently typed into the draft.
    pub fn draft_id(&self) -> &str {
        self.body.base().id().draft()
    }

    pub fn committed_id(&self) -> &str {
        self.body.base().id().committed()
    }

    /// Whether this member was never committed (its committed id is blank).
    pub fn is_uncommitted(&self) -> bool {
        self.matches("")
    }

    /// Write a draft value. Committed values are untouched.
    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) -> DomainResult<()> {
        let kind = self.kind();
        let field = self
            .body
            .as_record_mut()
            .field_mut(name.key())
            .ok_or_else(|| {
                DomainError::unknown_field(format!("{} (not carried by {kind})", name.key()))
            })?;
        field.set_draft(value);
        self.lifecycle.edited();
        Ok(())
    }

    /// Record that a confirm attempt was refused.
    pub fn reject(&mut self) {
        self.lifecycle.rejected();
    }

    /// Committed values, ready for storage.
    pub fn values(&self) -> MemberValues {
        match &self.body {
            MemberBody::Person(r) => MemberValues::Person(r.values()),
            MemberBody::Soldier(r) => MemberValues::Soldier(r.values()),
            MemberBody::Student(r) => MemberValues::Student(r.values()),
        }
    }
}

impl Record for Member {
    fn fields(&self) -> Vec<&Field> {
        self.body.as_record().fields()
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut Field> {
        self.body.as_record_mut().field_mut(key)
    }

    fn matches(&self, key: &str) -> bool {
        self.body.as_record().matches(key)
    }

    fn validate(&mut self) -> bool {
        self.body.as_record_mut().validate()
    }

    fn commit(&mut self) {
        self.body.as_record_mut().commit();
        self.lifecycle.committed();
    }

    fn rollback(&mut self) {
        self.body.as_record_mut().rollback();
        self.lifecycle.rolled_back();
    }
}
