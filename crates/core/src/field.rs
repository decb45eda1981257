//! Editable fields: a committed value, a draft value and a validation marker.

use crate::pattern::FieldPattern;

/// Per-field validation indicator.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Marker {
    /// Not checked since the last rollback (or ever).
    #[default]
    Unchecked,
    Ok,
    Error,
}

/// Static description of a field: lookup key, display label and the pattern
/// its draft must satisfy.
#[derive(Debug)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub pattern: FieldPattern,
}

impl PartialEq for FieldSpec {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FieldSpec {}

/// A single string-valued field of a record.
///
/// The draft is what the editing surface shows; the committed value is
/// authoritative and is what matching and persistence see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    spec: &'static FieldSpec,
    committed: String,
    draft: String,
    marker: Marker,
}

impl Field {
    /// A blank, never-committed field.
    pub fn new(spec: &'static FieldSpec) -> Self {
        Self::with_value(spec, String::new())
    }

    /// A field whose draft and committed value are both `value`.
    pub fn with_value(spec: &'static FieldSpec, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            spec,
            draft: value.clone(),
            committed: value,
            marker: Marker::Unchecked,
        }
    }

    pub fn spec(&self) -> &'static FieldSpec {
        self.spec
    }

    pub fn key(&self) -> &'static str {
        self.spec.key
    }

    pub fn label(&self) -> &'static str {
        self.spec.label
    }

    pub fn committed(&self) -> &str {
        &self.committed
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub fn set_draft(&mut self, value: impl Into<String>) {
        self.draft = value.into();
    }

    /// Check the draft against the field pattern and record the outcome.
    pub fn check(&mut self) -> bool {
        let ok = self.spec.pattern.is_full_match(&self.draft);
        self.marker = if ok { Marker::Ok } else { Marker::Error };
        ok
    }

    pub fn commit(&mut self) {
        self.committed.clone_from(&self.draft);
    }

    /// Reset the draft to the committed value and clear the marker.
    pub fn rollback(&mut self) {
        self.draft.clone_from(&self.committed);
        self.marker = Marker::Unchecked;
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.committed
    }
}

/// Check fields in order, stopping at the first failure.
///
/// Every field up to and including the failing one gets a marker; the rest are
/// left untouched.
pub fn check_in_order<'a>(fields: impl IntoIterator<Item = &'a mut Field>) -> bool {
    for field in fields {
        if !field.check() {
            return false;
        }
    }
    true
}
