//! The capability set every record kind provides.

use crate::field::{Field, Marker};

/// Shared behaviour of all member records.
///
/// - **Matching** (`matches`) only ever looks at committed values.
/// - **Validation** (`validate`) only ever looks at drafts, checks fields in
///   declared order and stops at the first failure.
/// - **State mutation** happens through `commit` (draft → committed) and
///   `rollback` (committed → draft, markers cleared).
///
/// Derived kinds compose a base field group and delegate to it explicitly
/// rather than overriding it.
pub trait Record {
    /// All fields in declared order.
    fn fields(&self) -> Vec<&Field>;

    /// Mutable access to a field by key, if this kind carries it.
    fn field_mut(&mut self, key: &str) -> Option<&mut Field>;

    /// Whether `key` is an effective key of this record.
    fn matches(&self, key: &str) -> bool;

    fn validate(&mut self) -> bool;

    fn commit(&mut self);

    fn rollback(&mut self);

    /// The field currently marked in error, if any.
    fn first_error(&self) -> Option<&Field> {
        self.fields()
            .into_iter()
            .find(|field| field.marker() == Marker::Error)
    }

    /// Whether any draft diverges from its committed value.
    fn is_dirty(&self) -> bool {
        self.fields().iter().any(|field| field.is_dirty())
    }
}
