//! Errors raised by record rules.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures of the member domain itself.
///
/// A field failing its pattern is *not* an error here: it is reported through
/// the field's marker. IO and presentation failures live in their own layers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input that cannot name anything meaningful (e.g. an unknown member kind).
    #[error("rejected input: {0}")]
    Validation(String),

    /// The record kind does not carry the requested field.
    #[error("unknown field `{0}`")]
    UnknownField(String),
}

impl DomainError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }

    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField(name.into())
    }
}
