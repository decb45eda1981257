//! `clubhouse-core`: domain building blocks shared by every member kind.
//!
//! This crate contains **pure domain** primitives (no IO, no presentation).

pub mod error;
pub mod field;
pub mod id;
pub mod pattern;
pub mod record;

pub use error::{DomainError, DomainResult};
pub use field::{Field, FieldSpec, Marker, check_in_order};
pub use id::RecordId;
pub use pattern::FieldPattern;
pub use record::Record;
