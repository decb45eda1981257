//! Whole-collection persistence boundary.
//!
//! A store reads and writes the complete ordered member collection in one go.
//! There is no partial update: every save overwrites what was there.

pub mod in_memory;
pub mod json_file;
pub mod snapshot;

use std::path::PathBuf;

use thiserror::Error;

use clubhouse_members::Member;

pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;
pub use snapshot::{FORMAT_VERSION, Snapshot};

#[derive(Debug, Error)]
pub enum StoreError {
    /// Nothing has been saved yet.
    #[error("no data file at {}", .0.display())]
    Missing(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt member data: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("unsupported format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Reads and writes the full member collection.
pub trait MemberStore {
    /// Load every stored member, in stored order.
    fn load(&self) -> Result<Vec<Member>, StoreError>;

    /// Replace the stored collection with `members`.
    fn save(&self, members: &[Member]) -> Result<(), StoreError>;
}
