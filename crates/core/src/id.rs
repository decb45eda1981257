//! Process-local record handles.

use uuid::Uuid;

/// Identity of a record inside one running process.
///
/// Two records with equal field values are still different records; the handle
/// is what tells them apart. Handles are never written to the persisted file,
/// a fresh one is minted whenever a record is created or loaded.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Create a new handle.
    ///
    /// Uses UUIDv7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
