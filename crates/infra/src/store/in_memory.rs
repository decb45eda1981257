use std::sync::RwLock;

use clubhouse_members::Member;

use super::{MemberStore, Snapshot, StoreError};

/// In-memory store holding the serialized snapshot.
///
/// Intended for tests/dev. Data still goes through the same JSON encoding as
/// the file store, so round-trip behaviour is identical.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contents: RwLock<Option<String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with raw contents (which may be invalid on purpose).
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: RwLock::new(Some(contents.into())),
        }
    }
}

impl MemberStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Member>, StoreError> {
        let contents = self
            .contents
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        match contents.as_deref() {
            Some(json) => Ok(Snapshot::from_json(json)?.into_members()),
            None => Err(StoreError::Missing("<memory>".into())),
        }
    }

    fn save(&self, members: &[Member]) -> Result<(), StoreError> {
        let json = Snapshot::capture(members).to_json()?;
        let mut contents = self
            .contents
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        *contents = Some(json);
        Ok(())
    }
}
