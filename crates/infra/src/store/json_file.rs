//! Single-file JSON store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clubhouse_members::Member;

use super::{MemberStore, Snapshot, StoreError};

/// Keeps the member collection in one JSON file, overwritten on every save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MemberStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Member>, StoreError> {
        let json = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                StoreError::Missing(self.path.clone())
            } else {
                StoreError::Read {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        Ok(Snapshot::from_json(&json)?.into_members())
    }

    fn save(&self, members: &[Member]) -> Result<(), StoreError> {
        let json = Snapshot::capture(members).to_json()?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
