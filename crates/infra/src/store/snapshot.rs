//! On-disk shape of the member collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clubhouse_members::{Member, MemberValues};

use super::StoreError;

/// Version written into every snapshot. Anything else is refused on read.
pub const FORMAT_VERSION: u32 = 1;

/// The whole member collection as written to storage.
///
/// Only committed values are captured. Drafts, markers and record handles are
/// process-local and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub format_version: u32,
    pub saved_at: DateTime<Utc>,
    pub members: Vec<MemberValues>,
}

impl Snapshot {
    pub fn capture(members: &[Member]) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            saved_at: Utc::now(),
            members: members.iter().map(Member::values).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        if snapshot.format_version != FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: snapshot.format_version,
                expected: FORMAT_VERSION,
            });
        }
        Ok(snapshot)
    }

    /// Rebuild committed members, in stored order.
    pub fn into_members(self) -> Vec<Member> {
        self.members.iter().map(Member::restore).collect()
    }
}
