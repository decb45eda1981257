//! In-memory ordered member collection with key lookup.
//!
//! The repository is owned by the application and passed by reference. It is
//! filled once from a [`MemberStore`] at startup (`load_all`) and written back
//! once at shutdown (`save_all`).

use clubhouse_core::{Record, RecordId};
use clubhouse_members::Member;

use crate::store::{MemberStore, StoreError};

#[derive(Debug, Default)]
pub struct MemberRepository {
    members: Vec<Member>,
}

impl MemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_members(members: Vec<Member>) -> Self {
        Self { members }
    }

    /// Read the whole collection from `store`.
    ///
    /// Never fails: a missing, unreadable or corrupt store leaves the
    /// repository empty and the failure is logged.
    pub fn load_all(store: &dyn MemberStore) -> Self {
        match store.load() {
            Ok(members) => {
                tracing::info!(count = members.len(), "loaded members");
                Self::from_members(members)
            }
            Err(StoreError::Missing(path)) => {
                tracing::warn!(path = %path.display(), "no member data yet; starting empty");
                Self::new()
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load members; starting empty");
                Self::new()
            }
        }
    }

    /// Drop never-committed members, discard pending drafts of the rest, and
    /// overwrite the store with the full collection. Returns how many members
    /// were written.
    ///
    /// Members without pending edits keep their lifecycle state.
    pub fn save_all(&mut self, store: &dyn MemberStore) -> Result<usize, StoreError> {
        let before = self.members.len();
        self.members.retain(|member| !member.is_uncommitted());
        let discarded = before - self.members.len();

        for member in self.members.iter_mut().filter(|member| member.is_dirty()) {
            member.rollback();
        }

        if let Err(err) = store.save(&self.members) {
            tracing::error!(error = %err, "failed to save members");
            return Err(err);
        }

        tracing::info!(count = self.members.len(), discarded, "saved members");
        Ok(self.members.len())
    }

    /// Append a member and return its handle.
    pub fn register(&mut self, member: Member) -> RecordId {
        let id = member.record_id();
        tracing::debug!(record = %id, kind = %member.kind(), "registered member");
        self.members.push(member);
        id
    }

    pub fn get(&self, id: RecordId) -> Option<&Member> {
        self.members.iter().find(|member| member.record_id() == id)
    }

    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut Member> {
        self.members.iter_mut().find(|member| member.record_id() == id)
    }

    /// First member (in insertion order) whose effective key is `key`.
    pub fn find_by_key(&self, key: &str) -> Option<&Member> {
        self.members.iter().find(|member| member.matches(key))
    }

    /// Whether a *different* member already answers to the candidate's id.
    ///
    /// The candidate's draft id is used, since this runs before the candidate
    /// is committed. A match on the candidate itself is not a conflict.
    pub fn exists(&self, candidate: &Member) -> bool {
        let key = candidate.draft_id();
        match self.find_by_key(key) {
            Some(found) if found.record_id() != candidate.record_id() => {
                tracing::warn!(key, existing = %found.record_id(), "member key already taken");
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }
}
