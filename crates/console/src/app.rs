//! Top-level controller.

use clubhouse_core::RecordId;
use clubhouse_infra::{
    DispatchError, EditCommand, EditDispatcher, EditOutcome, MemberRepository, MemberStore,
    Rejection, StoreError,
};
use clubhouse_members::{Member, MemberKind};

use crate::config::AppConfig;
use crate::surface::{Notice, Surface};

pub const SEARCH_PROMPT: &str = "Please enter the clubber's key";

/// Owns the member repository and its store for the life of the process.
pub struct ClubApp {
    repository: MemberRepository,
    store: Box<dyn MemberStore>,
}

impl ClubApp {
    /// Load members from the configured data file.
    pub fn open(config: &AppConfig) -> Self {
        Self::with_store(Box::new(config.store()))
    }

    pub fn with_store(store: Box<dyn MemberStore>) -> Self {
        let repository = MemberRepository::load_all(store.as_ref());
        Self { repository, store }
    }

    pub fn repository(&self) -> &MemberRepository {
        &self.repository
    }

    pub fn member(&self, id: RecordId) -> Option<&Member> {
        self.repository.get(id)
    }

    /// Register a blank member of `kind` and return its handle.
    pub fn create(&mut self, kind: MemberKind) -> RecordId {
        self.repository.register(Member::empty(kind))
    }

    /// Ask the operator for a key and look it up.
    pub fn search(&self, surface: &mut dyn Surface) -> Option<RecordId> {
        let key = surface.prompt(SEARCH_PROMPT)?;
        self.search_key(&key, surface)
    }

    /// Look up `key`; tells the operator when nothing matches.
    pub fn search_key(&self, key: &str, surface: &mut dyn Surface) -> Option<RecordId> {
        match self.repository.find_by_key(key) {
            Some(member) => Some(member.record_id()),
            None => {
                tracing::debug!(key, "search found nothing");
                surface.notify(&Notice::NotFound {
                    key: key.to_string(),
                });
                None
            }
        }
    }

    /// Apply an edit command to one member, telling the operator about refusals.
    pub fn edit(
        &mut self,
        id: RecordId,
        command: EditCommand,
        surface: &mut dyn Surface,
    ) -> Result<EditOutcome, DispatchError> {
        let outcome = EditDispatcher::new(&mut self.repository).dispatch(id, command)?;
        match &outcome {
            EditOutcome::Rejected(Rejection::Duplicate { key }) => {
                surface.notify(&Notice::AlreadyExists { key: key.clone() })
            }
            EditOutcome::Rejected(Rejection::Invalid { field }) => {
                surface.notify(&Notice::Invalid { field: *field })
            }
            _ => {}
        }
        Ok(outcome)
    }

    /// Persist every committed member. Returns how many were written.
    pub fn shutdown(&mut self) -> Result<usize, StoreError> {
        self.repository.save_all(self.store.as_ref())
    }
}
