//! Edit command dispatch (the confirm/cancel lifecycle controller).
//!
//! The presentation layer turns operator actions into [`EditCommand`]s and
//! hands them to an [`EditDispatcher`], which applies them to one member's
//! draft/committed state:
//!
//! ```text
//! SetField ─▶ write draft
//! Confirm  ─▶ validate ─▶ key conflict check ─▶ commit
//!                 │               │
//!                 └─ Rejected ────┘   (nothing committed, surface stays open)
//! Cancel   ─▶ rollback (always succeeds)
//! ```

use thiserror::Error;

use clubhouse_core::{DomainError, Record, RecordId};
use clubhouse_members::{FieldName, Member};

use crate::repository::MemberRepository;

/// An operator action on a single member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    SetField { field: FieldName, value: String },
    Confirm,
    Cancel,
}

/// Why a confirm was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// A draft failed its pattern; `field` is the first offending one.
    Invalid { field: Option<FieldName> },
    /// Another member already answers to `key`.
    Duplicate { key: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// A draft value was written.
    Drafted,
    Committed,
    RolledBack,
    Rejected(Rejection),
}

impl EditOutcome {
    /// Whether the editing surface for the member should close.
    pub fn closes_surface(&self) -> bool {
        matches!(self, EditOutcome::Committed | EditOutcome::RolledBack)
    }
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no member with handle {0}")]
    UnknownRecord(RecordId),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Applies edit commands to members held by a repository.
#[derive(Debug)]
pub struct EditDispatcher<'r> {
    repository: &'r mut MemberRepository,
}

impl<'r> EditDispatcher<'r> {
    pub fn new(repository: &'r mut MemberRepository) -> Self {
        Self { repository }
    }

    pub fn dispatch(
        &mut self,
        id: RecordId,
        command: EditCommand,
    ) -> Result<EditOutcome, DispatchError> {
        tracing::debug!(record = %id, ?command, "dispatching edit command");
        match command {
            EditCommand::SetField { field, value } => {
                self.member_mut(id)?.set_field(field, value)?;
                Ok(EditOutcome::Drafted)
            }
            EditCommand::Confirm => self.confirm(id),
            EditCommand::Cancel => {
                let member = self.member_mut(id)?;
                member.rollback();
                tracing::debug!(
                    record = %id,
                    committed_before = member.has_been_committed(),
                    "member edits discarded"
                );
                Ok(EditOutcome::RolledBack)
            }
        }
    }

    fn confirm(&mut self, id: RecordId) -> Result<EditOutcome, DispatchError> {
        let member = self.member_mut(id)?;
        if !member.validate() {
            let field = member
                .first_error()
                .and_then(|field| FieldName::from_key(field.key()));
            member.reject();
            return Ok(EditOutcome::Rejected(Rejection::Invalid { field }));
        }

        let member = self
            .repository
            .get(id)
            .ok_or(DispatchError::UnknownRecord(id))?;
        if self.repository.exists(member) {
            let key = member.draft_id().to_string();
            self.member_mut(id)?.reject();
            return Ok(EditOutcome::Rejected(Rejection::Duplicate { key }));
        }

        let member = self.member_mut(id)?;
        member.commit();
        tracing::info!(
            record = %id,
            kind = %member.kind(),
            key = member.committed_id(),
            "member committed"
        );
        Ok(EditOutcome::Committed)
    }

    fn member_mut(&mut self, id: RecordId) -> Result<&mut Member, DispatchError> {
        self.repository
            .get_mut(id)
            .ok_or(DispatchError::UnknownRecord(id))
    }
}
