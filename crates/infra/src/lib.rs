//! Infrastructure layer: the member repository, its persisted store and the
//! edit dispatcher that ties drafts to committed state.

pub mod dispatcher;
pub mod repository;
pub mod store;

pub use dispatcher::{DispatchError, EditCommand, EditDispatcher, EditOutcome, Rejection};
pub use repository::MemberRepository;
pub use store::{InMemoryStore, JsonFileStore, MemberStore, Snapshot, StoreError};
