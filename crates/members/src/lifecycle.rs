//! Edit lifecycle of a single record.

/// Where a record stands between its draft and committed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Freshly created; every field blank.
    Empty,
    /// Drafts may diverge from committed values.
    Editing,
    /// Drafts were confirmed into committed values.
    Committed,
    /// Drafts were reset to committed values. Displayed like `Editing`.
    RolledBack,
}

/// Lifecycle tracking for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifecycle {
    state: LifecycleState,
    committed_once: bool,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            state: LifecycleState::Empty,
            committed_once: false,
        }
    }

    /// Lifecycle of a record read back from storage.
    pub fn restored() -> Self {
        Self {
            state: LifecycleState::Committed,
            committed_once: true,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Whether the record has ever been confirmed.
    ///
    /// Before the first commit there is nothing to cancel back to except blanks.
    pub fn has_been_committed(&self) -> bool {
        self.committed_once
    }

    pub fn edited(&mut self) {
        self.state = LifecycleState::Editing;
    }

    /// A confirm attempt was refused; the record keeps being edited.
    pub fn rejected(&mut self) {
        self.state = LifecycleState::Editing;
    }

    pub fn committed(&mut self) {
        self.state = LifecycleState::Committed;
        self.committed_once = true;
    }

    pub fn rolled_back(&mut self) {
        self.state = LifecycleState::RolledBack;
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_through_the_edit_cycle() {
        let mut lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.state(), LifecycleState::Empty);
        assert!(!lifecycle.has_been_committed());

        lifecycle.edited();
        assert_eq!(lifecycle.state(), LifecycleState::Editing);

        lifecycle.rejected();
        assert_eq!(lifecycle.state(), LifecycleState::Editing);
        assert!(!lifecycle.has_been_committed());

        lifecycle.committed();
        assert_eq!(lifecycle.state(), LifecycleState::Committed);
        assert!(lifecycle.has_been_committed());

        lifecycle.edited();
        lifecycle.rolled_back();
        assert_eq!(lifecycle.state(), LifecycleState::RolledBack);
        assert!(lifecycle.has_been_committed());
    }

    #[test]
    fn restored_records_count_as_committed() {
        let lifecycle = Lifecycle::restored();
        assert_eq!(lifecycle.state(), LifecycleState::Committed);
        assert!(lifecycle.has_been_committed());
    }
}
