// src/application/repository_state.rs
use crate::domain::Note;

/// Phase of the most recent list-fetch cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncStatus {
    #[default]
    Idle,
    Loading,
    /// Fresh list from the remote store
    Loaded,
    /// Remote unreachable; `from_cache` tells whether a stale snapshot is shown
    Degraded { from_cache: bool },
}

/// Result of a single `refresh`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Loaded { count: usize },
    Degraded { from_cache: bool, reason: String },
}

/// Immutable snapshot of everything the repository shows.
///
/// Transitions consume the old value and return the next one. Completion
/// transitions overwrite the list unconditionally, so whichever response
/// is applied last wins regardless of the order requests were issued in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepositoryState {
    notes: Vec<Note>,
    status: SyncStatus,
    last_error: Option<String>,
}

impl RepositoryState {
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn status(&self) -> SyncStatus {
        self.status
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Current list stays visible while loading
    #[must_use]
    pub fn begin_refresh(self) -> Self {
        Self {
            status: SyncStatus::Loading,
            ..self
        }
    }

    #[must_use]
    pub fn apply_loaded(self, notes: Vec<Note>) -> Self {
        Self {
            notes,
            status: SyncStatus::Loaded,
            last_error: None,
        }
    }

    /// A missing snapshot empties the list
    #[must_use]
    pub fn apply_degraded(self, snapshot: Option<Vec<Note>>, reason: impl Into<String>) -> Self {
        let from_cache = snapshot.is_some();
        Self {
            notes: snapshot.unwrap_or_default(),
            status: SyncStatus::Degraded { from_cache },
            last_error: Some(reason.into()),
        }
    }

    pub fn outcome(&self) -> RefreshOutcome {
        match self.status {
            SyncStatus::Degraded { from_cache } => RefreshOutcome::Degraded {
                from_cache,
                reason: self.last_error.clone().unwrap_or_default(),
            },
            _ => RefreshOutcome::Loaded {
                count: self.notes.len(),
            },
        }
    }
}
