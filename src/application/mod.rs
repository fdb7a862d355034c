// src/application/mod.rs
pub mod local_cache;
pub mod note_query;
pub mod note_repository;
pub mod remote_store;
pub mod repository_state;
pub mod session;

pub use local_cache::{KeyValueStore, LocalCache};
pub use note_repository::{NoteRepository, SaveKind, SaveOutcome};
pub use remote_store::RemoteStore;
pub use repository_state::{RefreshOutcome, RepositoryState, SyncStatus};
pub use session::SessionGate;
