// src/domain/mod.rs
pub mod draft;
pub mod error;
pub mod note;
pub mod sort;

pub use draft::Draft;
pub use error::{DomainError, RemoteOperation};
pub use note::{ImagePayload, Note, NoteId, NoteInput, DEFAULT_COLOR};
pub use sort::SortMode;
