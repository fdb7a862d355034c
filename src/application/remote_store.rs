// src/application/remote_store.rs
use crate::domain::{DomainError, ImagePayload, Note, NoteId, NoteInput};

/// Boundary to the external notes backend.
///
/// Every operation is a single request/response exchange. Failures of any
/// kind are reported as [`DomainError::RemoteUnavailable`] naming the
/// attempted operation. Implementations neither validate nor cache.
pub trait RemoteStore {
    fn list(&mut self) -> Result<Vec<Note>, DomainError>;

    fn create(&mut self, input: &NoteInput) -> Result<Note, DomainError>;

    /// Full-field replace of the note identified by `id`
    fn update(&mut self, id: &NoteId, input: &NoteInput) -> Result<Note, DomainError>;

    fn delete(&mut self, id: &NoteId) -> Result<(), DomainError>;

    /// Upload raw image bytes and return the URL the backend assigned
    fn upload_image(&mut self, image: &ImagePayload) -> Result<String, DomainError>;
}
