// src/application/note_repository.rs
use tracing::{debug, info, instrument, warn};

use crate::application::note_query;
use crate::application::{KeyValueStore, LocalCache, RefreshOutcome, RemoteStore, RepositoryState};
use crate::constants::DEFAULT_CONTENT_LIMIT;
use crate::domain::{DomainError, Draft, ImagePayload, Note, NoteId, NoteInput, SortMode};
use crate::util::text::apply_limit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    Created,
    Updated,
}

/// Result of a successful save: the note the backend returned plus the
/// follow-up refresh that brought the list in line with server state
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    pub kind: SaveKind,
    pub note: Note,
    pub refresh: RefreshOutcome,
}

/// Reconciles the remote store with the local cache.
///
/// The authoritative list always comes from a fetch: mutations go to the
/// remote store and are followed by [`NoteRepository::refresh`], never by a
/// local insert. A failed mutation leaves the state exactly as it was.
pub struct NoteRepository<R: RemoteStore, S: KeyValueStore> {
    remote: R,
    cache: LocalCache<S>,
    state: RepositoryState,
    content_limit: Option<usize>,
}

impl<R: RemoteStore, S: KeyValueStore> NoteRepository<R, S> {
    pub fn new(remote: R, cache: LocalCache<S>) -> Self {
        Self {
            remote,
            cache,
            state: RepositoryState::default(),
            content_limit: Some(DEFAULT_CONTENT_LIMIT),
        }
    }

    /// `None` disables truncation
    pub fn with_content_limit(mut self, limit: Option<usize>) -> Self {
        self.content_limit = limit;
        self
    }

    pub fn state(&self) -> &RepositoryState {
        &self.state
    }

    pub fn notes(&self) -> &[Note] {
        self.state.notes()
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn remote_mut(&mut self) -> &mut R {
        &mut self.remote
    }

    pub fn cache(&self) -> &LocalCache<S> {
        &self.cache
    }

    pub fn find(&self, id: &NoteId) -> Option<&Note> {
        self.state.notes().iter().find(|n| &n.id == id)
    }

    /// Fetch the list, falling back to the cached snapshot when the remote is down.
    ///
    /// Never fails: an unreachable remote yields [`RefreshOutcome::Degraded`].
    #[instrument(level = "debug", skip(self))]
    pub fn refresh(&mut self) -> RefreshOutcome {
        self.state = std::mem::take(&mut self.state).begin_refresh();

        match self.remote.list() {
            Ok(notes) => {
                if let Err(e) = self.cache.save_snapshot(&notes) {
                    warn!(error = %e, "Failed to mirror notes to local cache");
                }
                info!(count = notes.len(), "Loaded notes from remote store");
                self.state = std::mem::take(&mut self.state).apply_loaded(notes);
            }
            Err(e) => {
                let snapshot = self.cache.load_snapshot().unwrap_or_else(|cache_err| {
                    warn!(error = %cache_err, "Failed to read cached snapshot");
                    None
                });
                warn!(
                    error = %e,
                    cached = snapshot.is_some(),
                    "Remote store unavailable, serving local cache"
                );
                self.state = std::mem::take(&mut self.state).apply_degraded(snapshot, e.to_string());
            }
        }

        self.state.outcome()
    }

    /// Submit the note form: create a note, or replace `existing_id` with
    /// `input` when given. Clears the draft on success.
    ///
    /// Order: validate, upload the image if any, then create/update.
    /// Validation failures make no network call; an upload failure skips
    /// create/update entirely. Content is sent as given; see
    /// [`NoteRepository::limit_content`] for the input-time cap.
    #[instrument(level = "debug", skip(self, input, image), fields(title = %input.title))]
    pub fn save(
        &mut self,
        input: NoteInput,
        image: Option<&ImagePayload>,
        existing_id: Option<&NoteId>,
    ) -> Result<SaveOutcome, DomainError> {
        let outcome = self.submit(input, image, existing_id)?;

        if let Err(e) = self.cache.save_draft(&Draft::default()) {
            warn!(error = %e, "Failed to clear draft after save");
        }
        Ok(outcome)
    }

    fn submit(
        &mut self,
        mut input: NoteInput,
        image: Option<&ImagePayload>,
        existing_id: Option<&NoteId>,
    ) -> Result<SaveOutcome, DomainError> {
        input.validate()?;

        if let Some(image) = image {
            debug!(file_name = %image.file_name, bytes = image.bytes.len(), "Uploading image");
            let url = self
                .remote
                .upload_image(image)
                .map_err(|e| DomainError::UploadFailed(e.to_string()))?;
            input.image = Some(url);
        }

        let (kind, note) = match existing_id {
            Some(id) => (SaveKind::Updated, self.remote.update(id, &input)?),
            None => (SaveKind::Created, self.remote.create(&input)?),
        };
        info!(note_id = %note.id, ?kind, "Saved note");

        let refresh = self.refresh();
        Ok(SaveOutcome { kind, note, refresh })
    }

    /// Delete a note. Callers are expected to have asked the user first.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, id: &NoteId) -> Result<RefreshOutcome, DomainError> {
        self.remote.delete(id)?;
        info!(note_id = %id, "Deleted note");
        Ok(self.refresh())
    }

    /// Flip the pinned flag through a full-field update. The draft and the
    /// stored content are left as they are.
    #[instrument(level = "debug", skip(self))]
    pub fn toggle_pin(&mut self, id: &NoteId) -> Result<SaveOutcome, DomainError> {
        let note = self
            .find(id)
            .ok_or_else(|| DomainError::NoteNotFound(id.clone()))?;
        let mut input = NoteInput::from(note);
        input.pinned = Some(!note.is_pinned());
        self.submit(input, None, Some(id))
    }

    /// Cap freshly typed content at the configured limit
    pub fn limit_content(&self, content: &str) -> String {
        apply_limit(content, self.content_limit)
    }

    /// Write the draft through to the cache; content is capped like typed input
    pub fn set_draft(&mut self, title: &str, content: &str) -> Result<Draft, DomainError> {
        let draft = Draft::new(title, self.limit_content(content));
        self.cache.save_draft(&draft)?;
        Ok(draft)
    }

    pub fn load_draft(&self) -> Result<Option<Draft>, DomainError> {
        self.cache.load_draft()
    }

    /// Pure derived view; see [`note_query::query`]
    pub fn query(&self, search: &str, sort: SortMode) -> Vec<Note> {
        note_query::query(self.state.notes(), search, sort)
    }
}
