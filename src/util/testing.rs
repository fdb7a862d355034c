// src/util/testing.rs

use anyhow::Result;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashSet;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::RemoteStore;
use crate::domain::{DomainError, ImagePayload, Note, NoteId, NoteInput, RemoteOperation};

/// Minimal note for tests; `id` doubles as a stable ordering hint
pub fn sample_note(id: &str, title: &str) -> Note {
    Note {
        id: NoteId::new(id),
        title: title.to_string(),
        content: format!("{title} content"),
        tag: None,
        color: None,
        reminder: None,
        image: None,
        pinned: None,
        created_at: Some(base_time()),
    }
}

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0)
        .single()
        .unwrap_or_default()
}

/// In-memory stand-in for the notes backend
///
/// Behaves like a tiny server: create assigns ids and timestamps, update
/// replaces fields, delete removes. Any operation can be switched to fail,
/// and every attempted call is recorded in order.
///
/// # Examples
///
/// ```
/// use notesync::application::RemoteStore;
/// use notesync::domain::RemoteOperation;
/// use notesync::util::testing::{sample_note, FakeRemoteStore};
///
/// let mut remote = FakeRemoteStore::builder()
///     .with_note(sample_note("a", "Groceries"))
///     .failing(RemoteOperation::Delete)
///     .build();
///
/// assert_eq!(remote.list().unwrap().len(), 1);
/// assert!(remote.delete(&"a".into()).is_err());
/// ```
#[derive(Debug)]
pub struct FakeRemoteStore {
    notes: Vec<Note>,
    failing: HashSet<RemoteOperation>,
    calls: Vec<RemoteOperation>,
    last_input: Option<NoteInput>,
    upload_url: String,
    next_id: u64,
}

impl FakeRemoteStore {
    pub fn builder() -> FakeRemoteStoreBuilder {
        FakeRemoteStoreBuilder::new()
    }

    /// Make `operation` fail from now on
    pub fn fail(&mut self, operation: RemoteOperation) {
        self.failing.insert(operation);
    }

    pub fn recover(&mut self, operation: RemoteOperation) {
        self.failing.remove(&operation);
    }

    pub fn calls(&self) -> &[RemoteOperation] {
        &self.calls
    }

    pub fn call_count(&self, operation: RemoteOperation) -> usize {
        self.calls.iter().filter(|c| **c == operation).count()
    }

    /// Body of the most recent create or update
    pub fn last_input(&self) -> Option<&NoteInput> {
        self.last_input.as_ref()
    }

    pub fn stored(&self) -> &[Note] {
        &self.notes
    }

    fn attempt(&mut self, operation: RemoteOperation) -> Result<(), DomainError> {
        self.calls.push(operation);
        if self.failing.contains(&operation) {
            return Err(DomainError::remote(operation, "connection refused"));
        }
        Ok(())
    }

    fn apply(note: &mut Note, input: &NoteInput) {
        note.title = input.title.clone();
        note.content = input.content.clone();
        note.tag = input.tag.clone();
        note.reminder = input.reminder;
        note.color = input.color.clone();
        note.image = input.image.clone();
        note.pinned = input.pinned;
    }
}

impl RemoteStore for FakeRemoteStore {
    fn list(&mut self) -> Result<Vec<Note>, DomainError> {
        self.attempt(RemoteOperation::List)?;
        Ok(self.notes.clone())
    }

    fn create(&mut self, input: &NoteInput) -> Result<Note, DomainError> {
        self.attempt(RemoteOperation::Create)?;
        self.last_input = Some(input.clone());
        self.next_id += 1;

        let created_at = base_time() + Duration::minutes(self.next_id as i64);
        let mut note = sample_note(&format!("note-{}", self.next_id), &input.title);
        note.created_at = Some(created_at);
        Self::apply(&mut note, input);

        self.notes.push(note.clone());
        Ok(note)
    }

    fn update(&mut self, id: &NoteId, input: &NoteInput) -> Result<Note, DomainError> {
        self.attempt(RemoteOperation::Update)?;
        self.last_input = Some(input.clone());
        let note = self
            .notes
            .iter_mut()
            .find(|n| &n.id == id)
            .ok_or_else(|| DomainError::remote(RemoteOperation::Update, "404 Not Found"))?;
        Self::apply(note, input);
        Ok(note.clone())
    }

    fn delete(&mut self, id: &NoteId) -> Result<(), DomainError> {
        self.attempt(RemoteOperation::Delete)?;
        let before = self.notes.len();
        self.notes.retain(|n| &n.id != id);
        if self.notes.len() == before {
            return Err(DomainError::remote(RemoteOperation::Delete, "404 Not Found"));
        }
        Ok(())
    }

    fn upload_image(&mut self, _image: &ImagePayload) -> Result<String, DomainError> {
        self.attempt(RemoteOperation::Upload)?;
        Ok(self.upload_url.clone())
    }
}

/// Builder for FakeRemoteStore
///
/// Provides a fluent interface for configuring fake behavior.
pub struct FakeRemoteStoreBuilder {
    notes: Vec<Note>,
    failing: HashSet<RemoteOperation>,
    upload_url: String,
}

impl FakeRemoteStoreBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            failing: HashSet::new(),
            upload_url: "https://uploads.example/image.png".to_string(),
        }
    }

    /// Seed a note the backend already holds
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Configure `operation` to fail with RemoteUnavailable
    pub fn failing(mut self, operation: RemoteOperation) -> Self {
        self.failing.insert(operation);
        self
    }

    /// URL returned by successful uploads
    pub fn with_upload_url(mut self, url: &str) -> Self {
        self.upload_url = url.to_string();
        self
    }

    pub fn build(self) -> FakeRemoteStore {
        FakeRemoteStore {
            notes: self.notes,
            failing: self.failing,
            calls: vec![],
            last_input: None,
            upload_url: self.upload_url,
            next_id: 0,
        }
    }
}

impl Default for FakeRemoteStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

/// Crate spans at trace; HTTP stack and mock server only when they complain
const DEFAULT_TEST_FILTER: &str = "notesync=trace,hyper=warn,reqwest=warn,rustls=warn,wiremock=info";

fn setup_test_logging() {
    if tracing::dispatcher::has_been_set() {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));
    let layer = fmt::layer()
        .with_test_writer()
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(filter);

    if let Err(e) = tracing_subscriber::registry().with(layer).try_init() {
        eprintln!("Failed to set up test logging: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[ctor::ctor]
    fn init() {
        init_test_setup().expect("Failed to initialize test setup");
    }

    #[test]
    fn given_seeded_notes_when_listing_then_returns_them_in_order() {
        let mut fake = FakeRemoteStore::builder()
            .with_note(sample_note("a", "First"))
            .with_note(sample_note("b", "Second"))
            .build();

        let notes = fake.list().expect("List should succeed");

        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].id.as_str(), "a");
    }

    #[test]
    fn given_failing_operation_when_called_then_records_call_and_errors() {
        let mut fake = FakeRemoteStore::builder()
            .failing(RemoteOperation::List)
            .build();

        let result = fake.list();

        assert!(matches!(
            result,
            Err(DomainError::RemoteUnavailable {
                operation: RemoteOperation::List,
                ..
            })
        ));
        assert_eq!(fake.calls(), &[RemoteOperation::List]);
    }

    #[test]
    fn given_two_creates_when_listing_then_ids_and_timestamps_increase() {
        let mut fake = FakeRemoteStore::builder().build();

        let first = fake.create(&NoteInput::new("One", "1")).unwrap();
        let second = fake.create(&NoteInput::new("Two", "2")).unwrap();

        assert_ne!(first.id, second.id);
        assert!(second.created_at > first.created_at);
        assert_eq!(fake.stored().len(), 2);
    }

    #[test]
    fn given_missing_note_when_updating_then_errors() {
        let mut fake = FakeRemoteStore::builder().build();

        let result = fake.update(&NoteId::new("nope"), &NoteInput::new("T", "C"));

        assert!(result.is_err());
    }

    #[test]
    fn given_recovered_operation_when_called_then_succeeds() {
        let mut fake = FakeRemoteStore::builder()
            .with_note(sample_note("a", "First"))
            .failing(RemoteOperation::Delete)
            .build();

        fake.recover(RemoteOperation::Delete);

        assert!(fake.delete(&NoteId::new("a")).is_ok());
        assert!(fake.stored().is_empty());
    }
}
