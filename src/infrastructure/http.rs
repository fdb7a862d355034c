// src/infrastructure/http.rs
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::application::RemoteStore;
use crate::domain::{DomainError, ImagePayload, Note, NoteId, NoteInput, RemoteOperation};

const NOTES_PATH: &str = "/api/notes";
const UPLOAD_PATH: &str = "/api/upload";
const UPLOAD_FIELD: &str = "image";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    image_url: String,
}

/// REST adapter for the notes backend
#[derive(Debug, Clone)]
pub struct HttpRemoteStore {
    client: Client,
    base_url: String,
}

impl HttpRemoteStore {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("Failed to build HTTP client: {e}")))?;
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| DomainError::Config(format!("Invalid base URL '{base_url}': {e}")))?;
        debug!(%base_url, "Created HTTP remote store");
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `{base}/api/notes/{id}` with the id as a single percent-encoded segment
    fn note_url(&self, operation: RemoteOperation, id: &NoteId) -> Result<Url, DomainError> {
        let mut url =
            Url::parse(&self.url(NOTES_PATH)).map_err(|e| DomainError::remote(operation, e))?;
        url.path_segments_mut()
            .map_err(|_| DomainError::remote(operation, "base URL cannot carry a path"))?
            .push(id.as_str());
        Ok(url)
    }

    fn execute(
        operation: RemoteOperation,
        request: RequestBuilder,
    ) -> Result<reqwest::blocking::Response, DomainError> {
        request
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| DomainError::remote(operation, e))
    }

    fn execute_json<T: DeserializeOwned>(
        operation: RemoteOperation,
        request: RequestBuilder,
    ) -> Result<T, DomainError> {
        Self::execute(operation, request)?
            .json::<T>()
            .map_err(|e| DomainError::remote(operation, format!("invalid response body: {e}")))
    }
}

impl RemoteStore for HttpRemoteStore {
    #[instrument(level = "debug", skip(self))]
    fn list(&mut self) -> Result<Vec<Note>, DomainError> {
        let request = self.client.get(self.url(NOTES_PATH));
        let notes: Vec<Note> = Self::execute_json(RemoteOperation::List, request)?;
        debug!(count = notes.len(), "Fetched notes");
        Ok(notes)
    }

    #[instrument(level = "debug", skip(self, input))]
    fn create(&mut self, input: &NoteInput) -> Result<Note, DomainError> {
        let request = self.client.post(self.url(NOTES_PATH)).json(input);
        Self::execute_json(RemoteOperation::Create, request)
    }

    #[instrument(level = "debug", skip(self, input))]
    fn update(&mut self, id: &NoteId, input: &NoteInput) -> Result<Note, DomainError> {
        let url = self.note_url(RemoteOperation::Update, id)?;
        let request = self.client.put(url).json(input);
        Self::execute_json(RemoteOperation::Update, request)
    }

    #[instrument(level = "debug", skip(self))]
    fn delete(&mut self, id: &NoteId) -> Result<(), DomainError> {
        let url = self.note_url(RemoteOperation::Delete, id)?;
        let request = self.client.delete(url);
        Self::execute(RemoteOperation::Delete, request)?;
        Ok(())
    }

    #[instrument(level = "debug", skip(self, image), fields(file_name = %image.file_name))]
    fn upload_image(&mut self, image: &ImagePayload) -> Result<String, DomainError> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(guess_mime(&image.file_name))
            .map_err(|e| DomainError::remote(RemoteOperation::Upload, e))?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let request = self.client.post(self.url(UPLOAD_PATH)).multipart(form);
        let response: UploadResponse = Self::execute_json(RemoteOperation::Upload, request)?;
        info!(url = %response.image_url, "Uploaded image");
        Ok(response.image_url)
    }
}

fn guess_mime(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
