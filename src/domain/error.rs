// src/domain/error.rs
use std::fmt;
use thiserror::Error;

use crate::domain::NoteId;

/// Remote call that was being attempted when a failure occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteOperation {
    List,
    Create,
    Update,
    Delete,
    Upload,
}

impl fmt::Display for RemoteOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RemoteOperation::List => "list",
            RemoteOperation::Create => "create",
            RemoteOperation::Update => "update",
            RemoteOperation::Delete => "delete",
            RemoteOperation::Upload => "upload",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Remote store unavailable during {operation}: {reason}")]
    RemoteUnavailable {
        operation: RemoteOperation,
        reason: String,
    },
    #[error("Image upload failed: {0}")]
    UploadFailed(String),
    #[error("Authentication failed: invalid username or password")]
    AuthenticationFailed,
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),
    #[error("Cache error: {0}")]
    Cache(String),
    #[error("Config error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn remote(operation: RemoteOperation, reason: impl fmt::Display) -> Self {
        DomainError::RemoteUnavailable {
            operation,
            reason: reason.to_string(),
        }
    }
}
