// src/domain/note.rs
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::domain::DomainError;

/// Display color used when a note carries none
pub const DEFAULT_COLOR: &str = "#ffffff";

/// Identifier assigned by the remote store on creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// Some backends hand out numeric ids
impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => NoteId(s),
            RawId::Number(n) => NoteId(n.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "NoteDocument")]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: NoteId,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "reminder_format"
    )]
    pub reminder: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Wire shape as decoded; Mongo-style backends may send `_id`, `id` or both
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NoteDocument {
    #[serde(rename = "_id", default)]
    mongo_id: Option<NoteId>,
    #[serde(default)]
    id: Option<NoteId>,
    title: String,
    content: String,
    #[serde(default)]
    tag: Option<String>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default, with = "reminder_format")]
    reminder: Option<NaiveDateTime>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    pinned: Option<bool>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl TryFrom<NoteDocument> for Note {
    type Error = String;

    fn try_from(doc: NoteDocument) -> Result<Self, Self::Error> {
        let id = doc
            .mongo_id
            .or(doc.id)
            .ok_or_else(|| "missing field `_id`".to_string())?;
        Ok(Note {
            id,
            title: doc.title,
            content: doc.content,
            tag: doc.tag,
            color: doc.color,
            reminder: doc.reminder,
            image: doc.image,
            pinned: doc.pinned,
            created_at: doc.created_at,
        })
    }
}

impl Note {
    pub fn display_color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_COLOR)
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned.unwrap_or(false)
    }

    /// Case-insensitive match over title, content and tag.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self
                .tag
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(needle)
    }
}

/// Request body for create and update
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteInput {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", with = "reminder_format")]
    pub reminder: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
}

impl NoteInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tag: None,
            reminder: None,
            color: Some(DEFAULT_COLOR.to_string()),
            image: None,
            pinned: None,
        }
    }

    /// Title and content must hold more than whitespace
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::Validation("title must not be empty".to_string()));
        }
        if self.content.trim().is_empty() {
            return Err(DomainError::Validation("content must not be empty".to_string()));
        }
        Ok(())
    }
}

impl From<&Note> for NoteInput {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            tag: note.tag.clone(),
            reminder: note.reminder,
            color: Some(note.display_color().to_string()),
            image: note.image.clone(),
            pinned: note.pinned,
        }
    }
}

/// Raw image bytes to upload before a save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Local date-time without timezone normalization.
///
/// Accepts the `datetime-local` input shape (`2025-01-31T09:30`), full
/// seconds with optional fraction, and RFC 3339 (wall clock kept as given).
/// An empty string reads as absent.
pub mod reminder_format {
    use chrono::{DateTime, NaiveDateTime, Timelike};
    use serde::{Deserialize, Deserializer, Serializer};

    const MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";
    const SECOND_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_local());
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, MINUTE_FORMAT))
            .ok()
    }

    pub fn format(value: &NaiveDateTime) -> String {
        if value.second() == 0 && value.nanosecond() == 0 {
            value.format(MINUTE_FORMAT).to_string()
        } else {
            value.format(SECOND_FORMAT).to_string()
        }
    }

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_str(&format(v)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => parse(&s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid reminder: {s}"))),
        }
    }
}
