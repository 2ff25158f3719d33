//! Note model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::NoteDraft;
use crate::util::now_timestamp;

/// An opaque note identifier.
///
/// New ids are UUID v7 strings (time-sortable), but any non-empty string read
/// back from storage is accepted as-is so older ids keep round-tripping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Create a new unique note ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form used in list output
    #[must_use]
    pub fn short(&self) -> String {
        self.0.chars().take(13).collect()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(crate::Error::InvalidInput("note id cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// A note in the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Title shown in lists, never empty for notes created through a draft
    pub title: String,
    /// Free text body
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
    /// Lowercase tags in insertion order
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Creation timestamp
    pub created: DateTime<Utc>,
    /// Last update timestamp
    pub updated: DateTime<Utc>,
    /// Single category carried by older records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Older records store `null` where a body or tag list is absent
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Note {
    /// Create a new note from a validated draft
    #[must_use]
    pub fn new(draft: NoteDraft) -> Self {
        Self::with_id(NoteId::new(), draft)
    }

    /// Create a new note from a validated draft using a caller-chosen id
    #[must_use]
    pub fn with_id(id: NoteId, draft: NoteDraft) -> Self {
        let now = now_timestamp();
        Self {
            id,
            title: draft.title,
            body: draft.body,
            tags: draft.tags,
            created: now,
            updated: now,
            category: None,
        }
    }

    /// Replace the editable fields and refresh `updated`.
    ///
    /// `updated` never moves behind `created`.
    pub fn apply(&mut self, draft: NoteDraft) {
        self.title = draft.title;
        self.body = draft.body;
        self.tags = draft.tags;
        self.updated = now_timestamp().max(self.created);
    }

    /// Check whether the note carries `tag`
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
