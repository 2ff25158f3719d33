//! Note store: owns the note collection and background selection.
//!
//! Every mutation re-serializes the whole collection into the `notes` key of
//! the injected [`KeyValueStorage`]. The in-memory collection only changes
//! once the write succeeded.

use crate::error::{Error, Result};
use crate::models::{Background, Note, NoteDraft, NoteId};
use crate::storage::KeyValueStorage;

/// Storage key holding the JSON array of notes
pub const NOTES_KEY: &str = "notes";

/// Storage key holding the background identifier
pub const BACKGROUND_KEY: &str = "notesapp-bg";

/// Prompt shown before a note is deleted
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this note?";

/// Asks the user to acknowledge a destructive action
pub trait Confirmation {
    /// Return `true` to proceed
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Storage key receiving the raw `notes` value when part of it could not be read
pub const NOTES_BACKUP_KEY: &str = "notes-unreadable";

/// Read the persisted note collection.
///
/// A missing key yields an empty collection. Unreadable data is logged and
/// treated as absent; records that fail to parse are skipped individually.
pub fn load_notes<S: KeyValueStorage>(storage: &S) -> Vec<Note> {
    read_notes(storage).notes
}

#[derive(Default)]
struct Loaded {
    notes: Vec<Note>,
    /// Raw value to back up before it is overwritten
    unreadable: Option<String>,
}

fn read_notes<S: KeyValueStorage>(storage: &S) -> Loaded {
    let raw = match storage.get(NOTES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Loaded::default(),
        Err(error) => {
            tracing::warn!("Failed to read persisted notes: {}", error);
            return Loaded::default();
        }
    };

    let records = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
        Ok(records) => records,
        Err(error) => {
            tracing::warn!("Ignoring malformed persisted notes: {}", error);
            return Loaded {
                notes: Vec::new(),
                unreadable: Some(raw),
            };
        }
    };

    let total = records.len();
    let notes = records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<Note>(record) {
            Ok(note) => Some(note),
            Err(error) => {
                tracing::warn!("Skipping malformed note record: {}", error);
                None
            }
        })
        .collect::<Vec<_>>();

    let unreadable = (notes.len() < total).then_some(raw);
    Loaded { notes, unreadable }
}

/// The note collection plus its persistent mapping
#[derive(Debug)]
pub struct NoteStore<S> {
    storage: S,
    notes: Vec<Note>,
    unreadable: Option<String>,
}

impl<S: KeyValueStorage> NoteStore<S> {
    /// Open a store and load whatever the storage already holds
    pub fn open(storage: S) -> Self {
        let Loaded { notes, unreadable } = read_notes(&storage);
        tracing::debug!("Loaded {} notes", notes.len());
        Self {
            storage,
            notes,
            unreadable,
        }
    }

    /// Re-read the collection from storage
    pub fn load(&mut self) -> &[Note] {
        let Loaded { notes, unreadable } = read_notes(&self.storage);
        self.notes = notes;
        self.unreadable = unreadable;
        &self.notes
    }

    /// Notes, most recently created first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Get a note by ID
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == *id)
    }

    /// Resolve a full id or a unique id prefix
    pub fn resolve_id(&self, query: &str) -> Result<NoteId> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::InvalidInput("note id cannot be empty".into()));
        }

        if let Some(note) = self.notes.iter().find(|note| note.id.as_str() == query) {
            return Ok(note.id.clone());
        }

        let matches = self
            .notes
            .iter()
            .filter(|note| note.id.as_str().starts_with(query))
            .map(|note| &note.id)
            .collect::<Vec<_>>();

        match matches.as_slice() {
            [] => Err(Error::NotFound(query.to_string())),
            [id] => Ok((*id).clone()),
            _ => Err(Error::AmbiguousId {
                prefix: query.to_string(),
                matches: matches.iter().take(3).map(|id| id.short()).collect(),
            }),
        }
    }

    /// Create a note from a draft and prepend it to the collection
    pub fn create(&mut self, draft: NoteDraft) -> Result<NoteId> {
        let mut id = NoteId::new();
        while self.get(&id).is_some() {
            id = NoteId::new();
        }

        let note = Note::with_id(id.clone(), draft);
        let mut next = Vec::with_capacity(self.notes.len() + 1);
        next.push(note);
        next.extend(self.notes.iter().cloned());

        self.commit(next)?;
        tracing::debug!("Created note {}", id);
        Ok(id)
    }

    /// Replace the editable fields of an existing note
    pub fn update(&mut self, id: &NoteId, draft: NoteDraft) -> Result<&Note> {
        let index = self
            .notes
            .iter()
            .position(|note| note.id == *id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        let mut next = self.notes.clone();
        next[index].apply(draft);

        self.commit(next)?;
        tracing::debug!("Updated note {}", id);
        Ok(&self.notes[index])
    }

    /// Delete a note after confirmation.
    ///
    /// Returns `false` without prompting when the id is unknown, and `false`
    /// when the confirmation is declined.
    pub fn delete(&mut self, id: &NoteId, confirmation: &impl Confirmation) -> Result<bool> {
        let Some(index) = self.notes.iter().position(|note| note.id == *id) else {
            return Ok(false);
        };

        if !confirmation.confirm(DELETE_PROMPT) {
            tracing::debug!("Delete of note {} declined", id);
            return Ok(false);
        }

        let mut next = self.notes.clone();
        next.remove(index);

        self.commit(next)?;
        tracing::debug!("Deleted note {}", id);
        Ok(true)
    }

    /// Active background, falling back to the default for unknown values
    pub fn background(&self) -> Background {
        match self.storage.get(BACKGROUND_KEY) {
            Ok(value) => Background::resolve(value.as_deref()),
            Err(error) => {
                tracing::warn!("Failed to read background selection: {}", error);
                Background::default()
            }
        }
    }

    /// Persist a new background selection
    pub fn set_background(&mut self, background: Background) -> Result<()> {
        self.storage.set(BACKGROUND_KEY, background.as_str())
    }

    /// Borrow the underlying storage
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    fn commit(&mut self, notes: Vec<Note>) -> Result<()> {
        let encoded = serde_json::to_string(&notes)?;
        if let Some(raw) = &self.unreadable {
            self.storage.set(NOTES_BACKUP_KEY, raw)?;
            tracing::warn!("Backed up unreadable notes under `{}`", NOTES_BACKUP_KEY);
        }
        self.storage.set(NOTES_KEY, &encoded)?;
        self.unreadable = None;
        self.notes = notes;
        Ok(())
    }
}
