//! notely-core - Core library for Notely
//!
//! This crate contains the note models, the key/value persistence layer, the
//! note store, and the category/search queries shared by every Notely front end.

pub mod app;
pub mod error;
pub mod export;
pub mod models;
pub mod query;
pub mod storage;
pub mod store;
pub mod util;

pub use app::NotesApp;
pub use error::{Error, Result};
pub use models::{Background, Category, Note, NoteDraft, NoteId};
pub use store::NoteStore;
