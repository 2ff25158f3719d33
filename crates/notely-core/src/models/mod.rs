//! Data models for Notely

mod background;
mod category;
mod draft;
mod note;

pub use background::Background;
pub use category::{derive_categories, seed_categories, Category, SEED_CATEGORIES};
pub use draft::{normalize_tags, parse_tags, NoteDraft, MAX_TAG_INPUT_LEN, MAX_TITLE_LEN};
pub use note::{Note, NoteId};
