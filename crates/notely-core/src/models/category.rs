//! Category model
//!
//! Categories are never stored. They are derived from the note collection:
//! a fixed seed list followed by every tag that is not already a seed value.

use serde::{Deserialize, Serialize};

use super::Note;
use crate::query::ALL_CATEGORY;

/// Seed categories as `(name, value)` pairs, in display order.
pub const SEED_CATEGORIES: [(&str, &str); 4] = [
    ("All", ALL_CATEGORY),
    ("Personal", "personal"),
    ("Work", "work"),
    ("Ideas", "ideas"),
];

/// A filter label shown in the category list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display label
    pub name: String,
    /// Value matched against note tags
    pub value: String,
}

impl Category {
    /// Category for a tag, with a capitalized display name
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        Self {
            name: capitalize(tag),
            value: tag.to_string(),
        }
    }
}

/// The fixed seed categories
#[must_use]
pub fn seed_categories() -> Vec<Category> {
    SEED_CATEGORIES
        .iter()
        .map(|(name, value)| Category {
            name: (*name).to_string(),
            value: (*value).to_string(),
        })
        .collect()
}

/// Derive the category list for a note collection.
///
/// Seeds come first, then tags in first-encountered order. Empty tags and
/// tags equal to a seed value are skipped.
#[must_use]
pub fn derive_categories(notes: &[Note]) -> Vec<Category> {
    let mut categories = seed_categories();

    for tag in notes.iter().flat_map(|note| note.tags.iter()) {
        if tag.is_empty() || categories.iter().any(|c| c.value == *tag) {
            continue;
        }
        categories.push(Category::from_tag(tag));
    }

    categories
}

fn capitalize(tag: &str) -> String {
    let mut chars = tag.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
