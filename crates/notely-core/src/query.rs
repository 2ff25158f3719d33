//! Category filtering and text search over the note collection.
//!
//! Matching is plain case-insensitive substring containment. There is no
//! tokenization or ranking, and results keep collection order.

use serde::{Deserialize, Serialize};

use crate::models::Note;

/// Category value that matches every note
pub const ALL_CATEGORY: &str = "all";

/// Current category selection and search text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFilter {
    pub category: String,
    pub search: String,
}

impl Default for NoteFilter {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORY.to_string(),
            search: String::new(),
        }
    }
}

impl NoteFilter {
    #[must_use]
    pub fn new(category: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            search: search.into(),
        }
    }

    /// Check a single note against both conditions
    #[must_use]
    pub fn matches(&self, note: &Note) -> bool {
        matches_category(note, &self.category) && matches_search(note, &self.search)
    }

    /// Notes passing the filter, in collection order
    #[must_use]
    pub fn apply<'a>(&self, notes: &'a [Note]) -> Vec<&'a Note> {
        notes.iter().filter(|note| self.matches(note)).collect()
    }
}

/// Filter `notes` by category and search text
#[must_use]
pub fn filter_notes<'a>(notes: &'a [Note], category: &str, search: &str) -> Vec<&'a Note> {
    NoteFilter::new(category, search).apply(notes)
}

/// `all` matches everything; otherwise a tag or the legacy category must equal it
#[must_use]
pub fn matches_category(note: &Note, category: &str) -> bool {
    category == ALL_CATEGORY
        || note.has_tag(category)
        || note.category.as_deref() == Some(category)
}

/// Blank search matches everything; otherwise title, body or a tag must contain it
#[must_use]
pub fn matches_search(note: &Note, search: &str) -> bool {
    if search.trim().is_empty() {
        return true;
    }

    let needle = search.to_lowercase();
    note.title.to_lowercase().contains(&needle)
        || note.body.to_lowercase().contains(&needle)
        || note
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteDraft;

    fn note(title: &str, body: &str, tags: &[&str]) -> Note {
        Note::new(NoteDraft::new(title, body, tags).unwrap())
    }

    fn sample() -> Vec<Note> {
        vec![
            note("Buy milk", "", &["work"]),
            note("Dream journal", "", &["ideas"]),
        ]
    }

    fn titles(notes: &[&Note]) -> Vec<String> {
        notes.iter().map(|n| n.title.clone()).collect()
    }

    #[test]
    fn category_selects_tagged_notes() {
        let notes = sample();
        assert_eq!(titles(&filter_notes(&notes, "work", "")), vec!["Buy milk"]);
    }

    #[test]
    fn search_within_all() {
        let notes = sample();
        assert_eq!(titles(&filter_notes(&notes, "all", "milk")), vec!["Buy milk"]);
    }

    #[test]
    fn search_without_match_is_empty() {
        let notes = sample();
        assert!(filter_notes(&notes, "all", "zzz").is_empty());
    }

    #[test]
    fn blank_search_matches_everything() {
        let notes = sample();
        assert_eq!(filter_notes(&notes, "all", "   ").len(), 2);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let notes = vec![
            note("Groceries", "Remember the MILK", &[]),
            note("Plans", "", &["milkshake"]),
            note("Other", "nothing", &[]),
        ];
        assert_eq!(
            titles(&filter_notes(&notes, "all", "Milk")),
            vec!["Groceries", "Plans"]
        );
    }

    #[test]
    fn search_text_is_not_trimmed_for_matching() {
        let notes = vec![note("Buy milk", "", &[])];
        assert!(filter_notes(&notes, "all", " milk").len() == 1);
        assert!(filter_notes(&notes, "all", "milk ").is_empty());
    }

    #[test]
    fn legacy_category_field_matches() {
        let mut legacy = note("Old note", "", &[]);
        legacy.category = Some("personal".to_string());
        let notes = vec![legacy, note("New note", "", &["work"])];

        assert_eq!(
            titles(&filter_notes(&notes, "personal", "")),
            vec!["Old note"]
        );
    }

    #[test]
    fn both_conditions_must_pass() {
        let notes = vec![
            note("Buy milk", "", &["work"]),
            note("Buy bread", "", &["personal"]),
        ];
        assert_eq!(titles(&filter_notes(&notes, "personal", "buy")), vec!["Buy bread"]);
        assert!(filter_notes(&notes, "personal", "milk").is_empty());
    }

    #[test]
    fn filter_default_is_all_without_search() {
        let filter = NoteFilter::default();
        assert_eq!(filter.category, ALL_CATEGORY);
        assert_eq!(filter.apply(&sample()).len(), 2);
    }
}
