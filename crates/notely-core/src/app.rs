//! Application controller.
//!
//! Owns the note store together with the view state (selected category,
//! search text) and keeps the derived category list in step with the notes.

use crate::error::Result;
use crate::models::{derive_categories, Background, Category, Note, NoteDraft, NoteId};
use crate::query::{NoteFilter, ALL_CATEGORY};
use crate::storage::KeyValueStorage;
use crate::store::{Confirmation, NoteStore};

/// Notes plus the UI state derived from them
#[derive(Debug)]
pub struct NotesApp<S> {
    store: NoteStore<S>,
    filter: NoteFilter,
    categories: Vec<Category>,
}

impl<S: KeyValueStorage> NotesApp<S> {
    /// Load notes from `storage` and start with the `all` category selected
    pub fn new(storage: S) -> Self {
        let store = NoteStore::open(storage);
        let categories = derive_categories(store.notes());
        Self {
            store,
            filter: NoteFilter::default(),
            categories,
        }
    }

    pub fn notes(&self) -> &[Note] {
        self.store.notes()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub const fn filter(&self) -> &NoteFilter {
        &self.filter
    }

    pub fn selected_category(&self) -> &str {
        &self.filter.category
    }

    pub fn search(&self) -> &str {
        &self.filter.search
    }

    pub const fn store(&self) -> &NoteStore<S> {
        &self.store
    }

    /// Notes passing the current category and search filter
    pub fn visible_notes(&self) -> Vec<&Note> {
        self.filter.apply(self.store.notes())
    }

    /// Select a category; unknown values fall back to `all`
    pub fn select_category(&mut self, category: &str) {
        let known = self.categories.iter().any(|c| c.value == category);
        self.filter.category = if known {
            category.to_string()
        } else {
            tracing::debug!("Unknown category '{}', showing all notes", category);
            ALL_CATEGORY.to_string()
        };
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn create_note(&mut self, draft: NoteDraft) -> Result<NoteId> {
        let id = self.store.create(draft)?;
        self.refresh_categories();
        Ok(id)
    }

    pub fn edit_note(&mut self, id: &NoteId, draft: NoteDraft) -> Result<Note> {
        let note = self.store.update(id, draft)?.clone();
        self.refresh_categories();
        Ok(note)
    }

    pub fn delete_note(&mut self, id: &NoteId, confirmation: &impl Confirmation) -> Result<bool> {
        let removed = self.store.delete(id, confirmation)?;
        if removed {
            self.refresh_categories();
        }
        Ok(removed)
    }

    pub fn resolve_id(&self, query: &str) -> Result<NoteId> {
        self.store.resolve_id(query)
    }

    pub fn background(&self) -> Background {
        self.store.background()
    }

    pub fn set_background(&mut self, background: Background) -> Result<()> {
        self.store.set_background(background)
    }

    // A category that disappeared with its last note drops the selection back to `all`.
    fn refresh_categories(&mut self) {
        self.categories = derive_categories(self.store.notes());
        let selected = self.filter.category.clone();
        self.select_category(&selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use pretty_assertions::assert_eq;

    fn draft(title: &str, tags: &[&str]) -> NoteDraft {
        NoteDraft::new(title, "", tags).unwrap()
    }

    fn app() -> NotesApp<MemoryStorage> {
        NotesApp::new(MemoryStorage::new())
    }

    fn visible_titles(app: &NotesApp<MemoryStorage>) -> Vec<String> {
        app.visible_notes().iter().map(|n| n.title.clone()).collect()
    }

    #[test]
    fn categories_follow_mutations() {
        let mut app = app();
        assert_eq!(app.categories().len(), 4);

        let id = app.create_note(draft("Learn Rust", &["rust"])).unwrap();
        assert_eq!(app.categories().len(), 5);
        assert_eq!(app.categories()[4].name, "Rust");

        app.delete_note(&id, &|_: &str| true).unwrap();
        assert_eq!(app.categories().len(), 4);
    }

    #[test]
    fn visible_notes_apply_category_and_search() {
        let mut app = app();
        app.create_note(draft("Dream journal", &["ideas"])).unwrap();
        app.create_note(draft("Buy milk", &["work"])).unwrap();

        app.select_category("work");
        assert_eq!(visible_titles(&app), vec!["Buy milk"]);

        app.select_category("all");
        app.set_search("milk");
        assert_eq!(visible_titles(&app), vec!["Buy milk"]);

        app.set_search("zzz");
        assert!(app.visible_notes().is_empty());
    }

    #[test]
    fn unknown_category_falls_back_to_all() {
        let mut app = app();
        app.select_category("nonexistent");
        assert_eq!(app.selected_category(), ALL_CATEGORY);
    }

    #[test]
    fn selection_resets_when_category_disappears() {
        let mut app = app();
        let id = app.create_note(draft("Temp", &["scratch"])).unwrap();
        app.select_category("scratch");
        assert_eq!(app.selected_category(), "scratch");

        app.edit_note(&id, draft("Temp", &[])).unwrap();
        assert_eq!(app.selected_category(), ALL_CATEGORY);
    }

    #[test]
    fn seed_selection_survives_edits() {
        let mut app = app();
        let id = app.create_note(draft("Plan", &["work"])).unwrap();
        app.select_category("work");
        app.edit_note(&id, draft("Plan", &[])).unwrap();
        assert_eq!(app.selected_category(), "work");
        assert!(app.visible_notes().is_empty());
    }

    #[test]
    fn background_is_persisted_through_store() {
        let mut app = app();
        app.set_background(Background::Sunrise).unwrap();
        assert_eq!(app.background(), Background::Sunrise);
    }
}
