// src/application/session.rs
use tracing::{debug, instrument};

use crate::application::{compute_visible_notes, EntityStore, FilterState};
use crate::domain::{DomainError, FolderId, Note, NoteId, NotePatch, TagId};

/// The entry point for front ends.
///
/// Owns the entity store together with the filter and selection state and
/// keeps the two consistent across mutations. Operations whose target no
/// longer exists are silently ignored here, so a pending edit racing a
/// deletion does nothing instead of failing. Methods return whether anything
/// changed.
#[derive(Debug)]
pub struct NotesSession {
    store: EntityStore,
    filter: FilterState,
}

impl NotesSession {
    /// Start a session; the first note of the collection becomes selected
    pub fn new(store: EntityStore) -> Self {
        let filter = FilterState {
            active_folder: Some(store.builtin_folder().id.clone()),
            selected_note: store.notes().first().map(|n| n.id.clone()),
            ..FilterState::default()
        };
        Self { store, filter }
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn visible_notes(&self) -> Vec<&Note> {
        compute_visible_notes(&self.store, &self.filter)
    }

    pub fn selected_note(&self) -> Option<&Note> {
        self.filter
            .selected_note
            .as_ref()
            .and_then(|id| self.store.note(id))
    }

    /// Create a note in the active folder and select it
    #[instrument(level = "debug", skip(self))]
    pub fn create_note(&mut self) -> NoteId {
        let note = self.store.create_note(self.filter.active_folder.as_ref());
        self.filter.selected_note = Some(note.id.clone());
        note.id
    }

    pub fn update_note(&mut self, id: &NoteId, patch: NotePatch) -> bool {
        ignore_rejected("update_note", self.store.update_note(id, patch)).is_some()
    }

    /// Delete a note; if it was selected, select the first remaining note
    #[instrument(level = "debug", skip(self))]
    pub fn delete_note(&mut self, id: &NoteId) -> bool {
        if ignore_rejected("delete_note", self.store.delete_note(id)).is_none() {
            return false;
        }
        if self.filter.selected_note.as_ref() == Some(id) {
            self.filter.selected_note = self.store.notes().first().map(|n| n.id.clone());
            debug!(selected = ?self.filter.selected_note, "Advanced selection");
        }
        true
    }

    /// Create a folder and make it the active one
    pub fn create_folder(&mut self, name: &str) -> Option<FolderId> {
        let folder = ignore_rejected("create_folder", self.store.create_folder(name))?;
        self.filter.active_folder = Some(folder.id.clone());
        Some(folder.id)
    }

    /// Delete a folder; the folder filter falls back to the builtin folder
    pub fn delete_folder(&mut self, id: &FolderId) -> bool {
        if ignore_rejected("delete_folder", self.store.delete_folder(id)).is_none() {
            return false;
        }
        self.filter.active_folder = Some(self.store.builtin_folder().id.clone());
        true
    }

    pub fn create_tag(&mut self, name: &str, color: &str) -> Option<TagId> {
        ignore_rejected("create_tag", self.store.create_tag(name, color)).map(|tag| tag.id)
    }

    /// Delete a tag; the tag filter is cleared
    pub fn delete_tag(&mut self, id: &TagId) -> bool {
        if ignore_rejected("delete_tag", self.store.delete_tag(id)).is_none() {
            return false;
        }
        self.filter.active_tag = None;
        true
    }

    pub fn assign_tag(&mut self, note: &NoteId, tag: &TagId) -> bool {
        ignore_rejected("assign_tag", self.store.assign_tag(note, tag)).unwrap_or(false)
    }

    pub fn remove_tag(&mut self, note: &NoteId, tag: &TagId) -> bool {
        ignore_rejected("remove_tag", self.store.remove_tag(note, tag)).unwrap_or(false)
    }

    /// Remove the tag if the note has it, assign it otherwise
    pub fn toggle_tag(&mut self, note: &NoteId, tag: &TagId) -> bool {
        let has_tag = match self.store.note(note) {
            Some(n) => n.has_tag(tag),
            None => return false,
        };
        if has_tag {
            self.remove_tag(note, tag)
        } else {
            self.assign_tag(note, tag)
        }
    }

    pub fn select_folder(&mut self, id: &FolderId) -> bool {
        if self.store.folder(id).is_none() {
            debug!(folder_id = %id, "Ignoring selection of unknown folder");
            return false;
        }
        self.filter.select_folder(id.clone());
        true
    }

    pub fn select_tag(&mut self, id: &TagId) -> bool {
        if self.store.tag(id).is_none() {
            debug!(tag_id = %id, "Ignoring selection of unknown tag");
            return false;
        }
        self.filter.select_tag(id.clone());
        true
    }

    pub fn set_search(&mut self, text: &str) {
        self.filter.set_search(text);
    }

    pub fn select_note(&mut self, id: &NoteId) -> bool {
        if self.store.note(id).is_none() {
            debug!(note_id = %id, "Ignoring selection of unknown note");
            return false;
        }
        self.filter.selected_note = Some(id.clone());
        true
    }
}

fn ignore_rejected<T>(operation: &str, result: Result<T, DomainError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(operation, %err, "Mutation rejected");
            None
        }
    }
}
