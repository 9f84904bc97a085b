// src/application/filter.rs
use tracing::trace;

use crate::application::EntityStore;
use crate::domain::{FolderId, Note, NoteId, TagId};

/// What the user is currently looking at.
///
/// The builtin folder id in `active_folder` means "show all notes", the same
/// as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub active_folder: Option<FolderId>,
    pub active_tag: Option<TagId>,
    pub search_text: String,
    pub selected_note: Option<NoteId>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_folder: Some(FolderId::builtin()),
            active_tag: None,
            search_text: String::new(),
            selected_note: None,
        }
    }
}

impl FilterState {
    /// Activate a folder; clears the tag filter
    pub fn select_folder(&mut self, folder: FolderId) {
        self.active_folder = Some(folder);
        self.active_tag = None;
    }

    /// Activate a tag; clears the folder filter
    pub fn select_tag(&mut self, tag: TagId) {
        self.active_tag = Some(tag);
        self.active_folder = None;
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// The folder notes are restricted to, if any
    pub fn folder_filter(&self) -> Option<&FolderId> {
        self.active_folder
            .as_ref()
            .filter(|folder| **folder != FolderId::builtin())
    }

    /// Lowercased search needle, `None` when the search box is blank
    pub fn search_needle(&self) -> Option<String> {
        let trimmed = self.search_text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(self.search_text.to_lowercase())
        }
    }
}

/// Derive the ordered note list shown for `filter`.
///
/// Applies the folder, tag and search filters in that order, then sorts by
/// `updated`, newest first. Notes with equal timestamps keep their collection
/// order.
pub fn compute_visible_notes<'a>(store: &'a EntityStore, filter: &FilterState) -> Vec<&'a Note> {
    let folder = filter.folder_filter();
    let needle = filter.search_needle();

    let mut visible: Vec<&Note> = store
        .notes()
        .iter()
        .filter(|note| folder.map_or(true, |f| &note.folder == f))
        .filter(|note| filter.active_tag.as_ref().map_or(true, |t| note.has_tag(t)))
        .filter(|note| needle.as_deref().map_or(true, |q| note.matches_text(q)))
        .collect();

    // `sort_by` is stable
    visible.sort_by(|a, b| b.updated.cmp(&a.updated));
    trace!(total = store.notes().len(), visible = visible.len(), "Computed visible notes");
    visible
}
