// src/application/entity_store.rs
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};

use crate::application::clock::{Clock, SystemClock};
use crate::constants::{DEFAULT_BUILTIN_FOLDER_NAME, UNTITLED_TITLE};
use crate::domain::{
    DomainError, EntityKind, Folder, FolderId, Note, NoteId, NotePatch, Tag, TagId,
};

/// Names and titles the store fills in on its own
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    pub builtin_folder_name: String,
    pub untitled_title: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            builtin_folder_name: DEFAULT_BUILTIN_FOLDER_NAME.to_string(),
            untitled_title: UNTITLED_TITLE.to_string(),
        }
    }
}

/// Owner of all notes, folders and tags.
///
/// Every mutation goes through this type and either applies completely,
/// including its cascade over dependent notes, or returns an error and
/// leaves the store untouched. After every call:
///
/// * each note references an existing folder and only existing tags
/// * exactly one builtin folder exists
/// * folder names and tag names are unique, ignoring case
#[derive(Debug)]
pub struct EntityStore {
    notes: Vec<Note>,
    // Index 0 always holds the builtin folder.
    folders: Vec<Folder>,
    tags: Vec<Tag>,
    settings: StoreSettings,
    clock: Box<dyn Clock>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::with_settings(StoreSettings::default(), Box::new(SystemClock))
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self::with_settings(StoreSettings::default(), Box::new(clock))
    }

    pub fn with_settings(settings: StoreSettings, clock: Box<dyn Clock>) -> Self {
        let builtin = Folder {
            id: FolderId::builtin(),
            name: settings.builtin_folder_name.clone(),
            builtin: true,
        };
        Self {
            notes: Vec::new(),
            folders: vec![builtin],
            tags: Vec::new(),
            settings,
            clock,
        }
    }

    /// Notes in collection order (most recently created first)
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn note(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| &n.id == id)
    }

    pub fn folder(&self, id: &FolderId) -> Option<&Folder> {
        self.folders.iter().find(|f| &f.id == id)
    }

    pub fn tag(&self, id: &TagId) -> Option<&Tag> {
        self.tags.iter().find(|t| &t.id == id)
    }

    pub fn builtin_folder(&self) -> &Folder {
        &self.folders[0]
    }

    pub fn folder_by_name(&self, name: &str) -> Option<&Folder> {
        let wanted = name.trim().to_lowercase();
        self.folders.iter().find(|f| f.name.to_lowercase() == wanted)
    }

    pub fn tag_by_name(&self, name: &str) -> Option<&Tag> {
        let wanted = name.trim().to_lowercase();
        self.tags.iter().find(|t| t.name.to_lowercase() == wanted)
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// Create an untitled, untagged note at the front of the collection.
    ///
    /// An absent or unknown `initial_folder` falls back to the builtin folder.
    #[instrument(level = "debug", skip(self))]
    pub fn create_note(&mut self, initial_folder: Option<&FolderId>) -> Note {
        let folder = match initial_folder {
            Some(id) if self.folder(id).is_some() => id.clone(),
            _ => self.builtin_folder().id.clone(),
        };
        let note = Note {
            id: NoteId::generate(),
            title: self.settings.untitled_title.clone(),
            folder,
            tags: Vec::new(),
            content: String::new(),
            updated: self.clock.now(),
        };
        info!(note_id = %note.id, folder = %note.folder, "Created note");
        self.notes.insert(0, note.clone());
        note
    }

    /// Apply `patch` to a note and refresh its timestamp.
    ///
    /// The patch is rejected as a whole if the note, the target folder or any
    /// of the tags does not exist. Repeated tag ids keep their first position.
    #[instrument(level = "debug", skip(self))]
    pub fn update_note(&mut self, id: &NoteId, patch: NotePatch) -> Result<(), DomainError> {
        if let Some(folder) = &patch.folder {
            if self.folder(folder).is_none() {
                return Err(DomainError::FolderNotFound(folder.clone()));
            }
        }
        let tags = match patch.tags {
            Some(tags) => {
                if let Some(missing) = tags.iter().find(|t| self.tag(t).is_none()) {
                    return Err(DomainError::TagNotFound(missing.clone()));
                }
                Some(dedup_tags(tags))
            }
            None => None,
        };

        let now = self.clock.now();
        let note = self
            .notes
            .iter_mut()
            .find(|n| &n.id == id)
            .ok_or_else(|| DomainError::NoteNotFound(id.clone()))?;

        if let Some(title) = patch.title {
            note.title = title;
        }
        if let Some(content) = patch.content {
            note.content = content;
        }
        if let Some(folder) = patch.folder {
            note.folder = folder;
        }
        if let Some(tags) = tags {
            note.tags = tags;
        }
        note.updated = refreshed(note.updated, now);
        debug!(note_id = %id, "Updated note");
        Ok(())
    }

    /// Remove a note and hand it back
    #[instrument(level = "debug", skip(self))]
    pub fn delete_note(&mut self, id: &NoteId) -> Result<Note, DomainError> {
        let index = self
            .notes
            .iter()
            .position(|n| &n.id == id)
            .ok_or_else(|| DomainError::NoteNotFound(id.clone()))?;
        let note = self.notes.remove(index);
        info!(note_id = %id, "Deleted note");
        Ok(note)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn create_folder(&mut self, name: &str) -> Result<Folder, DomainError> {
        let name = validate_name(
            EntityKind::Folder,
            name,
            self.folders.iter().map(|f| f.name.as_str()),
        )?;
        let folder = Folder {
            id: FolderId::generate(),
            name,
            builtin: false,
        };
        info!(folder_id = %folder.id, name = %folder.name, "Created folder");
        self.folders.push(folder.clone());
        Ok(folder)
    }

    /// Delete a folder and move its notes to the builtin folder.
    ///
    /// Returns the number of notes that were moved.
    #[instrument(level = "debug", skip(self))]
    pub fn delete_folder(&mut self, id: &FolderId) -> Result<usize, DomainError> {
        let index = self
            .folders
            .iter()
            .position(|f| &f.id == id)
            .ok_or_else(|| DomainError::FolderNotFound(id.clone()))?;
        if self.folders[index].builtin {
            return Err(DomainError::BuiltinFolderProtected);
        }

        self.folders.remove(index);
        let builtin = self.builtin_folder().id.clone();
        let mut moved = 0;
        for note in self.notes.iter_mut().filter(|n| &n.folder == id) {
            note.folder = builtin.clone();
            moved += 1;
        }
        info!(folder_id = %id, moved, "Deleted folder");
        Ok(moved)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn create_tag(&mut self, name: &str, color: &str) -> Result<Tag, DomainError> {
        let name = validate_name(EntityKind::Tag, name, self.tags.iter().map(|t| t.name.as_str()))?;
        let tag = Tag {
            id: TagId::generate(),
            name,
            color: color.to_string(),
        };
        info!(tag_id = %tag.id, name = %tag.name, "Created tag");
        self.tags.push(tag.clone());
        Ok(tag)
    }

    /// Delete a tag and strip it from every note.
    ///
    /// Returns the number of notes that carried the tag.
    #[instrument(level = "debug", skip(self))]
    pub fn delete_tag(&mut self, id: &TagId) -> Result<usize, DomainError> {
        let index = self
            .tags
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| DomainError::TagNotFound(id.clone()))?;

        self.tags.remove(index);
        let mut stripped = 0;
        for note in self.notes.iter_mut() {
            let before = note.tags.len();
            note.tags.retain(|t| t != id);
            if note.tags.len() != before {
                stripped += 1;
            }
        }
        info!(tag_id = %id, stripped, "Deleted tag");
        Ok(stripped)
    }

    /// Add a tag to a note. Returns `false` if the note already had it.
    pub fn assign_tag(&mut self, note_id: &NoteId, tag_id: &TagId) -> Result<bool, DomainError> {
        if self.tag(tag_id).is_none() {
            return Err(DomainError::TagNotFound(tag_id.clone()));
        }
        let note = self.note_mut(note_id)?;
        if note.has_tag(tag_id) {
            return Ok(false);
        }
        note.tags.push(tag_id.clone());
        debug!(note_id = %note_id, tag_id = %tag_id, "Assigned tag");
        Ok(true)
    }

    /// Remove a tag from a note. Returns `false` if the note did not have it.
    pub fn remove_tag(&mut self, note_id: &NoteId, tag_id: &TagId) -> Result<bool, DomainError> {
        let note = self.note_mut(note_id)?;
        let before = note.tags.len();
        note.tags.retain(|t| t != tag_id);
        let removed = note.tags.len() != before;
        if removed {
            debug!(note_id = %note_id, tag_id = %tag_id, "Removed tag");
        }
        Ok(removed)
    }

    /// Describe every broken store invariant; empty when the store is consistent.
    pub fn integrity_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();

        let builtin_count = self.folders.iter().filter(|f| f.builtin).count();
        if builtin_count != 1 {
            violations.push(format!("expected one builtin folder, found {builtin_count}"));
        }
        for note in &self.notes {
            if self.folder(&note.folder).is_none() {
                violations.push(format!("note {} references missing folder {}", note.id, note.folder));
            }
            for tag in note.tags.iter().filter(|t| self.tag(t).is_none()) {
                violations.push(format!("note {} references missing tag {}", note.id, tag));
            }
        }
        if let Some(name) = first_duplicate(self.folders.iter().map(|f| f.name.as_str())) {
            violations.push(format!("duplicate folder name '{name}'"));
        }
        if let Some(name) = first_duplicate(self.tags.iter().map(|t| t.name.as_str())) {
            violations.push(format!("duplicate tag name '{name}'"));
        }
        violations
    }

    fn note_mut(&mut self, id: &NoteId) -> Result<&mut Note, DomainError> {
        self.notes
            .iter_mut()
            .find(|n| &n.id == id)
            .ok_or_else(|| DomainError::NoteNotFound(id.clone()))
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

// Timestamps never move backwards, even if the clock does.
fn refreshed(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    previous.max(now)
}

fn validate_name<'a>(
    kind: EntityKind,
    name: &str,
    mut existing: impl Iterator<Item = &'a str>,
) -> Result<String, DomainError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::EmptyName { kind });
    }
    let lowered = name.to_lowercase();
    if existing.any(|other| other.to_lowercase() == lowered) {
        return Err(DomainError::DuplicateName {
            kind,
            name: name.to_string(),
        });
    }
    Ok(name.to_string())
}

fn dedup_tags(tags: Vec<TagId>) -> Vec<TagId> {
    let mut unique: Vec<TagId> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !unique.contains(&tag) {
            unique.push(tag);
        }
    }
    unique
}

fn first_duplicate<'a>(names: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut seen = std::collections::HashSet::new();
    names
        .map(str::to_lowercase)
        .find(|name| !seen.insert(name.clone()))
}
