// src/ports/projection.rs
//
// Read-only joins from notes to the folders and tags they reference.

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::application::EntityStore;
use crate::constants::{SHORT_DATE_FORMAT, UNTITLED_TITLE};
use crate::domain::{Folder, Note, NoteId, Tag};

/// Tags of `note` in the note's order; ids without a tag are skipped
pub fn tags_of<'a>(store: &'a EntityStore, note: &Note) -> Vec<&'a Tag> {
    note.tags.iter().filter_map(|id| store.tag(id)).collect()
}

/// Folder of `note`, or the builtin folder if the reference is dangling
pub fn folder_of<'a>(store: &'a EntityStore, note: &Note) -> &'a Folder {
    store
        .folder(&note.folder)
        .unwrap_or_else(|| store.builtin_folder())
}

pub fn display_title(note: &Note) -> &str {
    if note.title.trim().is_empty() {
        UNTITLED_TITLE
    } else {
        &note.title
    }
}

/// Abbreviated month and day in local time, e.g. "Mar 5"
pub fn format_short_date(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format(SHORT_DATE_FORMAT)
        .to_string()
}

/// A note joined with its folder and tags, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteCard {
    pub id: NoteId,
    pub title: String,
    pub folder: String,
    pub tags: Vec<TagChip>,
    pub date: String,
    pub updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagChip {
    pub name: String,
    pub color: String,
}

pub fn note_card(store: &EntityStore, note: &Note) -> NoteCard {
    NoteCard {
        id: note.id.clone(),
        title: display_title(note).to_string(),
        folder: folder_of(store, note).name.clone(),
        tags: tags_of(store, note)
            .into_iter()
            .map(|tag| TagChip {
                name: tag.name.clone(),
                color: tag.color.clone(),
            })
            .collect(),
        date: format_short_date(note.updated),
        updated: note.updated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FolderId, NotePatch, TagId};
    use crate::util::testing::ManualClock;
    use chrono::TimeZone;

    #[test]
    fn given_note_with_tags_when_joining_then_returns_tags_in_note_order() {
        let mut store = EntityStore::with_clock(ManualClock::at_millis(0));
        let urgent = store.create_tag("Urgent", "#ffca28").unwrap();
        let todo = store.create_tag("Todo", "#1976d2").unwrap();
        let note = store.create_note(None);
        store
            .update_note(&note.id, NotePatch::new().tags(vec![todo.id.clone(), urgent.id.clone()]))
            .unwrap();
        let note = store.note(&note.id).unwrap();

        let names: Vec<&str> = tags_of(&store, note).iter().map(|t| t.name.as_str()).collect();

        assert_eq!(names, vec!["Todo", "Urgent"]);
    }

    #[test]
    fn given_dangling_references_when_joining_then_skips_and_falls_back() {
        let mut store = EntityStore::with_clock(ManualClock::at_millis(0));
        let mut note = store.create_note(None);
        note.tags = vec![TagId::from("gone")];
        note.folder = FolderId::from("gone");

        assert!(tags_of(&store, &note).is_empty());
        assert!(folder_of(&store, &note).builtin);
    }

    #[test]
    fn given_blank_title_when_displaying_then_shows_untitled() {
        let mut store = EntityStore::with_clock(ManualClock::at_millis(0));
        let mut note = store.create_note(None);
        note.title = "  ".to_string();

        assert_eq!(display_title(&note), "Untitled");
    }

    #[test]
    fn given_midday_timestamp_when_formatting_then_returns_month_and_day() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();

        assert_eq!(format_short_date(ts), "Mar 15");
    }

    #[test]
    fn given_note_when_building_card_then_joins_folder_and_tag_names() {
        let mut store = EntityStore::with_clock(ManualClock::at_millis(0));
        let work = store.create_folder("Work").unwrap();
        let todo = store.create_tag("Todo", "#1976d2").unwrap();
        let note = store.create_note(Some(&work.id));
        store.assign_tag(&note.id, &todo.id).unwrap();
        let note = store.note(&note.id).unwrap();

        let card = note_card(&store, note);

        assert_eq!(card.folder, "Work");
        assert_eq!(card.title, "Untitled");
        assert_eq!(card.tags, vec![TagChip { name: "Todo".into(), color: "#1976d2".into() }]);
    }
}
