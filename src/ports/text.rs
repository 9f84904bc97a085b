// src/ports/text.rs
use std::fmt::Write;

use crate::application::NotesSession;
use crate::domain::Note;
use crate::ports::projection::{display_title, folder_of, format_short_date, note_card, tags_of, NoteCard};

/// Renders session state as plain text for the shell
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Numbered list of visible notes; `>` marks the selected one
    pub fn render_list(&self, session: &NotesSession) -> String {
        let visible = session.visible_notes();
        if visible.is_empty() {
            return "No notes found.\n".to_string();
        }

        let selected = session.filter().selected_note.as_ref();
        let mut out = String::new();
        for (index, note) in visible.iter().enumerate() {
            let marker = if selected == Some(&note.id) { '>' } else { ' ' };
            let chips: Vec<String> = tags_of(session.store(), note)
                .iter()
                .map(|tag| format!("#{}", tag.name))
                .collect();
            let _ = writeln!(
                out,
                "{marker}{:>3}. {:<30} {:>6}  {}",
                index + 1,
                display_title(note),
                format_short_date(note.updated),
                chips.join(" ")
            );
        }
        out
    }

    /// Full view of a single note as shown in the editor pane
    pub fn render_note(&self, session: &NotesSession, note: &Note) -> String {
        let store = session.store();
        let tags: Vec<&str> = tags_of(store, note).iter().map(|t| t.name.as_str()).collect();
        let mut out = String::new();
        let _ = writeln!(out, "# {}", display_title(note));
        let _ = writeln!(out, "Folder: {}", folder_of(store, note).name);
        let _ = writeln!(
            out,
            "Tags: {}",
            if tags.is_empty() { "No tags".to_string() } else { tags.join(", ") }
        );
        let _ = writeln!(out, "Updated: {}", format_short_date(note.updated));
        if !note.content.is_empty() {
            let _ = writeln!(out, "\n{}", note.content);
        }
        out
    }

    pub fn render_folders(&self, session: &NotesSession) -> String {
        let active = session.filter().active_folder.as_ref();
        let mut out = String::new();
        for folder in session.store().folders() {
            let marker = if active == Some(&folder.id) { '*' } else { ' ' };
            let _ = writeln!(out, "{marker} {}", folder.name);
        }
        out
    }

    pub fn render_tags(&self, session: &NotesSession) -> String {
        let active = session.filter().active_tag.as_ref();
        let mut out = String::new();
        for tag in session.store().tags() {
            let marker = if active == Some(&tag.id) { '*' } else { ' ' };
            let _ = writeln!(out, "{marker} {} ({})", tag.name, tag.color);
        }
        out
    }

    pub fn cards(&self, session: &NotesSession) -> Vec<NoteCard> {
        session
            .visible_notes()
            .into_iter()
            .map(|note| note_card(session.store(), note))
            .collect()
    }

    pub fn render_json(&self, session: &NotesSession) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.cards(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::EntityStore;
    use crate::domain::NotePatch;
    use crate::util::testing::ManualClock;

    fn session_with_note(title: &str) -> NotesSession {
        let mut session = NotesSession::new(EntityStore::with_clock(ManualClock::at_millis(0)));
        let tag = session.create_tag("Todo", "#1976d2").unwrap();
        let id = session.create_note();
        session.update_note(&id, NotePatch::new().title(title).content("Body text"));
        session.assign_tag(&id, &tag);
        session
    }

    #[test]
    fn given_empty_session_when_rendering_list_then_says_no_notes() {
        let session = NotesSession::new(EntityStore::with_clock(ManualClock::at_millis(0)));

        assert_eq!(TextPresenter::new().render_list(&session), "No notes found.\n");
    }

    #[test]
    fn given_selected_note_when_rendering_list_then_marks_it() {
        let session = session_with_note("Groceries");

        let out = TextPresenter::new().render_list(&session);

        assert!(out.starts_with(">  1. Groceries"));
        assert!(out.contains("#Todo"));
    }

    #[test]
    fn given_note_when_rendering_then_shows_folder_tags_and_content() {
        let session = session_with_note("Groceries");
        let note = session.selected_note().unwrap();

        let out = TextPresenter::new().render_note(&session, note);

        assert!(out.contains("# Groceries"));
        assert!(out.contains("Folder: All Notes"));
        assert!(out.contains("Tags: Todo"));
        assert!(out.contains("Body text"));
    }

    #[test]
    fn given_visible_notes_when_rendering_json_then_contains_cards() {
        let session = session_with_note("Groceries");

        let json = TextPresenter::new().render_json(&session).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed[0]["title"], "Groceries");
        assert_eq!(parsed[0]["folder"], "All Notes");
        assert_eq!(parsed[0]["tags"][0]["name"], "Todo");
    }
}
