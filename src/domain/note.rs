// src/domain/note.rs
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{FolderId, NoteId, TagId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub folder: FolderId,
    /// Ordered, without duplicates
    pub tags: Vec<TagId>,
    pub content: String,
    pub updated: DateTime<Utc>,
}

impl Note {
    pub fn has_tag(&self, tag: &TagId) -> bool {
        self.tags.contains(tag)
    }

    /// Case-insensitive substring match over title and content.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}

/// Partial update applied by [`crate::application::EntityStore::update_note`].
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub folder: Option<FolderId>,
    pub tags: Option<Vec<TagId>>,
}

impl NotePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn folder(mut self, folder: FolderId) -> Self {
        self.folder = Some(folder);
        self
    }

    pub fn tags(mut self, tags: Vec<TagId>) -> Self {
        self.tags = Some(tags);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn note(title: &str, content: &str) -> Note {
        Note {
            id: NoteId::from("n1"),
            title: title.to_string(),
            folder: FolderId::builtin(),
            tags: vec![],
            content: content.to_string(),
            updated: Utc.timestamp_millis_opt(0).unwrap(),
        }
    }

    #[rstest]
    #[case("Work tasks", "Complete proposal", "proposal", true)]
    #[case("Work tasks", "Complete Proposal", "proposal", true)]
    #[case("Proposal draft", "", "proposal", true)]
    #[case("Groceries", "milk, eggs", "proposal", false)]
    fn test_matches_text(
        #[case] title: &str,
        #[case] content: &str,
        #[case] needle: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(note(title, content).matches_text(needle), expected);
    }

    #[test]
    fn given_builder_calls_when_building_patch_then_only_set_fields_present() {
        let patch = NotePatch::new().title("Hello").content("World");

        assert_eq!(patch.title.as_deref(), Some("Hello"));
        assert_eq!(patch.content.as_deref(), Some("World"));
        assert!(patch.folder.is_none());
        assert!(patch.tags.is_none());
    }
}
