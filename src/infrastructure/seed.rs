// src/infrastructure/seed.rs
use tracing::info;

use crate::application::EntityStore;
use crate::domain::{DomainError, NotePatch};

/// Populate `store` with the demo folders, tags and notes.
///
/// Notes are created oldest first so the collection ends up with
/// "Welcome Note" in front.
pub fn seed_demo(store: &mut EntityStore) -> Result<(), DomainError> {
    let work = store.create_folder("Work")?;
    store.create_folder("Ideas")?;
    let urgent = store.create_tag("Urgent", "#ffca28")?;
    let todo = store.create_tag("Todo", "#1976d2")?;

    let tasks = store.create_note(Some(&work.id));
    store.update_note(
        &tasks.id,
        NotePatch::new()
            .title("Work tasks")
            .content("Work tasks:\n- Complete proposal\n- Email John")
            .tags(vec![todo.id]),
    )?;

    let welcome = store.create_note(None);
    store.update_note(
        &welcome.id,
        NotePatch::new()
            .title("Welcome Note")
            .content("Welcome to Minimal Notes!\n\nTry editing or creating a note.")
            .tags(vec![urgent.id]),
    )?;

    info!(notes = store.notes().len(), "Seeded demo content");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_store_when_seeding_then_creates_demo_content() {
        let mut store = EntityStore::new();

        seed_demo(&mut store).unwrap();

        let folder_names: Vec<&str> = store.folders().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(folder_names, vec!["All Notes", "Work", "Ideas"]);
        assert_eq!(store.tags().len(), 2);
        assert_eq!(store.notes()[0].title, "Welcome Note");
        assert_eq!(store.notes()[1].title, "Work tasks");
        assert!(store.integrity_violations().is_empty());
    }

    #[test]
    fn given_seeded_store_when_seeding_again_then_rejects_duplicates() {
        let mut store = EntityStore::new();
        seed_demo(&mut store).unwrap();

        let result = seed_demo(&mut store);

        assert!(matches!(result, Err(DomainError::DuplicateName { .. })));
    }
}
