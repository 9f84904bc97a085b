mod helpers;

use helpers::{assert_consistent, TestNotebook};
use notekeeper::domain::{DomainError, FolderId, NotePatch};

#[test]
fn given_mixed_operations_when_applied_then_invariants_hold_after_each_step() {
    // Arrange
    let mut book = TestNotebook::new();
    let work = book.folder("Work");
    let ideas = book.folder("Ideas");
    let urgent = book.tag("Urgent");
    let todo = book.tag("Todo");
    let a = book.store.create_note(Some(&work)).id;
    let b = book.store.create_note(Some(&ideas)).id;
    let c = book.store.create_note(None).id;

    // Act & Assert
    book.store.assign_tag(&a, &urgent).unwrap();
    book.store.assign_tag(&b, &urgent).unwrap();
    book.store.assign_tag(&b, &todo).unwrap();
    assert_consistent(&book.store);

    book.store.delete_folder(&work).unwrap();
    assert_consistent(&book.store);
    assert_eq!(book.store.note(&a).unwrap().folder, FolderId::builtin());

    book.store.delete_tag(&urgent).unwrap();
    assert_consistent(&book.store);
    assert!(!book.store.note(&a).unwrap().has_tag(&urgent));
    assert_eq!(book.store.note(&b).unwrap().tags, vec![todo.clone()]);

    book.store
        .update_note(&c, NotePatch::new().folder(ideas.clone()).tags(vec![todo.clone()]))
        .unwrap();
    book.store.delete_folder(&ideas).unwrap();
    book.store.delete_tag(&todo).unwrap();
    assert_consistent(&book.store);
    assert!(book
        .store
        .notes()
        .iter()
        .all(|n| n.folder == FolderId::builtin() && n.tags.is_empty()));
}

#[test]
fn given_deleted_folder_when_moving_note_into_it_then_update_rejected() {
    let mut book = TestNotebook::new();
    let work = book.folder("Work");
    let note = book.store.create_note(None).id;
    book.store.delete_folder(&work).unwrap();

    let result = book.store.update_note(&note, NotePatch::new().folder(work.clone()));

    assert_eq!(result, Err(DomainError::FolderNotFound(work)));
    assert_consistent(&book.store);
}

#[test]
fn given_deleted_tag_when_assigning_then_rejected() {
    let mut book = TestNotebook::new();
    let tag = book.tag("Urgent");
    let note = book.store.create_note(None).id;
    book.store.delete_tag(&tag).unwrap();

    assert!(book.store.assign_tag(&note, &tag).is_err());
    assert_consistent(&book.store);
}

#[test]
fn given_builtin_folder_when_deleting_repeatedly_then_always_exactly_one_builtin() {
    let mut book = TestNotebook::new();
    book.folder("Work");

    for _ in 0..3 {
        assert_eq!(
            book.store.delete_folder(&FolderId::builtin()),
            Err(DomainError::BuiltinFolderProtected)
        );
    }

    assert_eq!(book.store.folders().iter().filter(|f| f.builtin).count(), 1);
}

#[test]
fn given_folder_work_when_creating_lowercase_duplicate_then_count_unchanged() {
    // Arrange
    let mut book = TestNotebook::new();
    book.store.create_folder("Work").unwrap();
    let before = book.store.folders().len();

    // Act
    let result = book.store.create_folder("work");

    // Assert
    assert!(matches!(result, Err(DomainError::DuplicateName { .. })));
    assert_eq!(book.store.folders().len(), before);
}

#[test]
fn given_deleted_name_when_recreating_folder_then_allowed_with_new_id() {
    let mut book = TestNotebook::new();
    let first = book.folder("Work");
    book.store.delete_folder(&first).unwrap();

    let second = book.store.create_folder("WORK").unwrap();

    assert_ne!(second.id, first);
    assert_eq!(second.name, "WORK");
}
