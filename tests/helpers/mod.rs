use notekeeper::application::{EntityStore, NotesSession};
use notekeeper::domain::{FolderId, NoteId, NotePatch, TagId};
use notekeeper::util::testing::ManualClock;

/// Store with a controllable clock
#[allow(dead_code)]
pub struct TestNotebook {
    pub clock: ManualClock,
    pub store: EntityStore,
}

#[allow(dead_code)]
impl TestNotebook {
    pub fn new() -> Self {
        let clock = ManualClock::at_millis(0);
        let store = EntityStore::with_clock(clock.clone());
        Self { clock, store }
    }

    /// Create a note with title and content at a fixed time
    pub fn note_at(&mut self, millis: i64, title: &str, content: &str) -> NoteId {
        self.clock.set_millis(millis);
        let id = self.store.create_note(None).id;
        self.store
            .update_note(&id, NotePatch::new().title(title).content(content))
            .expect("fresh note must accept update");
        id
    }

    pub fn folder(&mut self, name: &str) -> FolderId {
        self.store.create_folder(name).expect("folder name must be free").id
    }

    pub fn tag(&mut self, name: &str) -> TagId {
        self.store.create_tag(name, "#000000").expect("tag name must be free").id
    }

    pub fn into_session(self) -> NotesSession {
        NotesSession::new(self.store)
    }
}

/// Panic with every broken invariant of `store`
#[allow(dead_code)]
pub fn assert_consistent(store: &EntityStore) {
    let violations = store.integrity_violations();
    assert!(violations.is_empty(), "store invariants broken: {violations:?}");
}
