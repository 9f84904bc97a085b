// src/application/mod.rs
pub mod clock;
pub mod entity_store;
pub mod filter;
pub mod session;

pub use clock::{Clock, SystemClock};
pub use entity_store::{EntityStore, StoreSettings};
pub use filter::{compute_visible_notes, FilterState};
pub use session::NotesSession;
