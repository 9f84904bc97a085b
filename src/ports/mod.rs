// src/ports/mod.rs
pub mod projection;
pub mod text;

pub use projection::{display_title, folder_of, format_short_date, note_card, tags_of, NoteCard};
pub use text::TextPresenter;
