// src/domain/mod.rs
pub mod error;
pub mod folder;
pub mod ids;
pub mod note;
pub mod tag;

pub use error::{DomainError, EntityKind};
pub use folder::Folder;
pub use ids::{FolderId, NoteId, TagId};
pub use note::{Note, NotePatch};
pub use tag::Tag;
