// src/domain/error.rs
use std::fmt;
use thiserror::Error;

use crate::domain::{FolderId, NoteId, TagId};

/// Which named collection a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Folder,
    Tag,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Folder => write!(f, "folder"),
            EntityKind::Tag => write!(f, "tag"),
        }
    }
}

/// Every variant means the requested mutation was not applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),
    #[error("Folder not found: {0}")]
    FolderNotFound(FolderId),
    #[error("Tag not found: {0}")]
    TagNotFound(TagId),
    #[error("A {kind} name must not be empty")]
    EmptyName { kind: EntityKind },
    #[error("A {kind} named '{name}' already exists")]
    DuplicateName { kind: EntityKind, name: String },
    #[error("The builtin folder cannot be deleted")]
    BuiltinFolderProtected,
}

impl DomainError {
    /// Validation failures reject user input; everything else is a missing target.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyName { .. } | DomainError::DuplicateName { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_duplicate_name_error_when_displaying_then_names_kind_and_value() {
        let err = DomainError::DuplicateName {
            kind: EntityKind::Folder,
            name: "Work".to_string(),
        };

        assert_eq!(err.to_string(), "A folder named 'Work' already exists");
        assert!(err.is_validation());
    }

    #[test]
    fn given_not_found_error_when_classifying_then_is_not_validation() {
        let err = DomainError::TagNotFound(TagId::from("urgent"));

        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Tag not found: urgent");
    }
}
