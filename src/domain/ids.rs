// src/domain/ids.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::constants::BUILTIN_FOLDER_ID;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Allocate a fresh random identifier
            pub fn generate() -> Self {
                Self(Uuid::new_v4().simple().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`crate::domain::Note`]
    NoteId
);
entity_id!(
    /// Identifier of a [`crate::domain::Folder`]
    FolderId
);
entity_id!(
    /// Identifier of a [`crate::domain::Tag`]
    TagId
);

impl FolderId {
    /// The fixed id of the "show all notes" folder
    pub fn builtin() -> Self {
        Self(BUILTIN_FOLDER_ID.to_string())
    }
}
