// src/domain/folder.rs
use serde::Serialize;

use crate::domain::FolderId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    /// The single folder that means "no folder filter"
    pub builtin: bool,
}
