// src/domain/tag.rs
use serde::Serialize;

use crate::domain::TagId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    /// Display attribute, stored verbatim
    pub color: String,
}
