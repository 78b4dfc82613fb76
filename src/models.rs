//! Frontend Models
//!
//! Data structures persisted to local storage.

use serde::{Deserialize, Serialize};

/// A single shopping list entry.
///
/// Serialized as `{"id":1,"label":"milk","isDone":false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u32,
    pub label: String,
    pub is_done: bool,
}

impl Item {
    /// Create a not-yet-bought item
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            is_done: false,
        }
    }
}
