//! Core types for todoview-core.
//!
//! [`Todo`] is the fixed-shape record the rest of the application depends
//! on. It is always produced by the normalizer, never deserialised directly
//! from the wire.

use serde::{Deserialize, Serialize};

/// Placeholder id for a raw record that has no `id` (or a `null` one).
pub const MISSING_ID: &str = "None";

/// A normalised to-do record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Todo {
    /// Raw `id` converted to text, or [`MISSING_ID`].
    pub id: String,
    /// Task description. Empty when the raw value was absent or not a string.
    pub task: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: impl Into<String>, task: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            task: task.into(),
            completed,
        }
    }

    /// `Yes` / `No`, as shown in the Completed column.
    pub fn completed_label(&self) -> &'static str {
        if self.completed {
            "Yes"
        } else {
            "No"
        }
    }

    /// True when the raw record carried no usable id.
    pub fn has_missing_id(&self) -> bool {
        self.id == MISSING_ID
    }
}

impl std::fmt::Display for Todo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} [{}]", self.id, self.task, self.completed_label())
    }
}
