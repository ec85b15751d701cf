//! Test builders for `Todo` records and raw payloads.
//!
//! These are for readability in assertions, not production use. They panic
//! on invalid input rather than returning `Result`.

use serde_json::{json, Map, Value};
use todoview_core::Todo;

// ---------------------------------------------------------------------------
// TodoBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for expected [`Todo`] values.
///
/// ```rust
/// let todo = TodoBuilder::new("1").task("Buy milk").done().build();
/// ```
pub struct TodoBuilder {
    id: String,
    task: String,
    completed: bool,
}

impl TodoBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            task: String::new(),
            completed: false,
        }
    }

    /// A record whose source object had no usable id.
    pub fn missing_id() -> Self {
        Self::new(todoview_core::MISSING_ID)
    }

    pub fn task(mut self, task: impl Into<String>) -> Self {
        self.task = task.into();
        self
    }

    pub fn done(mut self) -> Self {
        self.completed = true;
        self
    }

    pub fn build(self) -> Todo {
        Todo::new(self.id, self.task, self.completed)
    }
}

// ---------------------------------------------------------------------------
// Payload builders
// ---------------------------------------------------------------------------

/// Fluent builder for one raw todo object as the server would send it.
#[derive(Default)]
pub struct RawTodoBuilder {
    fields: Map<String, Value>,
}

impl RawTodoBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(self, id: impl Into<Value>) -> Self {
        self.field("id", id)
    }

    pub fn task(self, task: impl Into<Value>) -> Self {
        self.field("task", task)
    }

    pub fn completed(self, completed: impl Into<Value>) -> Self {
        self.field("completed", completed)
    }

    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

/// `n` well-formed raw todos with ids `1..=n`; every third one is completed.
pub fn raw_todos(n: usize) -> Vec<Value> {
    (1..=n)
        .map(|i| {
            RawTodoBuilder::new()
                .id(i)
                .task(format!("task {i}"))
                .completed(i % 3 == 0)
                .build()
        })
        .collect()
}

/// Wrap items in the `{"todos": [...]}` envelope.
pub fn wrapped(items: Vec<Value>) -> Value {
    json!({ "todos": items })
}
