//! Task input model.
//!
//! A task is a unit of project work with a duration and a set of
//! predecessor dependencies. Dummy tasks are zero-duration synthetic
//! links used only to express a dependency.
//!
//! # Reference
//! Kelley & Walker (1959), "Critical-Path Planning and Scheduling"

use serde::{Deserialize, Serialize};

/// A raw task record as supplied by the editing layer.
///
/// `duration` is explicitly optional: absent, zero, and negative are three
/// distinct cases, resolved at validation rather than coerced. Sparse JSON
/// input deserializes via serde defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInput {
    /// Unique task identifier (case-insensitive uniqueness).
    pub id: String,
    /// Task duration in whole time units. `None` = not yet entered.
    #[serde(default)]
    pub duration: Option<i64>,
    /// IDs of tasks that must finish before this one starts.
    #[serde(default)]
    pub predecessors: Vec<String>,
    /// Marks a zero-duration synthetic linking task.
    #[serde(default)]
    pub is_dummy: bool,
}

impl TaskInput {
    /// Creates a task with the given ID and no duration.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            duration: None,
            predecessors: Vec::new(),
            is_dummy: false,
        }
    }

    /// Creates a dummy (zero-duration linking) task.
    pub fn dummy(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            duration: Some(0),
            predecessors: Vec::new(),
            is_dummy: true,
        }
    }

    /// Sets the duration.
    pub fn with_duration(mut self, duration: i64) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Adds a predecessor.
    pub fn with_predecessor(mut self, id: impl Into<String>) -> Self {
        self.predecessors.push(id.into());
        self
    }

    /// Sets the full predecessor list.
    pub fn with_predecessors(mut self, ids: Vec<String>) -> Self {
        self.predecessors = ids;
        self
    }

    /// Whether this task has any predecessors.
    pub fn has_predecessors(&self) -> bool {
        !self.predecessors.is_empty()
    }
}
