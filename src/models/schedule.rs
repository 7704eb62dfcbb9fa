//! Schedule (result) model.
//!
//! A [`CpmSchedule`] is the complete, validated output of one pipeline
//! run: per-task timings and floats in dependency order, the critical
//! path, and the project duration. It is a read-only derived value; a new
//! computation produces a new schedule.

use serde::{Deserialize, Serialize};

/// A task with its computed timings and floats.
///
/// Invariants on every entry of a returned schedule:
/// `ef = es + duration`, `ls = lf - duration`, `total_float >= 0`,
/// `free_float >= 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Task identifier.
    pub id: String,
    /// Task duration (0 for dummy tasks).
    pub duration: i64,
    /// Predecessor task IDs.
    pub predecessors: Vec<String>,
    /// Whether this is a dummy (linking) task.
    pub is_dummy: bool,
    /// Earliest start.
    pub es: i64,
    /// Earliest finish (`es + duration`).
    pub ef: i64,
    /// Latest start (`lf - duration`).
    pub ls: i64,
    /// Latest finish.
    pub lf: i64,
    /// Total float: slack before the project end date slips (`ls - es`).
    pub total_float: i64,
    /// Free float: slack before any direct successor is delayed.
    pub free_float: i64,
}

impl ScheduleEntry {
    /// Whether this task lies on the critical path.
    #[inline]
    pub fn is_critical(&self) -> bool {
        self.total_float == 0
    }
}

/// A complete CPM schedule.
///
/// Entries are ordered by the topological order used during computation,
/// so every predecessor appears before its dependents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpmSchedule {
    /// Scheduled tasks in dependency order.
    pub entries: Vec<ScheduleEntry>,
    /// Non-dummy zero-total-float task IDs in dependency order.
    pub critical_path: Vec<String>,
    /// Project duration: `max(ef)` over all tasks.
    pub project_duration: i64,
}

impl CpmSchedule {
    /// Finds the entry for a given task ID.
    pub fn entry(&self, id: &str) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Whether the given task is on the critical path.
    pub fn is_critical(&self, id: &str) -> bool {
        self.critical_path.iter().any(|p| p == id)
    }

    /// Entries with no successors (project end tasks).
    pub fn end_tasks(&self) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| {
                !self
                    .entries
                    .iter()
                    .any(|other| other.predecessors.iter().any(|p| p == &e.id))
            })
            .collect()
    }

    /// Number of scheduled tasks.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
