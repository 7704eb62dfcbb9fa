//! Error taxonomy for the scheduling pipeline.
//!
//! Four failure classes, all recoverable at the engine boundary:
//! - [`ScheduleError::Validation`] — malformed input, every violation from
//!   one sweep reported together
//! - [`ScheduleError::Cycle`] — circular dependency, with the offending
//!   ID sequence
//! - [`ScheduleError::Anomaly`] — the computed schedule is structurally
//!   unsound (isolated tasks, non-converging end points, load-bearing
//!   dummy tasks)
//! - [`ScheduleError::Internal`] — an engine invariant failed
//!
//! Aggregated variants carry structured [`Diagnostic`] records so callers
//! can filter and group without parsing the display string.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single structured diagnostic: category, human-readable message, and
/// the task IDs it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Diagnostic category.
    pub kind: DiagnosticKind,
    /// Human-readable description (one line).
    pub message: String,
    /// IDs of the offending tasks, if any.
    pub task_ids: Vec<String>,
}

/// Categories of diagnostics produced by validation and anomaly detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// The task set is empty.
    EmptyTaskSet,
    /// A task has an empty ID.
    MissingId,
    /// Two tasks share the same ID (case-insensitive).
    DuplicateId,
    /// A task has no duration.
    MissingDuration,
    /// A duration is negative, or zero for a non-dummy task.
    InvalidDuration,
    /// A task references a predecessor that doesn't exist.
    UnknownPredecessor,
    /// A task lists itself as a predecessor.
    SelfReference,
    /// No task has an empty predecessor list.
    NoStartTask,
    /// Every task is referenced as a predecessor by some other task.
    NoEndTask,
    /// A task is connected to nothing (no predecessors, no successors).
    IsolatedTask,
    /// An end task does not feed into the final task.
    NonConvergingEndTask,
    /// Multiple end tasks tie for the maximum earliest finish.
    AmbiguousConvergence,
    /// A zero-duration linking task carries zero total float.
    DummyOnCriticalPath,
    /// Consecutive zero-float tasks are not directly linked.
    DisconnectedCriticalPath,
}

impl Diagnostic {
    pub(crate) fn new(
        kind: DiagnosticKind,
        message: impl Into<String>,
        task_ids: Vec<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            task_ids,
        }
    }

    /// Creates an empty-task-set diagnostic.
    pub fn empty_task_set() -> Self {
        Self::new(
            DiagnosticKind::EmptyTaskSet,
            "Task set is empty: add at least one task",
            Vec::new(),
        )
    }

    /// Creates a missing-ID diagnostic. `position` is the zero-based index
    /// in the input collection, used because the task has no usable ID.
    pub fn missing_id(position: usize) -> Self {
        Self::new(
            DiagnosticKind::MissingId,
            format!("Task #{} has an empty ID", position + 1),
            Vec::new(),
        )
    }

    /// Creates a duplicate-ID diagnostic.
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(
            DiagnosticKind::DuplicateId,
            format!("Duplicate task ID '{id}' (IDs are compared case-insensitively)"),
            vec![id],
        )
    }

    /// Creates a missing-duration diagnostic.
    pub fn missing_duration(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(
            DiagnosticKind::MissingDuration,
            format!("Task '{id}' has no duration"),
            vec![id],
        )
    }

    /// Creates an invalid-duration diagnostic.
    pub fn invalid_duration(id: impl Into<String>, duration: i64) -> Self {
        let id = id.into();
        Self::new(
            DiagnosticKind::InvalidDuration,
            format!("Task '{id}' has invalid duration {duration}: non-dummy tasks require a duration of at least 1"),
            vec![id],
        )
    }

    /// Creates an unknown-predecessor diagnostic.
    pub fn unknown_predecessor(id: impl Into<String>, predecessor: impl Into<String>) -> Self {
        let id = id.into();
        let predecessor = predecessor.into();
        Self::new(
            DiagnosticKind::UnknownPredecessor,
            format!("Task '{id}' references unknown predecessor '{predecessor}'"),
            vec![id],
        )
    }

    /// Creates a self-reference diagnostic.
    pub fn self_reference(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(
            DiagnosticKind::SelfReference,
            format!("Task '{id}' lists itself as a predecessor"),
            vec![id],
        )
    }

    /// Creates a no-start-task diagnostic.
    pub fn no_start_task() -> Self {
        Self::new(
            DiagnosticKind::NoStartTask,
            "No start task: at least one task must have no predecessors",
            Vec::new(),
        )
    }

    /// Creates a no-end-task diagnostic.
    pub fn no_end_task() -> Self {
        Self::new(
            DiagnosticKind::NoEndTask,
            "No end task: at least one task must have no successors",
            Vec::new(),
        )
    }

    /// Creates an isolated-task diagnostic.
    pub fn isolated_task(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(
            DiagnosticKind::IsolatedTask,
            format!("Task '{id}' is isolated: it has no predecessors and no successors"),
            vec![id],
        )
    }

    /// Creates a non-converging-end-task diagnostic.
    pub fn non_converging(id: impl Into<String>, final_id: impl Into<String>) -> Self {
        let id = id.into();
        let final_id = final_id.into();
        Self::new(
            DiagnosticKind::NonConvergingEndTask,
            format!("Task '{id}' has no successors but does not converge to the final task '{final_id}'"),
            vec![id],
        )
    }

    /// Creates an ambiguous-convergence diagnostic for end tasks tied on
    /// maximum earliest finish.
    pub fn ambiguous_convergence(ids: Vec<String>) -> Self {
        let list = ids.join(", ");
        Self::new(
            DiagnosticKind::AmbiguousConvergence,
            format!("Multiple end tasks finish at the same time ({list}): the final task is ambiguous"),
            ids,
        )
    }

    /// Creates a dummy-on-critical-path diagnostic.
    pub fn dummy_on_critical_path(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(
            DiagnosticKind::DummyOnCriticalPath,
            format!("Dummy task '{id}' lies on the critical path: linking tasks must never be load-bearing"),
            vec![id],
        )
    }

    /// Creates a disconnected-critical-path diagnostic.
    pub fn disconnected_critical_path(from: impl Into<String>, to: impl Into<String>) -> Self {
        let from = from.into();
        let to = to.into();
        Self::new(
            DiagnosticKind::DisconnectedCriticalPath,
            format!("Critical path is not contiguous: no dependency edge between '{from}' and '{to}'"),
            vec![from, to],
        )
    }
}

fn join_messages(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| d.message.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Errors produced by the scheduling pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Malformed input. Every violation found in one validation sweep is
    /// reported together, one message per line.
    #[error("{}", join_messages(.0))]
    Validation(Vec<Diagnostic>),

    /// Circular dependency. `cycle` holds the offending ID sequence in
    /// discovery order; the first ID is repeated at the end.
    #[error("Circular dependency detected: {}", .cycle.join(" -> "))]
    Cycle {
        /// Cyclic ID sequence, closed (first ID repeated last).
        cycle: Vec<String>,
    },

    /// The schedule was computed but is structurally unsound; it is
    /// withheld from the caller.
    #[error("{}", join_messages(.0))]
    Anomaly(Vec<Diagnostic>),

    /// An engine invariant failed. Indicates a bug in the engine, not in
    /// the caller's input.
    #[error("Internal consistency failure: {0}")]
    Internal(String),
}

impl ScheduleError {
    /// The structured diagnostics carried by aggregated variants, if any.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Validation(d) | Self::Anomaly(d) => d,
            _ => &[],
        }
    }
}
