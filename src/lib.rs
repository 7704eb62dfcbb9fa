//! Critical Path Method (CPM) scheduling engine.
//!
//! Computes, for a project expressed as a task dependency graph, the
//! earliest/latest start and finish of every task, total and free float,
//! and the critical path. The engine is a pure, stateless pipeline:
//! normalization, structural validation, cycle detection, topological
//! sorting, the two temporal passes, float derivation, anomaly
//! screening, and critical path extraction. Malformed, cyclic,
//! disconnected, and multiply-converging inputs are rejected with
//! structured diagnostics rather than partial results.
//!
//! # Modules
//!
//! - **`models`**: Domain types — [`TaskInput`], [`ScheduleEntry`],
//!   [`CpmSchedule`]
//! - **`validation`**: Normalization and aggregated structural checks
//! - **`graph`**: Index-based dependency graph, cycle detection,
//!   topological ordering
//! - **`scheduler`**: Forward/backward passes, floats, anomaly
//!   detection, critical path, and the [`CpmScheduler`] facade
//! - **`error`**: The [`ScheduleError`] taxonomy and [`Diagnostic`]
//!   records
//!
//! # Example
//!
//! ```
//! use cpm_engine::{compute_schedule, TaskInput};
//!
//! let tasks = vec![
//!     TaskInput::new("A").with_duration(2),
//!     TaskInput::new("B").with_duration(3).with_predecessor("A"),
//!     TaskInput::new("C").with_duration(5).with_predecessor("A"),
//!     TaskInput::new("D")
//!         .with_duration(1)
//!         .with_predecessor("B")
//!         .with_predecessor("C"),
//! ];
//!
//! let schedule = compute_schedule(&tasks).unwrap();
//! assert_eq!(schedule.critical_path, vec!["A", "C", "D"]);
//! assert_eq!(schedule.entry("B").unwrap().total_float, 2);
//! ```
//!
//! # References
//!
//! - Kelley & Walker (1959), "Critical-Path Planning and Scheduling"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4

pub mod error;
pub mod graph;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Diagnostic, DiagnosticKind, ScheduleError};
pub use models::{CpmSchedule, ScheduleEntry, TaskInput};
pub use scheduler::{compute_schedule, CpmScheduler};
