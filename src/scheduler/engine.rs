//! Pipeline facade.
//!
//! Wires the stages end to end: normalize, validate, build graph, detect
//! cycles, sort, forward/backward pass, float calculation, anomaly
//! detection, critical path extraction. Fail-fast: the first failing
//! stage aborts the run and no partial schedule ever escapes.

use tracing::debug;

use crate::error::ScheduleError;
use crate::graph::TaskGraph;
use crate::models::{CpmSchedule, ScheduleEntry, TaskInput};
use crate::scheduler::anomaly::detect_anomalies;
use crate::scheduler::critical_path::extract_critical_path;
use crate::scheduler::passes::{backward_pass, compute_floats, forward_pass};
use crate::validation;

/// The CPM scheduling engine.
///
/// Stateless: every call to [`schedule`](Self::schedule) is a pure
/// function from a task set to a schedule or an error, holding nothing
/// between invocations.
///
/// # Example
///
/// ```
/// use cpm_engine::{CpmScheduler, TaskInput};
///
/// let tasks = vec![
///     TaskInput::new("A").with_duration(3),
///     TaskInput::new("B").with_duration(2).with_predecessor("A"),
/// ];
///
/// let schedule = CpmScheduler::new().schedule(&tasks).unwrap();
/// assert_eq!(schedule.project_duration, 5);
/// assert_eq!(schedule.critical_path, vec!["A", "B"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CpmScheduler;

impl CpmScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Computes a full CPM schedule for the given task set.
    ///
    /// The input slice is treated as immutable; all derived structures
    /// are freshly allocated.
    ///
    /// # Errors
    /// - [`ScheduleError::Validation`] for malformed input, with every
    ///   violation from the sweep aggregated
    /// - [`ScheduleError::Cycle`] for circular dependencies
    /// - [`ScheduleError::Anomaly`] when the computed schedule is
    ///   structurally unsound; the schedule is withheld
    /// - [`ScheduleError::Internal`] if an engine invariant failed
    pub fn schedule(&self, tasks: &[TaskInput]) -> Result<CpmSchedule, ScheduleError> {
        debug!(task_count = tasks.len(), "Starting CPM computation");

        let canonical = validation::normalize(tasks);
        validation::validate(&canonical)?;

        let graph = TaskGraph::build(&canonical)?;
        graph.detect_cycle()?;
        let order = graph.topological_order()?;

        let forward = forward_pass(&graph, &order);
        let backward = backward_pass(&graph, &order, &forward);
        let floats = compute_floats(&graph, &forward, &backward)?;

        let anomalies = detect_anomalies(&graph, &order, &forward, &floats);
        if !anomalies.is_empty() {
            debug!(count = anomalies.len(), "Schedule rejected by anomaly detection");
            return Err(ScheduleError::Anomaly(anomalies));
        }

        let critical_path = extract_critical_path(&graph, &order, &floats);

        let entries = order
            .iter()
            .map(|&i| ScheduleEntry {
                id: graph.id(i).to_string(),
                duration: graph.duration(i),
                predecessors: graph.predecessor_ids(i),
                is_dummy: graph.is_dummy(i),
                es: forward.es[i],
                ef: forward.ef[i],
                ls: backward.ls[i],
                lf: backward.lf[i],
                total_float: floats.total[i],
                free_float: floats.free[i],
            })
            .collect();

        debug!(
            project_duration = forward.project_duration,
            critical_tasks = critical_path.len(),
            "Schedule computed"
        );

        Ok(CpmSchedule {
            entries,
            critical_path,
            project_duration: forward.project_duration,
        })
    }
}

/// Computes a schedule with a default [`CpmScheduler`].
pub fn compute_schedule(tasks: &[TaskInput]) -> Result<CpmSchedule, ScheduleError> {
    CpmScheduler::new().schedule(tasks)
}
