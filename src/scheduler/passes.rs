//! Forward pass, backward pass, and float calculation.
//!
//! The two temporal passes walk the topological order once each:
//!
//! - Forward: `es = max(ef of predecessors)` (0 for start tasks),
//!   `ef = es + duration`
//! - Backward, in reverse order against `project_duration = max(ef)`:
//!   `lf = min(ls of successors)` (project end for end tasks),
//!   `ls = lf - duration`
//!
//! Floats derive from both passes: total float `ls - es`, free float
//! `min(es of successors) - ef` (0 for end tasks). Free float is taken
//! over **all** direct successors, dummy links included, so a task
//! feeding only a dummy still sees the slack the link consumes.
//!
//! A negative float means the passes contradicted each other and is
//! reported as an internal consistency failure, never clamped.

use crate::error::ScheduleError;
use crate::graph::TaskGraph;

/// Earliest timings from the forward pass.
#[derive(Debug, Clone)]
pub struct ForwardPass {
    /// Earliest start per task index.
    pub es: Vec<i64>,
    /// Earliest finish per task index.
    pub ef: Vec<i64>,
    /// Project duration: `max(ef)` over all tasks.
    pub project_duration: i64,
}

/// Latest timings from the backward pass.
#[derive(Debug, Clone)]
pub struct BackwardPass {
    /// Latest start per task index.
    pub ls: Vec<i64>,
    /// Latest finish per task index.
    pub lf: Vec<i64>,
}

/// Total and free float per task index.
#[derive(Debug, Clone)]
pub struct Floats {
    /// Total float: `ls - es`.
    pub total: Vec<i64>,
    /// Free float: `min(es of successors) - ef`, 0 for end tasks.
    pub free: Vec<i64>,
}

/// Computes earliest start/finish in topological order.
pub fn forward_pass(graph: &TaskGraph, order: &[usize]) -> ForwardPass {
    let mut es = vec![0i64; graph.len()];
    let mut ef = vec![0i64; graph.len()];

    for &i in order {
        // Predecessors are already finished by sort order.
        es[i] = graph
            .predecessors(i)
            .iter()
            .map(|&p| ef[p])
            .max()
            .unwrap_or(0);
        ef[i] = es[i] + graph.duration(i);
    }

    let project_duration = ef.iter().copied().max().unwrap_or(0);
    ForwardPass {
        es,
        ef,
        project_duration,
    }
}

/// Computes latest start/finish in reverse topological order.
pub fn backward_pass(graph: &TaskGraph, order: &[usize], forward: &ForwardPass) -> BackwardPass {
    let mut ls = vec![0i64; graph.len()];
    let mut lf = vec![0i64; graph.len()];

    for &i in order.iter().rev() {
        lf[i] = graph
            .successors(i)
            .iter()
            .map(|&s| ls[s])
            .min()
            .unwrap_or(forward.project_duration);
        ls[i] = lf[i] - graph.duration(i);
    }

    BackwardPass { ls, lf }
}

/// Derives total and free float from the two passes.
///
/// # Errors
/// [`ScheduleError::Internal`] if any float comes out negative.
pub fn compute_floats(
    graph: &TaskGraph,
    forward: &ForwardPass,
    backward: &BackwardPass,
) -> Result<Floats, ScheduleError> {
    let mut total = vec![0i64; graph.len()];
    let mut free = vec![0i64; graph.len()];

    for i in 0..graph.len() {
        total[i] = backward.ls[i] - forward.es[i];
        free[i] = graph
            .successors(i)
            .iter()
            .map(|&s| forward.es[s])
            .min()
            .map_or(0, |earliest| earliest - forward.ef[i]);

        if total[i] < 0 || free[i] < 0 {
            return Err(ScheduleError::Internal(format!(
                "negative float for task '{}': total {}, free {}",
                graph.id(i),
                total[i],
                free[i]
            )));
        }
    }

    Ok(Floats { total, free })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskInput;

    fn task(id: &str, duration: i64, preds: &[&str]) -> TaskInput {
        let mut t = TaskInput::new(id).with_duration(duration);
        for p in preds {
            t = t.with_predecessor(*p);
        }
        t
    }

    fn run(tasks: &[TaskInput]) -> (TaskGraph, Vec<usize>, ForwardPass, BackwardPass, Floats) {
        let graph = TaskGraph::build(tasks).unwrap();
        let order = graph.topological_order().unwrap();
        let forward = forward_pass(&graph, &order);
        let backward = backward_pass(&graph, &order, &forward);
        let floats = compute_floats(&graph, &forward, &backward).unwrap();
        (graph, order, forward, backward, floats)
    }

    #[test]
    fn test_two_task_chain() {
        let (graph, _, fwd, bwd, floats) = run(&[task("A", 3, &[]), task("B", 2, &["A"])]);
        let a = 0;
        let b = 1;
        assert_eq!((fwd.es[a], fwd.ef[a]), (0, 3));
        assert_eq!((bwd.ls[a], bwd.lf[a]), (0, 3));
        assert_eq!((fwd.es[b], fwd.ef[b]), (3, 5));
        assert_eq!((bwd.ls[b], bwd.lf[b]), (3, 5));
        assert_eq!(floats.total, vec![0, 0]);
        assert_eq!(fwd.project_duration, 5);
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_diamond_floats() {
        // A=2 -> {B=3, C=5} -> D=1; slack sits on B.
        let (_, _, fwd, _, floats) = run(&[
            task("A", 2, &[]),
            task("B", 3, &["A"]),
            task("C", 5, &["A"]),
            task("D", 1, &["B", "C"]),
        ]);
        assert_eq!(fwd.project_duration, 8);
        assert_eq!(floats.total, vec![0, 2, 0, 0]);
        // B can slip 2 before delaying D (D.es = 7, B.ef = 5)
        assert_eq!(floats.free[1], 2);
        assert_eq!(floats.free[3], 0);
    }

    #[test]
    fn test_identities_hold() {
        let (graph, _, fwd, bwd, _) = run(&[
            task("A", 2, &[]),
            task("B", 3, &["A"]),
            task("C", 5, &["A"]),
            task("D", 1, &["B", "C"]),
        ]);
        for i in 0..graph.len() {
            assert_eq!(fwd.ef[i], fwd.es[i] + graph.duration(i));
            assert_eq!(bwd.ls[i], bwd.lf[i] - graph.duration(i));
        }
    }

    #[test]
    fn test_end_task_lf_equals_project_duration() {
        let (graph, _, fwd, bwd, _) =
            run(&[task("A", 4, &[]), task("B", 1, &["A"]), task("C", 3, &["A"])]);
        for i in 0..graph.len() {
            if graph.successors(i).is_empty() {
                assert_eq!(bwd.lf[i], fwd.project_duration);
            }
        }
    }

    #[test]
    fn test_free_float_counts_dummy_successors() {
        // A feeds a dummy link into B; the dummy starts as soon as A ends.
        let tasks = vec![
            task("A", 2, &[]),
            TaskInput::dummy("L").with_predecessor("A"),
            task("B", 1, &["L"]),
        ];
        let (_, _, _, _, floats) = run(&tasks);
        assert_eq!(floats.free[0], 0);
    }
}
