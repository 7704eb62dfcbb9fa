//! Post-computation anomaly detection.
//!
//! Runs four independent checks over a fully computed schedule, each
//! producing diagnostics rather than halting at the first find:
//!
//! 1. Isolated tasks — connected to nothing while other tasks exist
//! 2. Convergence — more than one end task must still funnel into the
//!    single latest-finishing task; a tie on the maximum earliest finish
//!    is reported as its own ambiguity instead of being resolved by
//!    input order
//! 3. Dummy tasks carrying zero total float
//! 4. Critical-path contiguity — consecutive zero-float tasks must be
//!    directly linked
//!
//! Any non-empty result invalidates the schedule; the engine never
//! auto-corrects the graph.

use crate::error::Diagnostic;
use crate::graph::TaskGraph;
use crate::scheduler::critical_path::critical_indices;
use crate::scheduler::passes::{Floats, ForwardPass};

/// Detects structural anomalies in a computed schedule.
///
/// Returns every diagnostic found; an empty vector means the schedule is
/// sound and may be surfaced to the caller.
pub fn detect_anomalies(
    graph: &TaskGraph,
    order: &[usize],
    forward: &ForwardPass,
    floats: &Floats,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    check_isolated(graph, &mut diagnostics);
    check_convergence(graph, forward, &mut diagnostics);
    check_dummy_on_critical_path(graph, floats, &mut diagnostics);
    check_path_contiguity(graph, order, floats, &mut diagnostics);

    diagnostics
}

/// A non-dummy task with neither predecessors nor successors, in a set
/// of more than one task, is disconnected from the project.
fn check_isolated(graph: &TaskGraph, diagnostics: &mut Vec<Diagnostic>) {
    if graph.len() <= 1 {
        return;
    }
    for i in 0..graph.len() {
        if !graph.is_dummy(i)
            && graph.predecessors(i).is_empty()
            && graph.successors(i).is_empty()
        {
            diagnostics.push(Diagnostic::isolated_task(graph.id(i)));
        }
    }
}

/// With several end tasks, the one with the maximum earliest finish is
/// the true project end; the rest fail to converge. A tie for the
/// maximum leaves the final task ambiguous.
fn check_convergence(graph: &TaskGraph, forward: &ForwardPass, diagnostics: &mut Vec<Diagnostic>) {
    let ends: Vec<usize> = (0..graph.len())
        .filter(|&i| graph.successors(i).is_empty())
        .collect();
    if ends.len() <= 1 {
        return;
    }

    let max_ef = ends.iter().map(|&i| forward.ef[i]).max().unwrap_or(0);
    let latest: Vec<usize> = ends
        .iter()
        .copied()
        .filter(|&i| forward.ef[i] == max_ef)
        .collect();

    if latest.len() > 1 {
        diagnostics.push(Diagnostic::ambiguous_convergence(
            latest.iter().map(|&i| graph.id(i).to_string()).collect(),
        ));
        return;
    }

    let final_id = graph.id(latest[0]);
    for &i in &ends {
        if i != latest[0] {
            diagnostics.push(Diagnostic::non_converging(graph.id(i), final_id));
        }
    }
}

/// A dummy task with zero total float is load-bearing, which a pure
/// linking task must never be.
fn check_dummy_on_critical_path(
    graph: &TaskGraph,
    floats: &Floats,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for i in 0..graph.len() {
        if graph.is_dummy(i) && floats.total[i] == 0 {
            diagnostics.push(Diagnostic::dummy_on_critical_path(graph.id(i)));
        }
    }
}

/// Consecutive tasks on the zero-float chain must be joined by a direct
/// dependency edge; otherwise the "path" is really several disjoint
/// chains.
fn check_path_contiguity(
    graph: &TaskGraph,
    order: &[usize],
    floats: &Floats,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let critical = critical_indices(graph, order, floats);
    for pair in critical.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if !graph.predecessors(to).contains(&from) {
            diagnostics.push(Diagnostic::disconnected_critical_path(
                graph.id(from),
                graph.id(to),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiagnosticKind;
    use crate::models::TaskInput;
    use crate::scheduler::passes::{backward_pass, compute_floats, forward_pass};

    fn task(id: &str, duration: i64, preds: &[&str]) -> TaskInput {
        let mut t = TaskInput::new(id).with_duration(duration);
        for p in preds {
            t = t.with_predecessor(*p);
        }
        t
    }

    fn detect(tasks: &[TaskInput]) -> Vec<Diagnostic> {
        let graph = TaskGraph::build(tasks).unwrap();
        let order = graph.topological_order().unwrap();
        let forward = forward_pass(&graph, &order);
        let backward = backward_pass(&graph, &order, &forward);
        let floats = compute_floats(&graph, &forward, &backward).unwrap();
        detect_anomalies(&graph, &order, &forward, &floats)
    }

    #[test]
    fn test_clean_chain_has_no_anomalies() {
        let diags = detect(&[task("A", 3, &[]), task("B", 2, &["A"])]);
        assert!(diags.is_empty(), "unexpected: {diags:?}");
    }

    #[test]
    fn test_isolated_task_detected() {
        let diags = detect(&[
            task("A", 3, &[]),
            task("B", 2, &["A"]),
            task("X", 1, &[]),
        ]);
        let isolated: Vec<_> = diags
            .iter()
            .filter(|d| d.kind == DiagnosticKind::IsolatedTask)
            .collect();
        assert_eq!(isolated.len(), 1);
        assert_eq!(isolated[0].task_ids, vec!["X".to_string()]);
    }

    #[test]
    fn test_single_task_is_not_isolated() {
        let diags = detect(&[task("A", 3, &[])]);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_non_converging_names_earlier_finisher() {
        // B finishes at 5, C at 4: C is the stray end task.
        let diags = detect(&[
            task("A", 3, &[]),
            task("B", 2, &["A"]),
            task("C", 1, &["A"]),
        ]);
        let stray: Vec<_> = diags
            .iter()
            .filter(|d| d.kind == DiagnosticKind::NonConvergingEndTask)
            .collect();
        assert_eq!(stray.len(), 1);
        assert_eq!(stray[0].task_ids, vec!["C".to_string()]);
        assert!(stray[0].message.contains("'B'"));
    }

    #[test]
    fn test_tied_end_tasks_are_ambiguous() {
        // B and C both finish at 5.
        let diags = detect(&[
            task("A", 3, &[]),
            task("B", 2, &["A"]),
            task("C", 2, &["A"]),
        ]);
        let ambiguous: Vec<_> = diags
            .iter()
            .filter(|d| d.kind == DiagnosticKind::AmbiguousConvergence)
            .collect();
        assert_eq!(ambiguous.len(), 1);
        assert_eq!(
            ambiguous[0].task_ids,
            vec!["B".to_string(), "C".to_string()]
        );
        // The tie is surfaced, not silently resolved
        assert!(diags
            .iter()
            .all(|d| d.kind != DiagnosticKind::NonConvergingEndTask));
    }

    #[test]
    fn test_dummy_on_critical_path() {
        // A -> L(dummy) -> B with no parallel slack: L carries zero float.
        let diags = detect(&[
            task("A", 2, &[]),
            TaskInput::dummy("L").with_predecessor("A"),
            task("B", 1, &["L"]),
        ]);
        let dummies: Vec<_> = diags
            .iter()
            .filter(|d| d.kind == DiagnosticKind::DummyOnCriticalPath)
            .collect();
        assert_eq!(dummies.len(), 1);
        assert_eq!(dummies[0].task_ids, vec!["L".to_string()]);
    }

    #[test]
    fn test_dummy_off_critical_path_is_fine() {
        // The dummy rides the slack branch: B=5 dominates L -> C=1.
        let diags = detect(&[
            task("A", 2, &[]),
            task("B", 5, &["A"]),
            TaskInput::dummy("L").with_predecessor("A"),
            task("C", 1, &["L", "B"]),
        ]);
        assert!(diags
            .iter()
            .all(|d| d.kind != DiagnosticKind::DummyOnCriticalPath));
    }

    #[test]
    fn test_zero_float_chain_broken_by_dummy_is_not_contiguous() {
        // A -> L(dummy) -> B: the non-dummy chain [A, B] has no direct edge.
        let diags = detect(&[
            task("A", 2, &[]),
            TaskInput::dummy("L").with_predecessor("A"),
            task("B", 1, &["L"]),
        ]);
        assert!(diags
            .iter()
            .any(|d| d.kind == DiagnosticKind::DisconnectedCriticalPath));
    }
}
