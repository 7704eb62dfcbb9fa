//! Critical path extraction.

use crate::graph::TaskGraph;
use crate::scheduler::passes::Floats;

/// Extracts the critical path: non-dummy zero-total-float task IDs in
/// topological (dependency) order.
///
/// Contiguity of the returned chain is guaranteed by anomaly detection
/// having passed; see [`crate::scheduler::detect_anomalies`].
pub fn extract_critical_path(graph: &TaskGraph, order: &[usize], floats: &Floats) -> Vec<String> {
    order
        .iter()
        .copied()
        .filter(|&i| !graph.is_dummy(i) && floats.total[i] == 0)
        .map(|i| graph.id(i).to_string())
        .collect()
}

/// Indices of the critical-path candidates, same selection as
/// [`extract_critical_path`] but kept as indices for adjacency checks.
pub(crate) fn critical_indices(graph: &TaskGraph, order: &[usize], floats: &Floats) -> Vec<usize> {
    order
        .iter()
        .copied()
        .filter(|&i| !graph.is_dummy(i) && floats.total[i] == 0)
        .collect()
}
