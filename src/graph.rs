//! Dependency graph structure, cycle detection, and topological ordering.
//!
//! [`TaskGraph`] is an index-based view of a validated task set: task
//! attributes plus predecessor and successor adjacency lists, built once
//! per computation and passed explicitly between pipeline stages.
//!
//! # Algorithms
//!
//! - Cycle detection: three-color depth-first search over the predecessor
//!   relation with an explicit stack, so depth is independent of the call
//!   stack and the cyclic ID sequence can be reconstructed for diagnostics.
//! - Topological sort: Kahn's algorithm with a FIFO queue seeded in input
//!   order, giving a deterministic ordering.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4

use std::collections::{HashMap, VecDeque};

use crate::error::ScheduleError;
use crate::models::TaskInput;

/// An index-based dependency graph over a validated task set.
///
/// Dummy tasks participate in every edge; the dummy flag only matters to
/// later stages (float policy, anomaly checks, path extraction).
#[derive(Debug, Clone)]
pub struct TaskGraph {
    ids: Vec<String>,
    durations: Vec<i64>,
    dummy: Vec<bool>,
    preds: Vec<Vec<usize>>,
    succs: Vec<Vec<usize>>,
}

#[derive(Clone, Copy, PartialEq)]
enum Color {
    White,
    Gray,
    Black,
}

impl TaskGraph {
    /// Builds the graph from a canonical, validated task set.
    ///
    /// # Errors
    /// [`ScheduleError::Internal`] if a duration is absent or a
    /// predecessor fails to resolve; both are guaranteed impossible for
    /// input that passed validation.
    pub fn build(tasks: &[TaskInput]) -> Result<Self, ScheduleError> {
        let index: HashMap<&str, usize> = tasks
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.as_str(), i))
            .collect();

        let mut ids = Vec::with_capacity(tasks.len());
        let mut durations = Vec::with_capacity(tasks.len());
        let mut dummy = Vec::with_capacity(tasks.len());
        let mut preds: Vec<Vec<usize>> = Vec::with_capacity(tasks.len());
        let mut succs: Vec<Vec<usize>> = vec![Vec::new(); tasks.len()];

        for (i, task) in tasks.iter().enumerate() {
            let duration = task.duration.ok_or_else(|| {
                ScheduleError::Internal(format!("task '{}' reached graph build without a duration", task.id))
            })?;

            let mut task_preds = Vec::with_capacity(task.predecessors.len());
            for pred in &task.predecessors {
                let p = *index.get(pred.as_str()).ok_or_else(|| {
                    ScheduleError::Internal(format!(
                        "task '{}' reached graph build with unresolved predecessor '{pred}'",
                        task.id
                    ))
                })?;
                task_preds.push(p);
                succs[p].push(i);
            }

            ids.push(task.id.clone());
            durations.push(duration);
            dummy.push(task.is_dummy);
            preds.push(task_preds);
        }

        Ok(Self {
            ids,
            durations,
            dummy,
            preds,
            succs,
        })
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Task ID at the given index.
    pub fn id(&self, i: usize) -> &str {
        &self.ids[i]
    }

    /// Task duration at the given index.
    pub fn duration(&self, i: usize) -> i64 {
        self.durations[i]
    }

    /// Whether the task at the given index is a dummy.
    pub fn is_dummy(&self, i: usize) -> bool {
        self.dummy[i]
    }

    /// Direct predecessor indices of a task.
    pub fn predecessors(&self, i: usize) -> &[usize] {
        &self.preds[i]
    }

    /// Direct successor indices of a task.
    pub fn successors(&self, i: usize) -> &[usize] {
        &self.succs[i]
    }

    /// Predecessor IDs of a task, in input order.
    pub fn predecessor_ids(&self, i: usize) -> Vec<String> {
        self.preds[i].iter().map(|&p| self.ids[p].clone()).collect()
    }

    /// Detects circular dependencies over the predecessor relation.
    ///
    /// Three-color DFS from every unvisited task. On a back edge the
    /// cyclic sequence is reconstructed from the explicit traversal path,
    /// closed by repeating the entry task at the end. Only the first
    /// cycle found is reported.
    ///
    /// # Errors
    /// [`ScheduleError::Cycle`] with the offending ID sequence.
    pub fn detect_cycle(&self) -> Result<(), ScheduleError> {
        let mut color = vec![Color::White; self.len()];

        for start in 0..self.len() {
            if color[start] != Color::White {
                continue;
            }

            // Explicit DFS stack: (task, next predecessor edge to follow).
            let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
            let mut path: Vec<usize> = vec![start];
            color[start] = Color::Gray;

            while let Some(frame) = stack.last_mut() {
                let node = frame.0;
                if frame.1 < self.preds[node].len() {
                    let next = self.preds[node][frame.1];
                    frame.1 += 1;
                    match color[next] {
                        Color::Gray => {
                            let pos =
                                path.iter().position(|&n| n == next).ok_or_else(|| {
                                    ScheduleError::Internal(
                                        "cycle back edge target missing from traversal path"
                                            .to_string(),
                                    )
                                })?;
                            let mut cycle: Vec<String> = path[pos..]
                                .iter()
                                .map(|&n| self.ids[n].clone())
                                .collect();
                            cycle.push(self.ids[next].clone());
                            return Err(ScheduleError::Cycle { cycle });
                        }
                        Color::White => {
                            color[next] = Color::Gray;
                            path.push(next);
                            stack.push((next, 0));
                        }
                        Color::Black => {}
                    }
                } else {
                    color[node] = Color::Black;
                    path.pop();
                    stack.pop();
                }
            }
        }

        Ok(())
    }

    /// Produces a topological ordering via Kahn's algorithm.
    ///
    /// Every predecessor appears before its dependents. The FIFO queue is
    /// seeded with zero-in-degree tasks in input order, so the result is
    /// deterministic for a given input.
    ///
    /// # Errors
    /// [`ScheduleError::Internal`] if the ordering does not cover every
    /// task, which can only happen if a cycle escaped detection.
    pub fn topological_order(&self) -> Result<Vec<usize>, ScheduleError> {
        let mut in_degree: Vec<usize> = self.preds.iter().map(|p| p.len()).collect();
        let mut queue: VecDeque<usize> =
            (0..self.len()).filter(|&i| in_degree[i] == 0).collect();
        let mut order = Vec::with_capacity(self.len());

        while let Some(node) = queue.pop_front() {
            order.push(node);
            for &succ in &self.succs[node] {
                in_degree[succ] -= 1;
                if in_degree[succ] == 0 {
                    queue.push_back(succ);
                }
            }
        }

        if order.len() != self.len() {
            return Err(ScheduleError::Internal(format!(
                "topological sort covered {} of {} tasks",
                order.len(),
                self.len()
            )));
        }

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, duration: i64, preds: &[&str]) -> TaskInput {
        let mut t = TaskInput::new(id).with_duration(duration);
        for p in preds {
            t = t.with_predecessor(*p);
        }
        t
    }

    fn diamond() -> TaskGraph {
        // A -> B -> D, A -> C -> D
        TaskGraph::build(&[
            task("A", 2, &[]),
            task("B", 3, &["A"]),
            task("C", 5, &["A"]),
            task("D", 1, &["B", "C"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_build_adjacency() {
        let g = diamond();
        assert_eq!(g.len(), 4);
        assert_eq!(g.predecessors(3), &[1, 2]);
        assert_eq!(g.successors(0), &[1, 2]);
        assert!(g.successors(3).is_empty());
        assert_eq!(g.predecessor_ids(3), vec!["B".to_string(), "C".to_string()]);
    }

    #[test]
    fn test_build_rejects_unresolved_predecessor() {
        let err = TaskGraph::build(&[task("A", 1, &["Z"])]).unwrap_err();
        assert!(matches!(err, ScheduleError::Internal(_)));
    }

    #[test]
    fn test_no_cycle_in_diamond() {
        assert!(diamond().detect_cycle().is_ok());
    }

    #[test]
    fn test_cycle_reports_closed_sequence() {
        // A -> B -> C -> A
        let g = TaskGraph::build(&[
            task("A", 1, &["C"]),
            task("B", 1, &["A"]),
            task("C", 1, &["B"]),
        ])
        .unwrap();

        let err = g.detect_cycle().unwrap_err();
        let ScheduleError::Cycle { cycle } = err else {
            panic!("expected cycle error, got {err:?}");
        };
        assert_eq!(cycle.first(), cycle.last());
        for id in ["A", "B", "C"] {
            assert!(cycle.iter().any(|c| c == id), "missing {id} in {cycle:?}");
        }
    }

    #[test]
    fn test_cycle_found_from_any_entry_point() {
        // D hangs off a cycle: D <- A <- B <- A
        let g = TaskGraph::build(&[
            task("D", 1, &["A"]),
            task("A", 1, &["B"]),
            task("B", 1, &["A"]),
        ])
        .unwrap();
        assert!(g.detect_cycle().is_err());
    }

    #[test]
    fn test_topological_order_respects_dependencies() {
        let g = diamond();
        let order = g.topological_order().unwrap();
        assert_eq!(order.len(), 4);

        let position: Vec<usize> = {
            let mut pos = vec![0; 4];
            for (rank, &i) in order.iter().enumerate() {
                pos[i] = rank;
            }
            pos
        };
        for i in 0..g.len() {
            for &p in g.predecessors(i) {
                assert!(position[p] < position[i]);
            }
        }
    }

    #[test]
    fn test_topological_order_deterministic() {
        let first = diamond().topological_order().unwrap();
        let second = diamond().topological_order().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_topological_order_fails_on_cycle() {
        // Cyclic input that skipped detect_cycle must not be truncated.
        let g = TaskGraph::build(&[task("A", 1, &["B"]), task("B", 1, &["A"])]).unwrap();
        let err = g.topological_order().unwrap_err();
        assert!(matches!(err, ScheduleError::Internal(_)));
    }
}
