//! CPM computation stages and the pipeline facade.
//!
//! # Algorithm
//!
//! Classic two-pass Critical Path Method over a topologically sorted
//! dependency graph: a forward pass for earliest timings, a backward
//! pass for latest timings, float derivation, then anomaly screening
//! before the critical path is extracted.
//!
//! [`CpmScheduler`] runs the whole pipeline; the stage functions are
//! exposed for callers that want intermediate results.
//!
//! # References
//!
//! - Kelley & Walker (1959), "Critical-Path Planning and Scheduling"
//! - Moder, Phillips & Davis (1983), "Project Management with CPM, PERT
//!   and Precedence Diagramming"

mod anomaly;
mod critical_path;
mod engine;
mod passes;

pub use anomaly::detect_anomalies;
pub use critical_path::extract_critical_path;
pub use engine::{compute_schedule, CpmScheduler};
pub use passes::{backward_pass, compute_floats, forward_pass, BackwardPass, Floats, ForwardPass};
