//! Domain models for CPM scheduling.
//!
//! Provides the input record ([`TaskInput`]) consumed from the editing
//! layer and the derived output ([`CpmSchedule`], [`ScheduleEntry`])
//! handed to rendering and export layers. Both sides are serde-friendly
//! so the engine can sit behind any transport.

mod schedule;
mod task;

pub use schedule::{CpmSchedule, ScheduleEntry};
pub use task::TaskInput;
