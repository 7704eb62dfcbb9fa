//! Input normalization and structural validation.
//!
//! [`normalize`] coerces raw task records into canonical form (trimmed
//! IDs, dummy durations forced to zero). [`validate`] then checks
//! structural integrity:
//! - Non-empty, unique IDs (case-insensitive comparison)
//! - Valid durations (>= 1 for real tasks, exactly 0 for dummies)
//! - Resolvable, non-self predecessor references
//! - Presence of at least one start task and one end task
//!
//! All violations found in one sweep are reported together so the caller
//! can surface every correction hint at once.

use std::collections::HashSet;

use crate::error::{Diagnostic, ScheduleError};
use crate::models::TaskInput;

/// Produces a canonical copy of the task set.
///
/// Trims whitespace from IDs and predecessor references, and overrides
/// the duration of any dummy task to 0 regardless of the supplied value.
/// The caller's records are left untouched.
pub fn normalize(tasks: &[TaskInput]) -> Vec<TaskInput> {
    tasks
        .iter()
        .map(|task| {
            let mut canonical = task.clone();
            canonical.id = canonical.id.trim().to_string();
            for pred in &mut canonical.predecessors {
                *pred = pred.trim().to_string();
            }
            if canonical.is_dummy {
                canonical.duration = Some(0);
            }
            canonical
        })
        .collect()
}

/// Validates a canonical task set.
///
/// Checks, in order:
/// 1. Each task has a non-empty ID (position used in the message otherwise)
/// 2. No two tasks share an ID under case-insensitive comparison
/// 3. Each non-dummy duration is present and >= 1
/// 4. Every predecessor reference resolves to an existing task
/// 5. No task lists itself as a predecessor
/// 6. At least one task has no predecessors (start task)
/// 7. At least one task is never referenced as a predecessor (end task)
///
/// Checks 1-5 are all evaluated before failing; 6-7 run only once 1-5
/// pass, since an unresolved reference makes them meaningless.
///
/// # Returns
/// `Ok(())` if all checks pass, otherwise a
/// [`ScheduleError::Validation`] aggregating every violation.
pub fn validate(tasks: &[TaskInput]) -> Result<(), ScheduleError> {
    if tasks.is_empty() {
        return Err(ScheduleError::Validation(vec![
            Diagnostic::empty_task_set(),
        ]));
    }

    let mut diagnostics = Vec::new();

    // IDs: presence and case-insensitive uniqueness
    let mut seen: HashSet<String> = HashSet::new();
    for (position, task) in tasks.iter().enumerate() {
        if task.id.is_empty() {
            diagnostics.push(Diagnostic::missing_id(position));
            continue;
        }
        if !seen.insert(task.id.to_lowercase()) {
            diagnostics.push(Diagnostic::duplicate_id(&task.id));
        }
    }

    // Durations: absent, negative, and zero-for-real are distinct cases.
    // Dummy durations are already forced to 0 by the normalizer.
    for task in tasks {
        if task.is_dummy {
            continue;
        }
        match task.duration {
            None => diagnostics.push(Diagnostic::missing_duration(&task.id)),
            Some(d) if d < 1 => diagnostics.push(Diagnostic::invalid_duration(&task.id, d)),
            Some(_) => {}
        }
    }

    // Predecessor references
    let ids: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
    for task in tasks {
        for pred in &task.predecessors {
            if pred == &task.id {
                diagnostics.push(Diagnostic::self_reference(&task.id));
            } else if !ids.contains(pred.as_str()) {
                diagnostics.push(Diagnostic::unknown_predecessor(&task.id, pred));
            }
        }
    }

    if !diagnostics.is_empty() {
        dedupe(&mut diagnostics);
        return Err(ScheduleError::Validation(diagnostics));
    }

    // Start/end existence, only meaningful on a referentially sound set
    if !tasks.iter().any(|t| t.predecessors.is_empty()) {
        diagnostics.push(Diagnostic::no_start_task());
    }
    let referenced: HashSet<&str> = tasks
        .iter()
        .flat_map(|t| t.predecessors.iter().map(|p| p.as_str()))
        .collect();
    if tasks.iter().all(|t| referenced.contains(t.id.as_str())) {
        diagnostics.push(Diagnostic::no_end_task());
    }

    if diagnostics.is_empty() {
        Ok(())
    } else {
        Err(ScheduleError::Validation(diagnostics))
    }
}

/// Drops repeated diagnostics (e.g. the same predecessor listed twice),
/// keeping first-occurrence order.
fn dedupe(diagnostics: &mut Vec<Diagnostic>) {
    let mut seen = HashSet::new();
    diagnostics.retain(|d| seen.insert(d.message.clone()));
}
