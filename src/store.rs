//! Task Sequence Operations
//!
//! Splicing helpers for the in-memory task list. Every mutation is keyed
//! by task id, never by a position in the (possibly filtered) rendered
//! view.

use crate::models::{Filter, Task};

/// Append `task`, or replace the record already carrying its id.
///
/// Keeps the sequence free of duplicate ids even if the service hands the
/// same record back twice.
pub fn upsert_task(tasks: &mut Vec<Task>, task: Task) {
    match tasks.iter_mut().find(|t| t.id == task.id) {
        Some(existing) => *existing = task,
        None => tasks.push(task),
    }
}

/// Replace the record with `updated.id` in place; no-op if it is gone
pub fn replace_task(tasks: &mut [Task], updated: Task) {
    if let Some(task) = tasks.iter_mut().find(|t| t.id == updated.id) {
        *task = updated;
    }
}

/// Remove the record with `id` from the sequence
pub fn remove_task(tasks: &mut Vec<Task>, id: u64) {
    tasks.retain(|t| t.id != id);
}

/// Subset of the sequence visible under `filter`, in sequence order
pub fn visible_tasks(tasks: &[Task], filter: Filter) -> Vec<Task> {
    tasks.iter().filter(|t| filter.accepts(t)).cloned().collect()
}
