//! Application Context
//!
//! Shared state provided via Leptos Context API. Components apply the
//! outcome of their own remote calls through these methods; every local
//! change is an id-keyed splice.

use leptos::prelude::*;

use crate::models::{EditSession, Task};
use crate::store;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    set_tasks: WriteSignal<Vec<Task>>,
    /// Active edit session, if any - read
    pub editing: ReadSignal<Option<EditSession>>,
    /// Active edit session - write
    set_editing: WriteSignal<Option<EditSession>>,
}

impl AppContext {
    pub fn new(
        set_tasks: WriteSignal<Vec<Task>>,
        editing: (ReadSignal<Option<EditSession>>, WriteSignal<Option<EditSession>>),
    ) -> Self {
        Self {
            set_tasks,
            editing: editing.0,
            set_editing: editing.1,
        }
    }

    /// Replace the whole sequence with the service's collection
    pub fn replace_all(&self, tasks: Vec<Task>) {
        self.set_tasks.set(tasks);
    }

    /// Append a freshly created record (or replace a stale copy of it)
    pub fn upsert(&self, task: Task) {
        self.set_tasks.update(|tasks| store::upsert_task(tasks, task));
    }

    /// Swap in the service's representation of an updated record
    pub fn apply_update(&self, task: Task) {
        self.set_tasks.update(|tasks| store::replace_task(tasks, task));
    }

    /// Drop the record with `id`
    pub fn remove(&self, id: u64) {
        self.set_tasks.update(|tasks| store::remove_task(tasks, id));
    }

    /// Start editing a task, unless another edit is already underway
    pub fn begin_edit(&self, id: u64, title: String) {
        if self.editing.get().is_some() {
            return;
        }
        self.set_editing.set(Some(EditSession { id, draft: title }));
    }

    /// Replace the draft text of the active session; no-op without one
    pub fn set_draft(&self, text: String) {
        self.set_editing.update(|session| {
            if let Some(session) = session {
                session.draft = text;
            }
        });
    }

    /// Clear the edit session, keeping the task untouched
    pub fn end_edit(&self) {
        self.set_editing.set(None);
    }
}
