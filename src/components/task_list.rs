//! Task List Component
//!
//! Renders the filtered view of the task sequence.

use leptos::prelude::*;

use crate::models::{Filter, Task};
use crate::store::visible_tasks;
use crate::components::TaskRow;

/// List of task rows visible under the current filter
#[component]
pub fn TaskList(
    tasks: ReadSignal<Vec<Task>>,
    filter: ReadSignal<Filter>,
) -> impl IntoView {
    let visible = move || visible_tasks(&tasks.get(), filter.get());

    view! {
        <ul class="task-list">
            <For
                each=visible
                // Key on the mutable fields too so a toggled or retitled
                // record re-renders its row
                key=|task| (task.id, task.completed, task.title.clone())
                children=move |task| view! { <TaskRow task=task /> }
            />
        </ul>
    }
}
