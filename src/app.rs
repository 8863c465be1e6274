//! TaskBoard Application Component
//!
//! Owns all state and the top-level layout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{FilterBar, NewTaskForm, TaskList, ThemeToggle};
use crate::context::AppContext;
use crate::models::{EditSession, Filter, Task};
use crate::theme;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (filter, set_filter) = signal(Filter::All);
    let (editing, set_editing) = signal::<Option<EditSession>>(None);

    // Theme is read from storage once and mirrored to the document
    // before the first paint
    let initial_theme = theme::load();
    theme::apply(initial_theme);
    let (theme, set_theme) = signal(initial_theme);

    // Provide context to all children
    let ctx = AppContext::new(set_tasks, (editing, set_editing));
    provide_context(ctx);

    // Load the task collection on mount. A failure leaves the list empty;
    // the error only reaches the console.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_tasks().await {
                Ok(loaded) => ctx.replace_all(loaded),
                Err(error) => tracing::error!(%error, "failed loading tasks"),
            }
        });
    });

    view! {
        <header class="header">
            <h2>"Task Manager"</h2>
        </header>
        <main class="container">
            <ThemeToggle theme=theme set_theme=set_theme />
            <NewTaskForm />
            <FilterBar filter=filter set_filter=set_filter />
            <TaskList tasks=tasks filter=filter />
        </main>
    }
}
