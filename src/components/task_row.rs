//! Task Row Component
//!
//! A single task in the list. The row has two faces: view mode with a
//! completion checkbox and edit/delete controls, and edit mode with a
//! draft text field and save/cancel controls. Which face shows depends on
//! whether this row owns the active edit session.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, TaskPatch};
use crate::context::AppContext;
use crate::models::Task;

/// A single task row
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = task.id;
    let completed = task.completed;
    let title = task.title.clone();

    let in_edit = move || ctx.editing.get().is_some_and(|session| session.id == id);

    let toggle_completion = move |_| {
        spawn_local(async move {
            let patch = TaskPatch {
                completed: Some(!completed),
                ..Default::default()
            };
            match api::update_task(id, &patch).await {
                Ok(updated) => ctx.apply_update(updated),
                Err(error) => tracing::error!(%error, id, "failed toggling task"),
            }
        });
    };

    let delete = move |_| {
        spawn_local(async move {
            match api::delete_task(id).await {
                Ok(()) => ctx.remove(id),
                Err(error) => tracing::error!(%error, id, "failed deleting task"),
            }
        });
    };

    let save_edit = move |_| {
        let Some(session) = ctx.editing.get() else {
            return;
        };
        spawn_local(async move {
            let patch = TaskPatch {
                title: Some(&session.draft),
                ..Default::default()
            };
            match api::update_task(session.id, &patch).await {
                Ok(updated) => {
                    ctx.apply_update(updated);
                    ctx.end_edit();
                }
                // Session and draft stay alive for a retry or cancel
                Err(error) => {
                    tracing::error!(%error, id = session.id, "failed saving edited title")
                }
            }
        });
    };

    let cancel_edit = move |_| ctx.end_edit();

    view! {
        <li class=move || if completed { "task-row completed" } else { "task-row" }>
            {move || if in_edit() {
                view! {
                    <span class="task-edit">
                        <input
                            type="text"
                            class="edit-input"
                            prop:value=move || {
                                ctx.editing.get().map(|session| session.draft).unwrap_or_default()
                            }
                            on:input=move |ev| ctx.set_draft(event_target_value(&ev))
                        />
                        <button class="save-btn" on:click=save_edit>"Save"</button>
                        <button class="cancel-btn" on:click=cancel_edit>"Cancel"</button>
                    </span>
                }.into_any()
            } else {
                let title_text = title.clone();
                let title_for_edit = title.clone();
                view! {
                    <span class="task-view">
                        <input
                            type="checkbox"
                            checked=completed
                            on:change=toggle_completion
                        />
                        <span class="task-title">{title_text}</span>
                        <button
                            class="edit-btn"
                            on:click=move |_| ctx.begin_edit(id, title_for_edit.clone())
                        >
                            "✎"
                        </button>
                        <button class="delete-btn" on:click=delete>"×"</button>
                    </span>
                }.into_any()
            }}
        </li>
    }
}
