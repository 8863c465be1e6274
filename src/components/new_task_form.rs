//! New Task Form Component
//!
//! Input box and Add button for creating tasks.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::AppContext;
use crate::models::normalize_title;

/// Form for creating new tasks; submitting the form covers the Enter key
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let raw = title.get();
        let Some(trimmed) = normalize_title(&raw) else {
            return;
        };
        let text = trimmed.to_string();

        spawn_local(async move {
            match api::create_task(&text).await {
                Ok(created) => {
                    ctx.upsert(created);
                    // Cleared only once the service has accepted the task
                    set_title.set(String::new());
                }
                Err(error) => tracing::error!(%error, "failed creating task"),
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Add a new task"
                prop:value=move || title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_title.set(input.value());
                }
            />
            <button type="submit" class="add-task-button">"Add"</button>
        </form>
    }
}
