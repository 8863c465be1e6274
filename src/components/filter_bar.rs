//! Filter Bar Component
//!
//! Status filter buttons; filtering only changes what is rendered.

use leptos::prelude::*;

use crate::models::Filter;

/// One button per filter, highlighting the active one
#[component]
pub fn FilterBar(
    filter: ReadSignal<Filter>,
    set_filter: WriteSignal<Filter>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            {Filter::all().into_iter().map(|kind| {
                let is_active = move || filter.get() == kind;
                view! {
                    <button
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| set_filter.set(kind)
                    >
                        {kind.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
