//! Theme Toggle Component
//!
//! Switches between light and dark, persisting the choice.

use leptos::prelude::*;

use crate::theme::{self, Theme};

/// Button showing the mode the click would switch to
#[component]
pub fn ThemeToggle(
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
) -> impl IntoView {
    let toggle = move |_| {
        let next = theme.get().toggled();
        theme::save(next);
        theme::apply(next);
        set_theme.set(next);
    };

    view! {
        <button
            class="theme-toggle"
            title=move || match theme.get() {
                Theme::Light => "Switch to dark theme",
                Theme::Dark => "Switch to light theme",
            }
            on:click=toggle
        >
            {move || if theme.get() == Theme::Light { "🌙" } else { "☀" }}
        </button>
    }
}
