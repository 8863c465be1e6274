//! TaskBoard Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod models;
mod store;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    mount_to_body(App);
}
