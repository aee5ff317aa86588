//! Task Dashboard Frontend Entry Point

mod api;
mod app;
mod browser;
mod components;
mod config;
mod context;
mod error;
mod models;
mod query;
mod route;
mod state;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();
    tracing::info!("starting task dashboard frontend");
    mount_to_body(App);
}
