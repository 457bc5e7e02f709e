//! Todos Frontend Entry Point

mod config;
mod logging;
mod store;
mod surface;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::load_config();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    logging::init(config.level_filter());
    if let Err(e) = loaded {
        log::warn!("[CONFIG] {}, using defaults", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
