//! Grocery List Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod dialog;
mod feedback;
mod models;
mod present;
mod sequence;
mod store;
mod toast;

use app::App;
use leptos::prelude::*;

fn main() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        console_logger::dump_recent();
    }));
    if let Err(e) = console_logger::init(log::LevelFilter::Debug, console_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("[APP] Logger already set: {}", e).into());
    }
    log::info!("[APP] Starting grocery list");
    mount_to_body(App);
}
