//! Todo & Catalog Frontend Entry Point

mod app;
mod components;
mod context;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        let recent = rolling_logger::recent_lines();
        if !recent.is_empty() {
            web_sys::console::error_1(&format!("last log lines:\n{}", recent.join("\n")).into());
        }
    }));
    if let Err(e) = rolling_logger::init_logger(log::LevelFilter::Info, rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
