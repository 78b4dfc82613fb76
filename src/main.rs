//! Shopping List Frontend Entry Point

mod app;
mod components;
mod config;
mod controller;
mod error;
mod models;
mod shopping_list;
mod storage;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if let Err(e) = console_logger::init_logger(config.app_name, config.log_level) {
        web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
    }
    log::info!("[APP] Starting, storage key '{}'", config.storage_key);

    mount_to_body(move || view! { <App config=config /> });
}
