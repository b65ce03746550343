//! Ecoleta Frontend Entry Point

mod actions;
mod api;
mod app;
mod browser;
mod components;
mod config;
mod context;
mod error;
mod leaflet;
mod models;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use rolling_logger::LoggerConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    if let Err(e) = rolling_logger::init(LoggerConfig { capacity: config.log_capacity, level }) {
        web_sys::console::error_1(&format!("[Main] Logger already set: {}", e).into());
    }
    log::info!("[Main] Backend at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
