//! Knapsack Solver Frontend Entry Point

mod app;
mod catalog;
mod charts;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod export;
mod items;
mod logging;
mod models;
mod notifications;
mod orchestrator;
mod presentation;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    logging::init(config.log_level);
    log::info!("solver service at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
