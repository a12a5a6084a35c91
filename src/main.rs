//! MedVault Frontend Entry Point

mod actions;
mod app;
mod components;
mod config;
mod context;
mod fetch;
mod logging;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    logging::init(config.log_level);
    log::info!("MedVault UI starting, API at {}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
