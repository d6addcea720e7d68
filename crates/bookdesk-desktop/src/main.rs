//! Bookdesk Desktop Application
//!
//! Operator dashboard for browsing and filtering vehicle bookings.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod bootstrap_config;
mod components;
mod state;
mod theme;
mod views;

use bookdesk_core::BookingsClient;
use dioxus::desktop::{Config, WindowBuilder};

use crate::bootstrap_config::{load_bootstrap_config, runtime_overrides};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bookdesk_desktop=debug".parse().unwrap())
                .add_directive("bookdesk_core=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Bookdesk...");

    let bootstrap = load_bootstrap_config();
    let (runtime_base_url, runtime_theme) = runtime_overrides();
    let service_config = bootstrap.service_config(runtime_base_url);
    let theme_mode = bootstrap.theme_mode(runtime_theme);
    tracing::info!("Bookings service: {}", service_config.base_url());

    let client = match BookingsClient::new(service_config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create bookings client: {}", e);
            std::process::exit(1);
        }
    };

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Bookdesk")
            .with_resizable(true),
    );

    // The client and theme reach components as explicit root context
    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .with_context(client)
        .with_context(theme_mode)
        .launch(app::App);
}
