use leptos::view;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::{
    page_data,
    services::{BrowserTimeProvider, ConsoleLogger},
};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod presentation;

/// Entry point: install logging, read page data, mount the storefront.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let config = page_data::load_config();
    domain::logging::init_time_provider(Box::new(BrowserTimeProvider::new()));
    domain::logging::init_logger(Box::new(ConsoleLogger::new(config.min_log_level())));

    let catalog = page_data::load_catalog();
    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!("🛒 Storefront starting with {} products", catalog.len()),
    );

    leptos::mount_to_body(move || view! { <App config catalog/> });
}
