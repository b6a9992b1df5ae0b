pub mod app;
pub mod domain;
pub mod layout;
pub mod pages;
pub mod routes;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let config = shared::config::app_config();
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level);
    console_error_panic_hook::set_once();
    log::info!("storefront starting, api base: {}", config.api_base);

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
