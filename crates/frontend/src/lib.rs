pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;
pub mod usecases;

use wasm_bindgen::prelude::wasm_bindgen;

/// Уровень логов консоли: подробно в debug-сборке, тише в release.
fn console_log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Mounts the society admin console into `<body>`.
#[wasm_bindgen]
pub fn mount_console() {
    _ = console_log::init_with_level(console_log_level());
    console_error_panic_hook::set_once();

    log::info!("society admin console, api at {}", shared::api_utils::api_base());
    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    mount_console();
}
