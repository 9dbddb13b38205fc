use leptos::*;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

/// Browser entry point: installs the panic hook and logger, resolves the
/// API base URL, then mounts the app.
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }
    log::info!("Starting HRMS Lite frontend");

    spawn_local(async move {
        config::init().await;
        #[cfg(target_arch = "wasm32")]
        router::mount_app();
    });
}
