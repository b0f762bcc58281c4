//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Logging (console on web, env_logger natively)
//! - Storage (LocalStorage on web, see `persistence`)
//! - The JS-facing session binding

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Install the platform logger. Safe to call more than once.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("Console logging initialized");
    }
}

/// Install the platform logger. Safe to call more than once.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
