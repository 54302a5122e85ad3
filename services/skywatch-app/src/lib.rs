//! Skywatch Dashboard - Leptos frontend
//!
//! Single-page dashboard for drone monitoring: airspace map, drone list,
//! collision logs and per-drone history.

pub mod api;
pub mod app;
pub mod components;
pub mod error;
pub mod routes;
pub mod shell;
pub mod theme;
pub mod views;

pub use api::{ApiClient, ApiConfig};
pub use app::App;
pub use error::{ApiError, RouteError, ShellError};
pub use routes::{RouteMatch, RouteTable, ViewKind};
pub use shell::{AppShell, Plugin, ShellConfig};
pub use theme::{Theme, ThemePlugin};

/// WASM entry point: build the shell and mount it into the announced element
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Skywatch dashboard starting");

    AppShell::new(ShellConfig::from_document())
        .and_then(|shell| shell.plugin(ThemePlugin::default()).mount())
        .map_err(|e| {
            log::error!("Startup failed: {}", e);
            wasm_bindgen::JsValue::from_str(&e.to_string())
        })
}
