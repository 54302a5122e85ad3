//! Application shell
//!
//! Builds the root tree once at startup: installs plugins, provides the
//! route table and the API client, then mounts [`App`](crate::App) into the
//! host element.

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;

use crate::api::{default_transport, ApiClient, ApiConfig, Transport};
use crate::error::ShellError;
use crate::routes::RouteTable;

/// Selector of the host element the dashboard mounts into
pub const DEFAULT_MOUNT_SELECTOR: &str = "#app";

/// `<meta name=...>` through which the host document names the mount element id
pub const MOUNT_META_NAME: &str = "skywatch-mount";

/// Selector for a mount element id announced by the host document
pub fn mount_selector_for(mount_id: Option<&str>) -> String {
    match mount_id.map(str::trim) {
        Some(id) if !id.is_empty() => format!("#{}", id),
        _ => DEFAULT_MOUNT_SELECTOR.to_string(),
    }
}

/// Extension installed into the root reactive owner before the tree is built
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    /// Provide context or perform one-time setup
    fn install(&self);
}

/// Static startup configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub mount_selector: String,
    pub api: ApiConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            mount_selector: DEFAULT_MOUNT_SELECTOR.to_string(),
            api: ApiConfig::default(),
        }
    }
}

impl ShellConfig {
    /// Default configuration with the mount target announced by the page
    #[cfg(feature = "csr")]
    pub fn from_document() -> Self {
        let mount_id = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| {
                d.query_selector(&format!("meta[name=\"{}\"]", MOUNT_META_NAME))
                    .ok()
                    .flatten()
            })
            .and_then(|meta| meta.get_attribute("content"));

        Self {
            mount_selector: mount_selector_for(mount_id.as_deref()),
            ..Self::default()
        }
    }
}

/// Root of the dashboard: configuration, plugins, routes and API client
pub struct AppShell {
    config: ShellConfig,
    routes: RouteTable,
    transport: Arc<dyn Transport>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl fmt::Debug for AppShell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppShell")
            .field("config", &self.config)
            .field("routes", &self.routes)
            .field("plugins", &self.plugin_names())
            .finish_non_exhaustive()
    }
}

impl AppShell {
    /// Create a shell with the dashboard route table and default transport
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        Ok(Self {
            config,
            routes: RouteTable::drone_dashboard()?,
            transport: default_transport(),
            plugins: Vec::new(),
        })
    }

    /// Replace the HTTP transport used by the API client
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Register a plugin; plugins install in registration order
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    /// Install plugins, the route table and the API client into the
    /// current reactive owner
    pub fn install(&self) {
        for plugin in &self.plugins {
            log::debug!("Installing plugin {}", plugin.name());
            plugin.install();
        }

        provide_context(self.routes.clone());
        provide_context(ApiClient::new(
            self.config.api.clone(),
            Arc::clone(&self.transport),
        ));

        log::info!(
            "Shell ready: {} routes, API at {}",
            self.routes.len(),
            self.config.api.base_url()
        );
    }

    /// Mount the dashboard into the host element.
    ///
    /// Fails when the mount selector matches nothing in the document.
    #[cfg(feature = "csr")]
    pub fn mount(self) -> Result<(), ShellError> {
        use crate::app::App;
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ShellError::NoWindow)?;
        let selector = self.config.mount_selector.clone();
        let target: web_sys::HtmlElement = document
            .query_selector(&selector)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into().ok())
            .ok_or_else(|| ShellError::MountTargetMissing(selector.clone()))?;

        log::debug!("Mounting dashboard into {}", selector);
        leptos::mount::mount_to(target, move || {
            self.install();
            view! { <App /> }
        })
        .forget();

        Ok(())
    }
}
