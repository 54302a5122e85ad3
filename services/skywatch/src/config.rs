//! Configuration types for the skywatch host service

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub shell: ShellDocumentConfig,
}

/// Listener and static asset settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the compiled frontend; assets are served from its `pkg` folder
    #[serde(default = "default_site_root")]
    pub site_root: PathBuf,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            site_root: default_site_root(),
            title: default_title(),
        }
    }
}

/// Settings for the HTML document the frontend is mounted into
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellDocumentConfig {
    /// Id of the element the application mounts into
    #[serde(default = "default_mount_id")]
    pub mount_id: String,
    /// Name of the wasm-bindgen package under `/pkg`
    #[serde(default = "default_package")]
    pub package: String,
}

impl Default for ShellDocumentConfig {
    fn default() -> Self {
        Self {
            mount_id: default_mount_id(),
            package: default_package(),
        }
    }
}

impl Config {
    /// Reject values the shell document cannot be rendered with
    pub fn validate(&self) -> crate::Result<()> {
        if !is_identifier(&self.shell.mount_id) {
            return Err(crate::SkywatchError::Config(format!(
                "Invalid mount id {:?}: expected letters, digits, '-' or '_'",
                self.shell.mount_id
            )));
        }
        if !is_identifier(&self.shell.package) {
            return Err(crate::SkywatchError::Config(format!(
                "Invalid package name {:?}: expected letters, digits, '-' or '_'",
                self.shell.package
            )));
        }
        Ok(())
    }
}

fn is_identifier(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn default_port() -> u16 {
    8080
}

fn default_site_root() -> PathBuf {
    PathBuf::from("target/site")
}

fn default_title() -> String {
    "Skywatch".to_string()
}

fn default_mount_id() -> String {
    "app".to_string()
}

fn default_package() -> String {
    "skywatch_app".to_string()
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::SkywatchError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
