//! Drone API client
//!
//! The client is configured explicitly with a base address at construction
//! and handed to views through the reactive context. Response types mirror
//! the JSON served by the drone backend.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Base address all API requests are relative to
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Immutable API configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Validate and store a base address (http or https, with a host)
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let invalid = |reason: String| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let parsed = url::Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {:?}", parsed.scheme())));
        }
        if parsed.host_str().is_none() {
            return Err(invalid("missing host".to_string()));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("query and fragment are not allowed".to_string()));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base address without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint
    pub fn url(&self, endpoint: &Endpoint<'_>) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Endpoints consumed by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Drones,
    CurrentDrones,
    Trajectory { serial: &'a str },
    CollisionAlerts,
    CollisionCheck,
    LogList,
    LogContent { filename: &'a str },
}

impl Endpoint<'_> {
    /// Path relative to the base address, with dynamic segments encoded
    pub fn path(&self) -> String {
        match self {
            Endpoint::Drones => "/api/db/drones".to_string(),
            Endpoint::CurrentDrones => "/api/db/drones/current".to_string(),
            Endpoint::Trajectory { serial } => {
                format!("/api/drone/{}/trajectory", urlencoding::encode(serial))
            }
            Endpoint::CollisionAlerts => "/api/collision-alerts".to_string(),
            Endpoint::CollisionCheck => "/api/collision-check".to_string(),
            Endpoint::LogList => "/api/logs/list".to_string(),
            Endpoint::LogContent { filename } => {
                format!("/api/logs/{}", urlencoding::encode(filename))
            }
        }
    }
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Raw HTTP response
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Abstraction over the browser HTTP stack for dependency injection
#[async_trait(?Send)]
#[cfg_attr(test, mockall::automock)]
pub trait Transport: Send + Sync {
    /// Send a GET request to the given URL
    async fn get(&self, url: &str) -> Result<HttpResponse, ApiError>;
}

/// Browser transport using gloo-net
#[cfg(feature = "csr")]
#[derive(Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, ApiError> {
        log::debug!("GET {}", url);
        let response = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Http(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Http(format!("Reading response body: {}", e)))?;

        log::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}

/// Transport for builds without a browser; every request fails
#[cfg(not(feature = "csr"))]
#[derive(Debug, Default)]
pub struct OfflineTransport;

#[cfg(not(feature = "csr"))]
#[async_trait(?Send)]
impl Transport for OfflineTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, ApiError> {
        Err(ApiError::Http(format!(
            "GET {} failed: no HTTP transport outside the browser",
            url
        )))
    }
}

/// The transport used when none is injected
pub fn default_transport() -> Arc<dyn Transport> {
    #[cfg(feature = "csr")]
    {
        Arc::new(GlooTransport)
    }

    #[cfg(not(feature = "csr"))]
    {
        Arc::new(OfflineTransport)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Typed client for the drone API
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T, ApiError> {
        let url = self.config.url(&endpoint);
        let response = self.transport.get(&url).await?;

        if !(200..300).contains(&response.status) {
            let message = serde_json::from_str::<ErrorBody>(&response.body)
                .map(|b| b.error)
                .unwrap_or(response.body);
            log::warn!("{} returned {}: {}", endpoint, response.status, message);
            return Err(ApiError::Status {
                status: response.status,
                message,
            });
        }

        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Decode(format!("{}: {}", endpoint, e)))
    }

    /// Registered drones
    pub async fn drones(&self) -> Result<Vec<Drone>, ApiError> {
        self.get_json(Endpoint::Drones).await
    }

    /// Latest known position of every drone
    pub async fn current_drones(&self) -> Result<Vec<DroneSnapshot>, ApiError> {
        self.get_json(Endpoint::CurrentDrones).await
    }

    /// Recent trajectory of one drone; 404 when the serial is unknown
    pub async fn trajectory(&self, serial: &str) -> Result<Vec<TrajectoryPoint>, ApiError> {
        self.get_json(Endpoint::Trajectory { serial }).await
    }

    pub async fn collision_alerts(&self) -> Result<Vec<CollisionAlert>, ApiError> {
        self.get_json(Endpoint::CollisionAlerts).await
    }

    /// Run a collision check; the backend also writes a log file for it
    pub async fn run_collision_check(&self) -> Result<Vec<CollisionAlert>, ApiError> {
        self.get_json(Endpoint::CollisionCheck).await
    }

    pub async fn logs(&self) -> Result<Vec<LogEntry>, ApiError> {
        self.get_json(Endpoint::LogList).await
    }

    pub async fn log_content(&self, filename: &str) -> Result<LogContent, ApiError> {
        self.get_json(Endpoint::LogContent { filename }).await
    }
}

/// Drone as returned by /api/db/drones
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    pub drone_id: i64,
    pub serial: String,
    pub direction: Option<f64>,
    pub ew_dir: Option<f64>,
    pub pilot_lat: Option<f64>,
    pub pilot_lng: Option<f64>,
    pub z: Option<f64>,
}

/// Latest position as returned by /api/db/drones/current
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneSnapshot {
    pub serial: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub z: Option<f64>,
    pub vx: Option<f64>,
    pub vy: Option<f64>,
    pub vz: Option<f64>,
    pub direction: Option<f64>,
    pub pilot_lat: Option<f64>,
    pub pilot_lng: Option<f64>,
    pub last_updated: Option<String>,
}

impl DroneSnapshot {
    /// Magnitude of the velocity vector in m/s, if any component is known
    pub fn speed(&self) -> Option<f64> {
        if self.vx.is_none() && self.vy.is_none() && self.vz.is_none() {
            return None;
        }
        let [x, y, z] = [self.vx, self.vy, self.vz].map(|v| v.unwrap_or(0.0));
        Some((x * x + y * y + z * z).sqrt())
    }
}

/// One point of /api/drone/{serial}/trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub lat: f64,
    pub lng: f64,
    pub z: f64,
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
    pub timestamp: String,
}

/// Collision risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::High => write!(f, "High"),
            Severity::Medium => write!(f, "Medium"),
            Severity::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Predicted meeting point, metres relative to the reference drone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Collision alert as returned by /api/collision-alerts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionAlert {
    pub drone_a: String,
    pub drone_b: String,
    pub time_to_collision: f64,
    pub current_distance: f64,
    pub collision_point: CollisionPoint,
    pub severity: Severity,
    pub drone_a_lat: f64,
    pub drone_a_lng: f64,
    pub drone_b_lat: f64,
    pub drone_b_lng: f64,
}

/// Entry of /api/logs/list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub filename: String,
    pub timestamp: String,
    pub size: u64,
    pub created_at: String,
}

/// Body of /api/logs/{filename}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogContent {
    pub filename: String,
    pub content: String,
    pub timestamp: String,
}
