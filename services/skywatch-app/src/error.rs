//! Error types for the dashboard frontend

/// Errors raised while building or using the route table
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("Invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Duplicate route name: {0}")]
    DuplicateName(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Route {route} requires parameter {param:?}")]
    MissingParam { route: String, param: String },
}

/// Errors raised by the API client
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the server answered 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// Errors that abort application startup
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("Mount target {0:?} not found in document")]
    MountTargetMissing(String),

    #[error("No browser window available")]
    NoWindow,

    #[error("Route table error: {0}")]
    Routes(#[from] RouteError),
}
