//! Error types for the skywatch host service

/// Errors that can occur in the skywatch host service
#[derive(Debug, thiserror::Error)]
pub enum SkywatchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Route table error: {0}")]
    Routes(#[from] skywatch_app::RouteError),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for skywatch operations
pub type Result<T> = std::result::Result<T, SkywatchError>;
