//! Error types for the hn-app service layer.

/// Application error type that wraps errors from the backend crates and
/// provides a unified interface for front ends.
///
/// The three failure kinds callers care about map as:
/// - invalid input → `InvalidInput`
/// - semantic graph errors → `Graph`
/// - missing target (an expected outcome, not a crash) → `NoPath`
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("No path exists to target node {target}")]
    NoPath { target: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for hn-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<hn_graph::ValidationError> for AppError {
    fn from(err: hn_graph::ValidationError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<hn_project::ProjectError> for AppError {
    fn from(err: hn_project::ProjectError) -> Self {
        match err {
            hn_project::ProjectError::Io(e) => AppError::Io(e),
            hn_project::ProjectError::Json(e) => AppError::Json(e),
            other => AppError::InvalidInput(other.to_string()),
        }
    }
}

impl From<hn_engine::GraphError> for AppError {
    fn from(err: hn_engine::GraphError) -> Self {
        AppError::Graph(err.to_string())
    }
}

impl From<hn_dynamic::DynamicError> for AppError {
    fn from(err: hn_dynamic::DynamicError) -> Self {
        match err {
            hn_dynamic::DynamicError::Graph(e) => AppError::Graph(e.to_string()),
            other => AppError::InvalidInput(other.to_string()),
        }
    }
}
