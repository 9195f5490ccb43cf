//! Client Errors
//!
//! Every failure the UI can surface, each reported as one toast.

/// Problems caught locally, before any request is sent
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationFailure {
    #[error("Please add at least one item")]
    EmptyItems,
    #[error("Capacity must be greater than 0")]
    NonPositiveCapacity,
    #[error("Item '{name}' (row {}) needs a weight above 0 and a value of at least 0", .index + 1)]
    InvalidItem { index: usize, name: String },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },
    #[error("unexpected response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
    /// Error reported by the service itself
    #[error("{0}")]
    Service(String),
    #[error("No results to export")]
    NothingToExport,
    #[error("Could not save file: {0}")]
    Download(String),
}

impl ClientError {
    /// Toast text. Network-level failures read as `fallback`, the rest
    /// (including service messages) are shown as-is.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Transport { .. } | ClientError::Decode { .. } => fallback.to_string(),
            other => other.to_string(),
        }
    }
}
