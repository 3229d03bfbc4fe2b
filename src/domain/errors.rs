use thiserror::Error;

/// Errors surfaced by every client operation
#[derive(Error, Debug)]
pub enum DomainError {
    /// Charge request rejected before any creation call
    #[error("Invalid charge request: {0}")]
    InvalidChargeRequest(String),

    /// Call argument that cannot be sent as-is
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Provider answered with a non-success status
    #[error("Pushin Pay API returned {status}: {body}")]
    RemoteCallFailure { status: u16, body: String },

    /// Connectivity, timeout or protocol failure underneath HTTP
    #[error("HTTP transport error: {0}")]
    TransportFailure(#[from] reqwest::Error),

    /// Request body could not be encoded
    #[error("Serialization error: {0}")]
    SerializationError(serde_json::Error),

    /// Response body did not match the expected shape
    #[error("Decoding error: {0}")]
    DecodingFailure(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Runtime behind the blocking client could not start
    #[error("Blocking runtime error: {0}")]
    RuntimeError(#[from] std::io::Error),
}

impl DomainError {
    /// Remote HTTP status, when the provider produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            DomainError::RemoteCallFailure { status, .. } => Some(*status),
            DomainError::TransportFailure(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type used across the crate
pub type DomainResult<T> = Result<T, DomainError>;
