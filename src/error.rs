use thiserror::Error;

/// Error type for druidrs operations
#[derive(Debug, Error)]
pub enum DruidRsError {
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Druid reported an error: {0}")]
    DatabaseError(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Invalid epoch timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Result type alias for druidrs operations
pub type Result<T> = std::result::Result<T, DruidRsError>;
