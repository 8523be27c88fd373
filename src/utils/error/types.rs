//! Error types for the access-control core

use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unauthorized errors
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Forbidden errors
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Conflict errors, including stale optimistic writes
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The membership lookup itself failed. Never a statement about membership.
    #[error("Membership lookup failed: {0}")]
    MembershipFetch(String),

    /// A role value outside the known set
    #[error("Unknown project role: {0}")]
    UnknownRole(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
