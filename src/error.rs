//! Unified error types for roadstatus
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from the road status API layer
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error (writing output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the HTTP transport and response parsing
///
/// These are the failures the client cannot recover into a structured
/// [`RoadStatus`](crate::domain::RoadStatus): the request never completed,
/// or a successful response carried a body we cannot interpret. They
/// propagate to the CLI boundary and are reported there.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not be completed (DNS, connection refused, timeout)
    #[error("network error: {0}")]
    Network(String),

    /// A 2xx response body was not valid JSON of the expected shape
    #[error("invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),

    /// A 2xx response parsed but carried no usable road entry
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
