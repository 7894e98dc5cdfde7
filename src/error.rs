//! Error types for the Calma client
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Calma operations
///
/// This enum encompasses all possible errors that can occur during
/// configuration loading, API calls, session management, and input
/// validation.
#[derive(Error, Debug)]
pub enum CalmaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input validation errors, caught before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backend rejected a request with a non-2xx status
    ///
    /// The display string is the backend-provided `message` payload
    /// verbatim when present, else a per-call fallback. The status is
    /// retained for logging and programmatic inspection.
    #[error("{message}")]
    Api {
        /// HTTP status code returned by the backend
        status: u16,
        /// Human-readable message surfaced to the user
        message: String,
    },

    /// A chat turn is already in flight; sends are serialized
    #[error("A message is already being sent; wait for the reply")]
    SendInProgress,

    /// Authentication errors (not logged in, expired session)
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Cookie-jar storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Calma operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
