//! Core error types for smarttask-core.
//!
//! Every failure a top-level action can hit is one of the enums below. The
//! dashboard turns them into a single line in the error slot, so their
//! `Display` output is user-facing text.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for smarttask-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Input text could not be turned into task records
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Scoring API call failed
    #[error(transparent)]
    Invoke(#[from] InvokeError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors produced while reading task records from raw input text.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Top-level JSON is neither an array nor an object with a `tasks` array
    #[error("JSON must be an array of tasks or an object with a 'tasks' array.")]
    Shape,

    /// Input is not valid JSON
    #[error("Invalid JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Errors produced while talking to the scoring API.
#[derive(Error, Debug)]
pub enum InvokeError {
    /// Backend answered with a non-2xx status
    #[error("Server error: {status}")]
    HttpStatus { status: u16 },

    /// Request never completed (connect, timeout, body transfer)
    #[error("{0}")]
    Network(#[source] reqwest::Error),

    /// Success response whose body is not valid JSON
    #[error("Invalid JSON in response: {0}")]
    ResponseDecode(#[source] serde_json::Error),

    /// Configured base URL cannot be parsed
    #[error("Invalid API base URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
