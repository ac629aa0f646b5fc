// src/error.rs

//! Unified error handling for the notices engine.

use std::fmt;

use thiserror::Error;

/// Result type alias for fallible notice operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A sort column identifier that is not sortable
    #[error("Unknown sort column '{0}'")]
    UnknownColumn(String),

    /// A filter category name that does not exist
    #[error("Unknown filter category '{0}'")]
    UnknownCategory(String),

    /// The chat proxy answered with a failure
    #[error("Chat proxy error ({status}): {message}")]
    Chat { status: u16, message: String },
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a chat proxy error.
    pub fn chat(status: u16, message: impl fmt::Display) -> Self {
        Self::Chat {
            status,
            message: message.to_string(),
        }
    }
}
