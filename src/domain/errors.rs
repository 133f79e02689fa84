//! Domain error types
//!
//! This module defines the error hierarchy for Inventario. Errors are
//! domain-specific and don't expose third-party HTTP or CSV types.

use thiserror::Error;

/// Main Inventario error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum InventarioError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Inventory API errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Client-side validation errors (caught before any network call)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Inventory API errors
///
/// Mirrors the three ways a call to the inventory server can go wrong:
/// nothing came back, the server answered with an error payload, or the
/// answer could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request was sent but no response was received
    #[error("No response from server: {0}")]
    NoResponse(String),

    /// The server answered with a non-success status
    #[error("Server responded with status {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Server {
        /// HTTP status code
        status: u16,
        /// Message taken from the error payload, when the server sent one
        message: Option<String>,
    },

    /// The response body did not match the expected shape
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Server-supplied message, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Whether the failure happened before any response arrived
    pub fn is_no_response(&self) -> bool {
        matches!(self, ApiError::NoResponse(_))
    }
}

impl InventarioError {
    /// Returns the wrapped API error, if this is one
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            InventarioError::Api(e) => Some(e),
            _ => None,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for InventarioError {
    fn from(err: std::io::Error) -> Self {
        InventarioError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for InventarioError {
    fn from(err: serde_json::Error) -> Self {
        InventarioError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for InventarioError {
    fn from(err: toml::de::Error) -> Self {
        InventarioError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from csv writer errors
impl From<csv::Error> for InventarioError {
    fn from(err: csv::Error) -> Self {
        InventarioError::Export(err.to_string())
    }
}
