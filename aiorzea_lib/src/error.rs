//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding tool-argument and configuration failures.
#[derive(Debug)]
pub enum AiorzeaError {
    /// An error from the underlying XIVAPI client.
    Api(xivapi::Error),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
    /// Tool name or tool arguments were rejected.
    InvalidInput(String),
    /// A required setting is missing or unusable.
    Config(String),
}

impl fmt::Display for AiorzeaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AiorzeaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<xivapi::Error> for AiorzeaError {
    fn from(e: xivapi::Error) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for AiorzeaError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}
