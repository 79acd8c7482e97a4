//! Error types for the fmbridge library.

use serde_json::Value;
use thiserror::Error;

/// Main error type for fmbridge operations.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The bridge rejected the request, or its reply could not be understood.
    ///
    /// `envelope` is the raw reply as received (when it parsed as JSON), so
    /// callers can pull extra diagnostics out of it.
    #[error("{message}")]
    Rejected {
        message: String,
        envelope: Option<Value>,
    },

    /// The host environment lacks a capability the operation needs.
    #[error("Unsupported: {0}")]
    Unsupported(&'static str),

    /// Network request error.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Local I/O error (saving downloads, reading upload sources, loading config).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An endpoint or base URL could not be parsed.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Configuration could not be parsed or is inconsistent.
    #[error("Config error: {0}")]
    Config(String),

    /// Custom error message.
    #[error("{0}")]
    Custom(String),
}

impl BridgeError {
    /// The raw bridge reply attached to a rejection, if any.
    pub fn envelope(&self) -> Option<&Value> {
        match self {
            BridgeError::Rejected { envelope, .. } => envelope.as_ref(),
            _ => None,
        }
    }

    /// Whether this error came from normalizing a bridge reply.
    pub fn is_rejection(&self) -> bool {
        matches!(self, BridgeError::Rejected { .. })
    }
}

/// Result type alias for fmbridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;
