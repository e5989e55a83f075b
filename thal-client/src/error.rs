//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connection refused, DNS, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Backend answered with a failure envelope or a non-success status
    #[error("{}", .message.as_deref().unwrap_or("Request failed"))]
    Api {
        status: Option<u16>,
        message: Option<String>,
    },

    /// Body could not be decoded or did not follow the envelope contract
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request rejected before it was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Local file access failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Client could not be constructed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Message supplied by the backend, if there was one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    /// Whether the request never produced a usable HTTP exchange
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Http(_) | ClientError::Timeout)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_decode() {
            ClientError::InvalidResponse(err.to_string())
        } else {
            ClientError::Http(err)
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::InvalidResponse(err.to_string())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
