//! Error types for the wishlist client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP response had a non-2xx status code.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// An error from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A header name or value that cannot be sent.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// A base, schema, or request address that does not form a URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// No client with this name is registered.
    #[error("Unknown client '{0}'")]
    UnknownClient(String),

    /// The process-wide registry was installed twice.
    #[error("Client registry already installed")]
    AlreadyInstalled,

    /// A caller-supplied `on_request` hook rejected the request.
    #[error("Request hook failed: {0}")]
    Hook(String),

    /// The schema document could not be interpreted.
    #[error("Schema error: {0}")]
    Schema(String),
}

impl ClientError {
    /// HTTP status of an `Api` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
