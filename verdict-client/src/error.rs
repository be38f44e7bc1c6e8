//! Error types for the Verdict clients

use std::error::Error as StdError;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the status API or the messaging API
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never got a response (DNS, timeout, refused connection)
    #[error("failed to reach {endpoint}: {cause}")]
    Connection {
        /// URL the request was sent to, without credentials
        endpoint: String,
        /// Description of the underlying transport failure
        cause: String,
    },

    /// The server answered with a non-success status code
    #[error("unexpected API status {status} from {endpoint}")]
    HttpStatus {
        /// URL the request was sent to, without credentials
        endpoint: String,
        /// HTTP status code
        status: u16,
    },

    /// The response body could not be decoded
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The server answered successfully but reported a failure in the body
    #[error("server reported an error: {message}")]
    ServerReported {
        /// Failure description taken from the body
        message: String,
    },

    /// The request could not be built
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Renders a reqwest error with its whole `source()` chain
///
/// The URL is dropped first; Bot API URLs embed the token.
fn describe(err: reqwest::Error) -> String {
    let err = err.without_url();
    let mut parts = vec![err.to_string()];
    let mut source = StdError::source(&err);

    while let Some(cause) = source {
        let text = cause.to_string();
        if parts.last() != Some(&text) {
            parts.push(text);
        }
        source = cause.source();
    }

    parts.join(": ")
}

impl ClientError {
    /// Wraps a transport failure
    ///
    /// Credentials embedded in the request URL are stripped from the cause.
    pub fn connection(endpoint: impl Into<String>, err: reqwest::Error) -> Self {
        Self::Connection {
            endpoint: endpoint.into(),
            cause: describe(err),
        }
    }

    /// Wraps a body decoding failure
    pub fn decode(err: reqwest::Error) -> Self {
        Self::Decode(describe(err))
    }

    /// Create an HTTP status error
    pub fn http_status(endpoint: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            endpoint: endpoint.into(),
            status,
        }
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::HttpStatus { status, .. } if (400..500).contains(status))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::HttpStatus { status, .. } if *status >= 500)
    }
}
