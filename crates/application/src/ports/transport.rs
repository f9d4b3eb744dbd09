//! Transport port

use std::sync::Arc;

use async_trait::async_trait;
use gw2_domain::{ApiRequest, ApiResponse};
use thiserror::Error;

/// Failures below the HTTP layer: nothing usable came back.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The server did not answer in time.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// The configured timeout.
        timeout_secs: u64,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// The HTTP client could not be built, e.g. a header value is invalid.
    #[error("failed to build HTTP client: {0}")]
    Build(String),

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Other(String),
}

/// Executes one `GET` and returns the raw response.
///
/// Implementations apply the session's fixed headers, the bearer credential
/// carried by the request and the process-wide throttle. They never retry
/// and never look at the status code.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and returns whatever the server answered.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if no response was received.
    async fn fetch(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Opens transports. Every endpoint instance gets its own.
pub trait Connector: Send + Sync {
    /// Creates a transport with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] if the underlying client cannot be
    /// created.
    fn connect(&self) -> Result<Arc<dyn Transport>, TransportError>;
}
