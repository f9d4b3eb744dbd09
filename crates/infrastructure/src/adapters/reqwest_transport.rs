//! Transport implementation using reqwest.
//!
//! This adapter implements the `Transport` port. Each instance wraps its own
//! `reqwest::Client`, so connection pools are never shared between endpoint
//! instances; only the throttle is.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use gw2_application::ports::{Transport, TransportError};
use gw2_domain::{ApiRequest, ApiResponse};
use reqwest::Client;
use tracing::debug;

use crate::throttle::Throttle;

/// reqwest-backed transport.
#[derive(Debug)]
pub struct ReqwestTransport {
    client: Client,
    throttle: Arc<Throttle>,
    timeout_secs: u64,
}

impl ReqwestTransport {
    /// Wraps a configured client.
    ///
    /// `client` should already carry the fixed headers and timeout;
    /// `timeout_secs` is only used to report timeouts.
    #[must_use]
    pub const fn new(client: Client, throttle: Arc<Throttle>, timeout_secs: u64) -> Self {
        Self {
            client,
            throttle,
            timeout_secs,
        }
    }

    /// Maps reqwest errors to `TransportError`.
    fn map_error(error: &reqwest::Error, timeout_secs: u64) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout { timeout_secs };
        }
        if error.is_connect() {
            return TransportError::Connect(error.to_string());
        }
        if error.is_body() || error.is_decode() {
            return TransportError::Body(error.to_string());
        }
        if error.is_builder() {
            return TransportError::Build(error.to_string());
        }
        TransportError::Other(error.to_string())
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn fetch(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        self.throttle.acquire().await;

        let url = request.full_url();
        let start = Instant::now();

        let mut builder = self.client.get(url.clone());
        if let Some(key) = &request.api_key {
            builder = builder.bearer_auth(key.expose());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_error(&e, self.timeout_secs))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| Self::map_error(&e, self.timeout_secs))?;

        debug!(
            url = %url,
            status,
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "response received"
        );
        Ok(ApiResponse::from_bytes(status, &body))
    }
}
