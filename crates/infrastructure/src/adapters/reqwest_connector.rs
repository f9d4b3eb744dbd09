//! Builds one reqwest client per endpoint instance.

use std::sync::Arc;
use std::time::Duration;

use gw2_application::ports::{Connector, Transport, TransportError};
use gw2_domain::config::ACCEPT_LANGUAGE;
use gw2_domain::ClientConfig;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE as ACCEPT_LANGUAGE_HEADER, HeaderMap, HeaderName, HeaderValue,
};
use reqwest::Client;
use tracing::trace;

use crate::adapters::ReqwestTransport;
use crate::throttle::Throttle;

const SCHEMA_VERSION_HEADER: &str = "x-schema-version";

/// Opens [`ReqwestTransport`]s configured from a [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct ReqwestConnector {
    headers: HeaderMap,
    user_agent: String,
    timeout: Duration,
    throttle: Arc<Throttle>,
}

impl ReqwestConnector {
    /// Creates a connector sharing the process-wide throttle for
    /// `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] if a configured header value is not
    /// a valid header.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        Self::with_throttle(config, Throttle::shared(config))
    }

    /// Creates a connector with an explicit throttle.
    ///
    /// # Errors
    ///
    /// See [`ReqwestConnector::new`].
    pub fn with_throttle(config: &ClientConfig, throttle: Arc<Throttle>) -> Result<Self, TransportError> {
        Ok(Self {
            headers: default_headers(&config.schema_version)?,
            user_agent: config.user_agent.clone(),
            timeout: config.timeout(),
            throttle,
        })
    }

    /// The headers sent with every request.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The throttle shared by every transport this connector opens.
    #[must_use]
    pub const fn throttle(&self) -> &Arc<Throttle> {
        &self.throttle
    }
}

impl Connector for ReqwestConnector {
    fn connect(&self) -> Result<Arc<dyn Transport>, TransportError> {
        let client = Client::builder()
            .user_agent(self.user_agent.as_str())
            .default_headers(self.headers.clone())
            .timeout(self.timeout)
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;
        trace!(timeout_secs = self.timeout.as_secs(), "transport opened");
        Ok(Arc::new(ReqwestTransport::new(
            client,
            Arc::clone(&self.throttle),
            self.timeout.as_secs(),
        )))
    }
}

fn default_headers(schema_version: &str) -> Result<HeaderMap, TransportError> {
    let schema = HeaderValue::from_str(schema_version)
        .map_err(|e| TransportError::Build(format!("invalid schema version: {e}")))?;

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT_LANGUAGE_HEADER, HeaderValue::from_static(ACCEPT_LANGUAGE));
    headers.insert(HeaderName::from_static(SCHEMA_VERSION_HEADER), schema);
    Ok(headers)
}
