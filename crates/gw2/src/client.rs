//! The client entry point.

use std::sync::Arc;

use gw2_application::{ApiResult, ClientFactory, Connector, EndpointBuilder};
use gw2_domain::{ApiKey, ClientConfig, EndpointDescriptor};
use gw2_infrastructure::ReqwestConnector;

/// Entry point to the official API.
///
/// Cheap to clone. Each endpoint method returns a fresh instance with its own
/// connection pool and a copy of the client's key; all instances share the
/// process-wide request throttle.
///
/// ```no_run
/// use gw2::prelude::*;
///
/// # async fn run() -> gw2::ApiResult<()> {
/// let client = Gw2Client::new()?;
/// let build = client.build()?.get().await?;
/// println!("build {}", build.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Gw2Client {
    factory: ClientFactory,
}

impl Gw2Client {
    /// Creates an unauthenticated client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be configured.
    pub fn new() -> ApiResult<Self> {
        Self::from_config(&ClientConfig::official())
    }

    /// Creates a client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be configured.
    pub fn from_config(config: &ClientConfig) -> ApiResult<Self> {
        let connector = ReqwestConnector::new(config)?;
        Self::with_connector(config, Arc::new(connector))
    }

    /// Creates a client from the default configuration overlaid with
    /// `GW2_API_KEY` and `GW2_BASE_URL` from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid key or URL.
    pub fn from_env() -> ApiResult<Self> {
        let config = ClientConfig::official().with_env_overrides(|name| std::env::var(name).ok())?;
        Self::from_config(&config)
    }

    /// Creates a client over a custom connector.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_connector(config: &ClientConfig, connector: Arc<dyn Connector>) -> ApiResult<Self> {
        Ok(Self {
            factory: ClientFactory::new(config, connector)?,
        })
    }

    /// Returns a copy of this client whose new endpoints use `api_key`.
    #[must_use]
    pub fn with_api_key(self, api_key: Option<ApiKey>) -> Self {
        Self {
            factory: self.factory.with_default_api_key(api_key),
        }
    }

    /// The key new endpoints start with.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.factory.default_api_key()
    }

    /// Starts an endpoint the catalogue does not declare.
    pub fn endpoint(&self, descriptor: EndpointDescriptor) -> EndpointBuilder {
        self.factory.endpoint(descriptor)
    }
}
