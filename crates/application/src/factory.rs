//! Endpoint factory.

use std::sync::Arc;

use gw2_domain::{ApiKey, ClientConfig, EndpointDescriptor};
use tracing::info;

use crate::endpoint::{EndpointBuilder, SessionContext};
use crate::error::ApiResult;
use crate::ports::Connector;

/// Creates endpoint instances against one API root.
///
/// The default key comes from the configuration and is copied into each
/// instance at creation; changing an instance's key later never affects the
/// factory or other instances.
#[derive(Debug, Clone)]
pub struct ClientFactory {
    context: Arc<SessionContext>,
    default_api_key: Option<ApiKey>,
}

impl ClientFactory {
    /// Creates a factory from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the configuration is invalid.
    pub fn new(config: &ClientConfig, connector: Arc<dyn Connector>) -> ApiResult<Self> {
        config.validate()?;
        info!(
            base_url = %config.base_url,
            rules = ?config.status_rules,
            authenticated = config.api_key.is_some(),
            "client factory created"
        );
        Ok(Self {
            context: Arc::new(SessionContext::new(
                config.base_url.clone(),
                config.status_rules,
                connector,
            )),
            default_api_key: config.api_key.clone(),
        })
    }

    /// Returns a copy of this factory with a different default key.
    #[must_use]
    pub fn with_default_api_key(mut self, api_key: Option<ApiKey>) -> Self {
        self.default_api_key = api_key;
        self
    }

    /// The key new instances start with.
    #[must_use]
    pub const fn default_api_key(&self) -> Option<&ApiKey> {
        self.default_api_key.as_ref()
    }

    /// The shared session context.
    #[must_use]
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Starts building an instance of `descriptor`.
    pub fn endpoint(&self, descriptor: EndpointDescriptor) -> EndpointBuilder {
        EndpointBuilder::new(
            Arc::clone(&self.context),
            descriptor,
            self.default_api_key.clone(),
        )
    }
}
