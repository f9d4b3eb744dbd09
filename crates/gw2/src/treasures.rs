//! Client for the gw2treasures mirror API.
//!
//! The mirror serves the same records as the official API under
//! `/<collection>/<id>/data`. It has no bulk parameter, so `many` issues one
//! request per id, and it does not accept `ids=all`. Only `200` counts as
//! success and `401` means the key was rejected.

use std::sync::Arc;

use gw2_application::{ApiResult, ClientFactory, Connector, Enumerable, Single};
use gw2_domain::models::{Achievement, Item};
use gw2_domain::{ApiKey, ClientConfig, EndpointDescriptor};
use gw2_infrastructure::ReqwestConnector;

const ACHIEVEMENTS: EndpointDescriptor =
    EndpointDescriptor::new("achievements").with_path_lookup("data");
const ACHIEVEMENT: EndpointDescriptor = EndpointDescriptor::new("achievements/{}/data");
const ITEMS: EndpointDescriptor = EndpointDescriptor::new("items").with_path_lookup("data");
const ITEM: EndpointDescriptor = EndpointDescriptor::new("items/{}/data");

/// Entry point to the mirror. Every request is authenticated.
#[derive(Debug, Clone)]
pub struct TreasuresClient {
    factory: ClientFactory,
}

impl TreasuresClient {
    /// Creates a client for the public mirror.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be configured.
    pub fn new(api_key: ApiKey) -> ApiResult<Self> {
        Self::from_config(&ClientConfig::mirror().with_api_key(Some(api_key)))
    }

    /// Creates a client from explicit configuration, normally based on
    /// [`ClientConfig::mirror`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be configured.
    pub fn from_config(config: &ClientConfig) -> ApiResult<Self> {
        let connector = ReqwestConnector::new(config)?;
        Self::with_connector(config, Arc::new(connector))
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

    /// `/achievements`
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn achievements(&self) -> ApiResult<Enumerable<Achievement>> {
        self.factory.endpoint(ACHIEVEMENTS).build()
    }

    /// `/achievements/{id}/data`
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn achievement(&self, achievement_id: u32) -> ApiResult<Single<Achievement>> {
        self.factory
            .endpoint(ACHIEVEMENT)
            .segment(achievement_id)
            .build()
    }

    /// `/items`
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn items(&self) -> ApiResult<Enumerable<Item>> {
        self.factory.endpoint(ITEMS).build()
    }

    /// `/items/{id}/data`
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn item(&self, item_id: u32) -> ApiResult<Single<Item>> {
        self.factory.endpoint(ITEM).segment(item_id).build()
    }
}
