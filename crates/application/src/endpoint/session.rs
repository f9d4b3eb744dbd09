//! Per-endpoint sessions and the context they share.

use std::fmt;
use std::sync::Arc;

use gw2_domain::{
    ApiKey, ApiRequest, ApiResponse, EndpointDescriptor, QueryParams, ResourcePath, StatusRules,
};
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};
use url::Url;

use crate::decode::Decoder;
use crate::endpoint::FromSession;
use crate::error::{ApiError, ApiResult};
use crate::ports::{Connector, Transport};

/// State shared by every endpoint created from one factory.
pub struct SessionContext {
    base_url: Url,
    decoder: Decoder,
    connector: Arc<dyn Connector>,
}

impl SessionContext {
    /// Creates a context for `base_url`.
    #[must_use]
    pub fn new(base_url: Url, rules: StatusRules, connector: Arc<dyn Connector>) -> Self {
        Self {
            base_url,
            decoder: Decoder::new(rules),
            connector,
        }
    }

    /// The API root endpoint paths are joined onto.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The decoder applied to every response.
    #[must_use]
    pub const fn decoder(&self) -> &Decoder {
        &self.decoder
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("base_url", &self.base_url.as_str())
            .field("decoder", &self.decoder)
            .finish_non_exhaustive()
    }
}

/// Prepares an endpoint instance: path segments, fixed query parameters and
/// credential.
///
/// Obtained from [`crate::ClientFactory::endpoint`] for top-level endpoints
/// or [`ClientSession::derive`] for children, which inherit the parent's
/// key.
#[derive(Debug)]
#[must_use]
pub struct EndpointBuilder {
    context: Arc<SessionContext>,
    descriptor: EndpointDescriptor,
    segments: Vec<String>,
    params: QueryParams,
    api_key: Option<ApiKey>,
}

impl EndpointBuilder {
    pub(crate) const fn new(
        context: Arc<SessionContext>,
        descriptor: EndpointDescriptor,
        api_key: Option<ApiKey>,
    ) -> Self {
        Self {
            context,
            descriptor,
            segments: Vec::new(),
            params: QueryParams::new(),
            api_key,
        }
    }

    /// Appends a value for the next `{}` placeholder in the path.
    pub fn segment(mut self, value: impl ToString) -> Self {
        self.segments.push(value.to_string());
        self
    }

    /// Adds a query parameter sent with every request of the instance.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.set(key, value);
        self
    }

    /// Overrides the credential.
    pub fn api_key(mut self, api_key: Option<ApiKey>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Resolves the path and opens a dedicated transport.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the segments do not fit the path template,
    /// or a transport error if the connector fails.
    pub fn connect(self) -> ApiResult<ClientSession> {
        let path = self.descriptor.resolve(&self.segments)?;
        let url = path.join(self.context.base_url())?;
        let transport = self.context.connector.connect()?;
        debug!(
            url = %url,
            authenticated = self.api_key.is_some(),
            "endpoint session opened"
        );
        Ok(ClientSession {
            context: self.context,
            descriptor: self.descriptor,
            path,
            url,
            params: self.params,
            api_key: self.api_key,
            transport,
        })
    }

    /// Connects and wraps the session in the endpoint shape `E`.
    ///
    /// # Errors
    ///
    /// See [`EndpointBuilder::connect`].
    pub fn build<E: FromSession>(self) -> ApiResult<E> {
        Ok(E::from_session(self.connect()?))
    }
}

/// One endpoint instance's connection to the API.
///
/// Owns its transport exclusively; nothing is shared with other instances
/// except the throttle inside the transport adapter. The bearer credential is
/// per instance, so endpoints with different keys never see each other's
/// token.
pub struct ClientSession {
    context: Arc<SessionContext>,
    descriptor: EndpointDescriptor,
    path: ResourcePath,
    url: Url,
    params: QueryParams,
    api_key: Option<ApiKey>,
    transport: Arc<dyn Transport>,
}

impl ClientSession {
    /// The endpoint's descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &EndpointDescriptor {
        &self.descriptor
    }

    /// The resolved path, relative to the base URL.
    #[must_use]
    pub const fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// The fully resolved endpoint URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Query parameters sent with every request.
    #[must_use]
    pub const fn params(&self) -> &QueryParams {
        &self.params
    }

    /// The credential, if any.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Replaces or clears the credential for subsequent requests.
    pub fn set_api_key(&mut self, api_key: Option<ApiKey>) {
        self.api_key = api_key;
    }

    /// Starts a child endpoint that inherits this instance's credential.
    ///
    /// The child gets its own transport when connected.
    pub fn derive(&self, descriptor: EndpointDescriptor) -> EndpointBuilder {
        EndpointBuilder::new(
            Arc::clone(&self.context),
            descriptor,
            self.api_key.clone(),
        )
    }

    /// The URL of a single record addressed by path, e.g. `{url}/{id}/data`.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the base URL cannot carry a path.
    pub fn record_url<I, S>(&self, extra: I) -> ApiResult<Url>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(self.path.child(extra).join(self.context.base_url())?)
    }

    /// Fetches the endpoint URL with `query` and decodes the body as `T`.
    ///
    /// # Errors
    ///
    /// Returns transport, classification and decode errors.
    pub async fn fetch<T: DeserializeOwned>(&self, query: QueryParams) -> ApiResult<T> {
        self.fetch_at(self.url.clone(), query).await
    }

    /// Fetches `url` with `query` and decodes the body as `T`.
    ///
    /// # Errors
    ///
    /// Returns transport, classification and decode errors.
    pub async fn fetch_at<T: DeserializeOwned>(&self, url: Url, query: QueryParams) -> ApiResult<T> {
        let request = self.request(url, query);
        let response = self.send(&request).await?;
        self.context.decoder().decode(&request, response)
    }

    /// Fetches the endpoint URL with `query` and returns the body text.
    ///
    /// # Errors
    ///
    /// Returns transport and classification errors.
    pub async fn fetch_raw(&self, query: QueryParams) -> ApiResult<String> {
        let request = self.request(self.url.clone(), query);
        let response = self.send(&request).await?;
        self.context.decoder().raw(&request, response)
    }

    fn request(&self, url: Url, query: QueryParams) -> ApiRequest {
        let mut merged = self.params.clone();
        for param in &query {
            merged.set(param.key.clone(), param.value.clone());
        }
        ApiRequest::new(url)
            .with_query(merged)
            .with_api_key(self.api_key.clone())
    }

    async fn send(&self, request: &ApiRequest) -> ApiResult<ApiResponse> {
        debug!(url = %request.full_url(), "sending request");
        self.transport.fetch(request).await.map_err(|err| {
            warn!(url = %request.url, error = %err, "request failed");
            ApiError::from(err)
        })
    }
}

impl fmt::Debug for ClientSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSession")
            .field("url", &self.url.as_str())
            .field("params", &self.params)
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

impl Drop for ClientSession {
    fn drop(&mut self) {
        trace!(url = %self.url, "endpoint session closed");
    }
}
