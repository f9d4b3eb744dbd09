//! Capability traits implemented by the endpoint shapes.

use async_trait::async_trait;
use futures::TryStreamExt;
use gw2_domain::{ApiKey, EndpointDescriptor, EndpointId, EndpointShape, IdSelection};
use url::Url;

use crate::bulk::{ItemStream, Resolution};
use crate::endpoint::ClientSession;
use crate::error::ApiResult;

/// Shapes that wrap a connected session without further state.
pub trait FromSession: Sized {
    /// Wraps a connected session.
    fn from_session(session: ClientSession) -> Self;
}

/// Operations every endpoint instance supports.
pub trait Endpoint: Send + Sync {
    /// The instance's session.
    fn session(&self) -> &ClientSession;

    /// Mutable access to the instance's session.
    fn session_mut(&mut self) -> &mut ClientSession;

    /// The shape this instance was built as.
    fn shape(&self) -> EndpointShape;

    /// The descriptor the instance was built from.
    fn descriptor(&self) -> &EndpointDescriptor {
        self.session().descriptor()
    }

    /// The fully resolved endpoint URL.
    fn url(&self) -> &Url {
        self.session().url()
    }

    /// The credential, if any.
    fn api_key(&self) -> Option<&ApiKey> {
        self.session().api_key()
    }

    /// Sets or clears the credential of this instance only.
    fn auth(&mut self, api_key: Option<ApiKey>) {
        self.session_mut().set_api_key(api_key);
    }

    /// Releases the instance's transport.
    fn close(self)
    where
        Self: Sized,
    {
        drop(self);
    }
}

/// An endpoint returning exactly one record.
#[async_trait]
pub trait SingleFetch: Endpoint {
    /// The record type.
    type Output: Send;

    /// Fetches the record.
    async fn get(&self) -> ApiResult<Self::Output>;
}

/// An endpoint returning a whole list in one response.
#[async_trait]
pub trait ListFetch: Endpoint {
    /// The element type.
    type Item: Send;

    /// Fetches the list.
    async fn get(&self) -> ApiResult<Vec<Self::Item>>;
}

/// An endpoint whose records are listed by id and fetched by id.
#[async_trait]
pub trait EnumerableFetch: Endpoint {
    /// The record type.
    type Item: Send + 'static;
    /// The key type.
    type Id: EndpointId;

    /// Lists every available id.
    async fn ids(&self) -> ApiResult<Vec<Self::Id>>;

    /// Fetches one record.
    async fn one(&self, id: Self::Id) -> ApiResult<Self::Item>;

    /// Streams the records for `selection`, in id order.
    ///
    /// Ids are sent in chunks of at most 200. Unknown ids are skipped by the
    /// server, so the stream may be shorter than the selection.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError::AllIdsUnsupported`] up front, without any
    /// request, if `selection` is [`IdSelection::All`] and the endpoint does
    /// not accept it.
    fn many(
        &self,
        selection: IdSelection<Self::Id>,
        resolution: Resolution,
    ) -> ApiResult<ItemStream<'_, Self::Item>>;

    /// Streams every record.
    ///
    /// Endpoints accepting `ids=all` use a single request; others list the
    /// ids first and then resolve them like [`EnumerableFetch::many`].
    fn all(&self, resolution: Resolution) -> ItemStream<'_, Self::Item>;

    /// Like [`EnumerableFetch::many`], collected into a list.
    async fn many_collected(
        &self,
        selection: IdSelection<Self::Id>,
        resolution: Resolution,
    ) -> ApiResult<Vec<Self::Item>> {
        self.many(selection, resolution)?.try_collect().await
    }

    /// Like [`EnumerableFetch::all`], collected into a list.
    async fn all_collected(&self, resolution: Resolution) -> ApiResult<Vec<Self::Item>> {
        self.all(resolution).try_collect().await
    }
}
