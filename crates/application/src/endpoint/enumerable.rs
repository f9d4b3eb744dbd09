//! Enumerable endpoints: id listing plus bulk hydration.

use std::marker::PhantomData;

use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use gw2_domain::ids::{chunk_count, chunk_ids, join_ids, ALL_IDS};
use gw2_domain::{
    EndpointId, EndpointShape, IdLookup, IdSelection, QueryParams, MAX_IDS_PER_REQUEST,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::bulk::{resolve_chunks, ItemStream, Resolution};
use crate::endpoint::{ClientSession, Endpoint, EnumerableFetch, FromSession};
use crate::error::{ApiError, ApiResult};

/// Query parameter addressing one record.
const ID_PARAM: &str = "id";

/// An endpoint whose records are listed by id and fetched in bulk, e.g.
/// `/v2/items` or `/v2/characters`.
///
/// Whether `ids=all` is accepted comes from the descriptor; such endpoints
/// report [`EndpointShape::AllIds`].
#[derive(Debug)]
pub struct Enumerable<T, Id = u32> {
    session: ClientSession,
    _record: PhantomData<fn() -> (T, Id)>,
}

impl<T, Id> Enumerable<T, Id>
where
    T: DeserializeOwned + Send + 'static,
    Id: EndpointId,
{
    async fn fetch_chunk(&self, ids: Vec<Id>) -> ApiResult<Vec<T>> {
        let query = QueryParams::new().with(self.session.descriptor().ids_param(), join_ids(&ids));
        self.session.fetch(query).await
    }

    async fn fetch_every(&self) -> ApiResult<Vec<T>> {
        let query = QueryParams::new().with(self.session.descriptor().ids_param(), ALL_IDS);
        self.session.fetch(query).await
    }

    fn every(&self) -> ItemStream<'_, T> {
        stream::once(self.fetch_every())
            .map_ok(|items| stream::iter(items.into_iter().map(Ok)))
            .try_flatten()
            .boxed()
    }
}

impl<T, Id> FromSession for Enumerable<T, Id> {
    fn from_session(session: ClientSession) -> Self {
        Self {
            session,
            _record: PhantomData,
        }
    }
}

impl<T, Id> Endpoint for Enumerable<T, Id>
where
    T: DeserializeOwned + Send + 'static,
    Id: EndpointId,
{
    fn session(&self) -> &ClientSession {
        &self.session
    }

    fn session_mut(&mut self) -> &mut ClientSession {
        &mut self.session
    }

    fn shape(&self) -> EndpointShape {
        if self.session.descriptor().supports_all_ids() {
            EndpointShape::AllIds
        } else {
            EndpointShape::Enumerable
        }
    }
}

#[async_trait]
impl<T, Id> EnumerableFetch for Enumerable<T, Id>
where
    T: DeserializeOwned + Send + 'static,
    Id: EndpointId,
{
    type Item = T;
    type Id = Id;

    async fn ids(&self) -> ApiResult<Vec<Id>> {
        self.session.fetch(QueryParams::new()).await
    }

    async fn one(&self, id: Id) -> ApiResult<T> {
        match self.session.descriptor().lookup() {
            IdLookup::Query => {
                let query = QueryParams::new().with(ID_PARAM, id.to_string());
                self.session.fetch(query).await
            }
            IdLookup::PathSuffix(suffix) => {
                let url = self.session.record_url([id.to_string(), suffix.to_string()])?;
                self.session.fetch_at(url, QueryParams::new()).await
            }
        }
    }

    fn many(
        &self,
        selection: IdSelection<Id>,
        resolution: Resolution,
    ) -> ApiResult<ItemStream<'_, T>> {
        let descriptor = self.session.descriptor();
        let ids = match selection {
            IdSelection::All if descriptor.supports_all_ids() => return Ok(self.every()),
            IdSelection::All => {
                return Err(ApiError::AllIdsUnsupported {
                    path: self.session.path().to_string(),
                });
            }
            IdSelection::Ids(ids) => ids,
        };

        let stream = match descriptor.lookup() {
            IdLookup::Query => {
                let chunks: Vec<Vec<Id>> = chunk_ids(&ids, MAX_IDS_PER_REQUEST)
                    .into_iter()
                    .map(<[Id]>::to_vec)
                    .collect();
                debug!(
                    url = %self.session.url(),
                    ids = ids.len(),
                    requests = chunk_count(ids.len(), MAX_IDS_PER_REQUEST),
                    "bulk lookup by query"
                );
                resolve_chunks(chunks, resolution, move |chunk| self.fetch_chunk(chunk))
            }
            IdLookup::PathSuffix(_) => {
                debug!(url = %self.session.url(), ids = ids.len(), "bulk lookup by path");
                resolve_chunks(ids, resolution, move |id| async move {
                    self.one(id).await.map(|item| vec![item])
                })
            }
        };
        Ok(stream)
    }

    fn all(&self, resolution: Resolution) -> ItemStream<'_, T> {
        if self.session.descriptor().supports_all_ids() {
            return self.every();
        }
        stream::once(self.ids())
            .map_ok(move |ids| match self.many(IdSelection::Ids(ids), resolution) {
                Ok(items) => items,
                Err(err) => stream::once(async move { Err(err) }).boxed(),
            })
            .try_flatten()
            .boxed()
    }
}
