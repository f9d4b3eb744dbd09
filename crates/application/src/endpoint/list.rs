//! Whole-list endpoints.

use std::marker::PhantomData;

use async_trait::async_trait;
use gw2_domain::{EndpointShape, QueryParams};
use serde::de::DeserializeOwned;

use crate::endpoint::{ClientSession, Endpoint, FromSession, ListFetch};
use crate::error::ApiResult;

/// An endpoint returning a list of records, e.g. `/v2/account/achievements`.
#[derive(Debug)]
pub struct ListAll<T> {
    session: ClientSession,
    _record: PhantomData<fn() -> T>,
}

/// An endpoint returning a list of scalars that are not ids of anything,
/// e.g. `/v2/dungeons` or `/v2/characters/{name}/backstory`.
#[derive(Debug)]
pub struct RawList<S = String> {
    session: ClientSession,
    _scalar: PhantomData<fn() -> S>,
}

impl<T> FromSession for ListAll<T> {
    fn from_session(session: ClientSession) -> Self {
        Self {
            session,
            _record: PhantomData,
        }
    }
}

impl<T> Endpoint for ListAll<T>
where
    T: DeserializeOwned + Send + 'static,
{
    fn session(&self) -> &ClientSession {
        &self.session
    }

    fn session_mut(&mut self) -> &mut ClientSession {
        &mut self.session
    }

    fn shape(&self) -> EndpointShape {
        EndpointShape::List
    }
}

#[async_trait]
impl<T> ListFetch for ListAll<T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Item = T;

    async fn get(&self) -> ApiResult<Vec<T>> {
        self.session.fetch(QueryParams::new()).await
    }
}

impl<S> FromSession for RawList<S> {
    fn from_session(session: ClientSession) -> Self {
        Self {
            session,
            _scalar: PhantomData,
        }
    }
}

impl<S> Endpoint for RawList<S>
where
    S: DeserializeOwned + Send + 'static,
{
    fn session(&self) -> &ClientSession {
        &self.session
    }

    fn session_mut(&mut self) -> &mut ClientSession {
        &mut self.session
    }

    fn shape(&self) -> EndpointShape {
        EndpointShape::RawList
    }
}

#[async_trait]
impl<S> ListFetch for RawList<S>
where
    S: DeserializeOwned + Send + 'static,
{
    type Item = S;

    async fn get(&self) -> ApiResult<Vec<S>> {
        self.session.fetch(QueryParams::new()).await
    }
}

impl<S> RawList<S>
where
    S: DeserializeOwned + Send + 'static,
{
    /// Fetches the body without decoding it.
    ///
    /// # Errors
    ///
    /// Returns transport and classification errors.
    pub async fn text(&self) -> ApiResult<String> {
        self.session.fetch_raw(QueryParams::new()).await
    }
}
