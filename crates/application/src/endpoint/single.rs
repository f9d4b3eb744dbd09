//! Single-record endpoints.

use std::marker::PhantomData;

use async_trait::async_trait;
use gw2_domain::{EndpointShape, QueryParams};
use serde::de::DeserializeOwned;

use crate::endpoint::{ClientSession, Endpoint, FromSession, SingleFetch};
use crate::error::ApiResult;

/// An endpoint returning one `T`, e.g. `/v2/build` or `/v2/account`.
#[derive(Debug)]
pub struct Single<T> {
    session: ClientSession,
    _record: PhantomData<fn() -> T>,
}

impl<T> FromSession for Single<T> {
    fn from_session(session: ClientSession) -> Self {
        Self {
            session,
            _record: PhantomData,
        }
    }
}

impl<T> Endpoint for Single<T>
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
        EndpointShape::Single
    }
}

#[async_trait]
impl<T> SingleFetch for Single<T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Output = T;

    async fn get(&self) -> ApiResult<T> {
        self.session.fetch(QueryParams::new()).await
    }
}
