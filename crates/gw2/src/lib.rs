//! Typed async client for the Guild Wars 2 API.
//!
//! [`Gw2Client`] opens endpoint instances; each instance exposes the fetch
//! operations of its shape through the traits in [`prelude`]:
//!
//! - [`SingleFetch::get`] for single records,
//! - [`ListFetch::get`] for whole lists,
//! - [`EnumerableFetch`] (`ids`, `one`, `many`, `all`) for collections
//!   resolved by id, 200 ids per request.
//!
//! ```no_run
//! use gw2::prelude::*;
//!
//! # async fn run() -> gw2::ApiResult<()> {
//! let client = Gw2Client::from_env()?;
//! let colors = client.colors()?;
//! let first = colors
//!     .many_collected(vec![1, 2, 3].into(), Resolution::Concurrent)
//!     .await?;
//! println!("{} colors", first.len());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
mod client;
pub mod treasures;

pub use client::Gw2Client;
pub use gw2_application::{
    ApiError, ApiResult, ClientSession, Endpoint, Enumerable, EnumerableFetch, ItemStream,
    ListAll, ListFetch, RawList, Resolution, Single, SingleFetch,
};
pub use gw2_domain::{
    models, ApiKey, ClientConfig, EndpointDescriptor, EndpointShape, IdSelection, RateLimit,
};
pub use treasures::TreasuresClient;

/// Traits and types needed for everyday use.
pub mod prelude {
    pub use crate::catalog::RecipeQuery;
    pub use crate::{
        ApiError, ApiKey, ApiResult, ClientConfig, Endpoint, EnumerableFetch, Gw2Client,
        IdSelection, ListFetch, Resolution, SingleFetch,
    };
    pub use futures::TryStreamExt;
}
