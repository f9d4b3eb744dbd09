//! Guild Wars 2 API client - application layer
//!
//! This crate holds the endpoint contract: the shapes an endpoint can take,
//! the fetch operations each shape supports, response classification and
//! bulk resolution. Network access goes through the [`ports::Transport`]
//! port, implemented in the infrastructure crate.

pub mod bulk;
pub mod decode;
pub mod endpoint;
pub mod error;
pub mod factory;
pub mod ports;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod testing;

pub use bulk::{ItemStream, Resolution};
pub use decode::Decoder;
pub use endpoint::{
    ClientSession, Endpoint, EndpointBuilder, Enumerable, EnumerableFetch, FromSession, ListAll,
    ListFetch, RawList, Single, SingleFetch,
};
pub use error::{ApiError, ApiResult};
pub use factory::ClientFactory;
pub use ports::{Connector, Transport, TransportError};
