//! Outbound request types

mod query;
mod spec;

pub use query::{QueryParam, QueryParams};
pub use spec::ApiRequest;
