//! Guild Wars 2 API client - domain types
//!
//! This crate defines the pure building blocks of the client: endpoint
//! descriptors and resolved paths, id selections and chunking, requests and
//! responses as plain data, status classification, configuration and the
//! response models. Nothing here performs I/O.

pub mod auth;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod ids;
pub mod models;
pub mod request;
pub mod response;

pub use auth::ApiKey;
pub use config::{ClientConfig, RateLimit};
pub use endpoint::{EndpointDescriptor, EndpointShape, IdLookup, ResourcePath};
pub use error::{DomainError, DomainResult};
pub use ids::{EndpointId, IdSelection, MAX_IDS_PER_REQUEST};
pub use request::{ApiRequest, QueryParam, QueryParams};
pub use response::{ApiResponse, KnownCondition, StatusCode, StatusRules};
