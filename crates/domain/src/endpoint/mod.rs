//! Endpoint identity: static descriptors and the paths they resolve to.

mod descriptor;
mod path;

pub use descriptor::{DEFAULT_IDS_PARAM, EndpointDescriptor, EndpointShape, IdLookup};
pub use path::ResourcePath;
