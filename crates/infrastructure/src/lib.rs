//! Guild Wars 2 API client - infrastructure
//!
//! This crate provides the reqwest implementation of the transport port and
//! the request throttle shared by every transport talking to one API.

pub mod adapters;
pub mod throttle;

pub use adapters::{ReqwestConnector, ReqwestTransport};
pub use throttle::Throttle;
