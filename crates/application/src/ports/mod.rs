//! Port definitions (interfaces)
//!
//! Ports define the boundary between the endpoint layer and the network.
//! Adapters in the infrastructure layer implement them.

mod transport;

pub use transport::{Connector, Transport, TransportError};
