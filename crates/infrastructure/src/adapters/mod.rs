//! Adapters implementing the application ports.

mod reqwest_connector;
mod reqwest_transport;

pub use reqwest_connector::ReqwestConnector;
pub use reqwest_transport::ReqwestTransport;
