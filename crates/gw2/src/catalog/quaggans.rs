use gw2_application::{ApiResult, Enumerable};
use gw2_domain::EndpointDescriptor;
use gw2_domain::models::Quaggan;

use crate::Gw2Client;

const QUAGGANS: EndpointDescriptor = EndpointDescriptor::new("quaggans");

impl Gw2Client {
    /// `/v2/quaggans`: quaggan images, keyed by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn quaggans(&self) -> ApiResult<Enumerable<Quaggan, String>> {
        self.endpoint(QUAGGANS).build()
    }
}
