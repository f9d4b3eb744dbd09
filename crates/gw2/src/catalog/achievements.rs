use gw2_application::{ApiResult, Enumerable};
use gw2_domain::EndpointDescriptor;
use gw2_domain::models::Achievement;

use crate::Gw2Client;

const ACHIEVEMENTS: EndpointDescriptor = EndpointDescriptor::new("achievements");

impl Gw2Client {
    /// `/v2/achievements`
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn achievements(&self) -> ApiResult<Enumerable<Achievement>> {
        self.endpoint(ACHIEVEMENTS).build()
    }
}
