use gw2_application::{ApiResult, Enumerable};
use gw2_domain::EndpointDescriptor;
use gw2_domain::models::Color;

use crate::Gw2Client;

const COLORS: EndpointDescriptor = EndpointDescriptor::new("colors").with_cache_hint(Some(3600));

impl Gw2Client {
    /// `/v2/colors`: dye colors by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn colors(&self) -> ApiResult<Enumerable<Color>> {
        self.endpoint(COLORS).build()
    }
}
