use gw2_application::{ApiResult, Single};
use gw2_domain::EndpointDescriptor;
use gw2_domain::models::Build;

use crate::Gw2Client;

const BUILD: EndpointDescriptor = EndpointDescriptor::new("build").with_cache_hint(Some(60));

impl Gw2Client {
    /// `/v2/build`: the current game build id.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn build(&self) -> ApiResult<Single<Build>> {
        self.endpoint(BUILD).build()
    }
}
