use gw2_application::{ApiResult, Enumerable};
use gw2_domain::EndpointDescriptor;
use gw2_domain::models::File;

use crate::Gw2Client;

const FILES: EndpointDescriptor = EndpointDescriptor::new("files").with_all_ids();

impl Gw2Client {
    /// `/v2/files`: commonly used assets. Accepts `ids=all`, so `all` costs a
    /// single request.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn files(&self) -> ApiResult<Enumerable<File, String>> {
        self.endpoint(FILES).build()
    }
}
