use gw2_application::{ApiResult, Enumerable};
use gw2_domain::EndpointDescriptor;
use gw2_domain::models::Item;

use crate::Gw2Client;

const ITEMS: EndpointDescriptor = EndpointDescriptor::new("items").with_cache_hint(Some(3600));

impl Gw2Client {
    /// `/v2/items`: items by id. There are far more ids than one request can
    /// carry, so prefer [`gw2_application::EnumerableFetch::many`] with the
    /// ids you need over `all`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn items(&self) -> ApiResult<Enumerable<Item>> {
        self.endpoint(ITEMS).build()
    }
}
