use gw2_application::{ApiResult, RawList, Single};
use gw2_domain::EndpointDescriptor;
use gw2_domain::models::Dungeon;

use crate::Gw2Client;

const DUNGEONS: EndpointDescriptor = EndpointDescriptor::new("dungeons");

impl Gw2Client {
    /// `/v2/dungeons`: every dungeon id.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn dungeons(&self) -> ApiResult<RawList> {
        self.endpoint(DUNGEONS).build()
    }

    /// `/v2/dungeons?id=<id>`: one dungeon with its paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn dungeon(&self, id: &str) -> ApiResult<Single<Dungeon>> {
        self.endpoint(DUNGEONS).param("id", id).build()
    }
}
