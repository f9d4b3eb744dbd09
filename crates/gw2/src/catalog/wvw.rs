use gw2_application::{ApiResult, Enumerable};
use gw2_domain::EndpointDescriptor;
use gw2_domain::models::Match;

use crate::Gw2Client;

const MATCHES: EndpointDescriptor = EndpointDescriptor::new("wvw/matches")
    .with_cache_hint(Some(30))
    .with_all_ids();

impl Gw2Client {
    /// `/v2/wvw/matches`: current World vs. World matchups, keyed by ids
    /// such as `"1-2"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn wvw_matches(&self) -> ApiResult<Enumerable<Match, String>> {
        self.endpoint(MATCHES).build()
    }
}
