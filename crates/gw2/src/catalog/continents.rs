use async_trait::async_trait;
use gw2_application::{ApiResult, ClientSession, Endpoint, Enumerable, Single, SingleFetch};
use gw2_domain::models::{Continent, Floor};
use gw2_domain::{EndpointDescriptor, EndpointShape};

use crate::Gw2Client;

const CONTINENTS: EndpointDescriptor = EndpointDescriptor::new("continents");
const CONTINENT: EndpointDescriptor = EndpointDescriptor::new("continents/{}");
const FLOORS: EndpointDescriptor = EndpointDescriptor::new("continents/{}/floors");
const FLOOR: EndpointDescriptor = EndpointDescriptor::new("continents/{}/floors/{}");

/// `/v2/continents/{id}` and its floors.
#[derive(Debug)]
pub struct ContinentEndpoint {
    inner: Single<Continent>,
    continent_id: u32,
}

impl ContinentEndpoint {
    /// `/v2/continents/{id}/floors`. Floor ids may be negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn floors(&self) -> ApiResult<Enumerable<Floor, i32>> {
        self.session()
            .derive(FLOORS)
            .segment(self.continent_id)
            .build()
    }

    /// `/v2/continents/{id}/floors/{floor}`
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn floor(&self, floor_id: i32) -> ApiResult<Single<Floor>> {
        self.session()
            .derive(FLOOR)
            .segment(self.continent_id)
            .segment(floor_id)
            .build()
    }
}

impl Endpoint for ContinentEndpoint {
    fn session(&self) -> &ClientSession {
        self.inner.session()
    }

    fn session_mut(&mut self) -> &mut ClientSession {
        self.inner.session_mut()
    }

    fn shape(&self) -> EndpointShape {
        self.inner.shape()
    }
}

#[async_trait]
impl SingleFetch for ContinentEndpoint {
    type Output = Continent;

    async fn get(&self) -> ApiResult<Continent> {
        self.inner.get().await
    }
}

impl Gw2Client {
    /// `/v2/continents`
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn continents(&self) -> ApiResult<Enumerable<Continent>> {
        self.endpoint(CONTINENTS).build()
    }

    /// `/v2/continents/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn continent(&self, continent_id: u32) -> ApiResult<ContinentEndpoint> {
        Ok(ContinentEndpoint {
            inner: self.endpoint(CONTINENT).segment(continent_id).build()?,
            continent_id,
        })
    }
}
