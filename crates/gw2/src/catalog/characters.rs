use async_trait::async_trait;
use gw2_application::{ApiResult, ClientSession, Endpoint, Enumerable, Single, SingleFetch};
use gw2_domain::models::{BuildTab, Character, CharacterCore};
use gw2_domain::{EndpointDescriptor, EndpointShape};

use crate::Gw2Client;

const CHARACTERS: EndpointDescriptor = EndpointDescriptor::new("characters");
const CHARACTER: EndpointDescriptor = EndpointDescriptor::new("characters/{}");
const CORE: EndpointDescriptor = EndpointDescriptor::new("characters/{}/core");
const BUILD_TABS: EndpointDescriptor =
    EndpointDescriptor::new("characters/{}/buildtabs").with_ids_param("tabs");

/// `/v2/characters/{name}` and the endpoints below it.
#[derive(Debug)]
pub struct CharacterEndpoint {
    inner: Single<Character>,
    name: String,
}

impl CharacterEndpoint {
    /// The character name, unencoded.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `/v2/characters/{name}/core`
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn core(&self) -> ApiResult<Single<CharacterCore>> {
        self.session().derive(CORE).segment(&self.name).build()
    }

    /// `/v2/characters/{name}/buildtabs`, keyed by tab number. Bulk lookups
    /// use the `tabs` parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn build_tabs(&self) -> ApiResult<Enumerable<BuildTab>> {
        self.session().derive(BUILD_TABS).segment(&self.name).build()
    }
}

impl Endpoint for CharacterEndpoint {
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
impl SingleFetch for CharacterEndpoint {
    type Output = Character;

    async fn get(&self) -> ApiResult<Character> {
        self.inner.get().await
    }
}

impl Gw2Client {
    /// `/v2/characters`: the key's characters, keyed by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn characters(&self) -> ApiResult<Enumerable<Character, String>> {
        self.endpoint(CHARACTERS).build()
    }

    /// `/v2/characters/{name}`. Names may contain spaces; they are encoded
    /// as one path segment.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty or the endpoint cannot be opened.
    pub fn character(&self, name: &str) -> ApiResult<CharacterEndpoint> {
        Ok(CharacterEndpoint {
            inner: self.endpoint(CHARACTER).segment(name).build()?,
            name: name.to_string(),
        })
    }
}
