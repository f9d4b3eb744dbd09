use async_trait::async_trait;
use gw2_application::{
    ApiError, ApiResult, ClientSession, Endpoint, ListFetch, RawList, Single, SingleFetch,
};
use gw2_domain::models::Guild;
use gw2_domain::{EndpointDescriptor, EndpointShape};
use tracing::debug;

use crate::Gw2Client;

const GUILD: EndpointDescriptor = EndpointDescriptor::new("guild/{}");
const SEARCH: EndpointDescriptor = EndpointDescriptor::new("guild/search").with_cache_hint(None);

/// `/v2/guild/search?name=<name>`: resolves a guild name to its record.
#[derive(Debug)]
pub struct GuildSearch {
    inner: RawList<String>,
    name: String,
}

impl GuildSearch {
    /// The name being searched for.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of the guilds with exactly this name; usually zero or one.
    ///
    /// # Errors
    ///
    /// Returns transport, classification and decode errors.
    pub async fn ids(&self) -> ApiResult<Vec<String>> {
        self.inner.get().await
    }
}

impl Endpoint for GuildSearch {
    fn session(&self) -> &ClientSession {
        self.inner.session()
    }

    fn session_mut(&mut self) -> &mut ClientSession {
        self.inner.session_mut()
    }

    fn shape(&self) -> EndpointShape {
        EndpointShape::Single
    }
}

#[async_trait]
impl SingleFetch for GuildSearch {
    type Output = Guild;

    /// Fetches the first matching guild.
    ///
    /// Fails with [`ApiError::GuildNotFound`] if no guild has this name.
    async fn get(&self) -> ApiResult<Guild> {
        let ids = self.ids().await?;
        let Some(id) = ids.first() else {
            debug!(name = %self.name, "guild search returned no ids");
            return Err(ApiError::GuildNotFound {
                name: self.name.clone(),
            });
        };
        let guild: Single<Guild> = self.session().derive(GUILD).segment(id).build()?;
        guild.get().await
    }
}

impl Gw2Client {
    /// `/v2/guild/{id}`: public guild details.
    ///
    /// # Errors
    ///
    /// Returns an error if `guild_id` is empty, `.` or `..`, or if the
    /// endpoint cannot be opened.
    pub fn guild(&self, guild_id: &str) -> ApiResult<Single<Guild>> {
        self.endpoint(GUILD).segment(guild_id).build()
    }

    /// Looks a guild up by its exact name.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn guild_search(&self, name: &str) -> ApiResult<GuildSearch> {
        Ok(GuildSearch {
            inner: self.endpoint(SEARCH).param("name", name).build()?,
            name: name.to_string(),
        })
    }
}
