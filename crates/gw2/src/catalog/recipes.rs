use gw2_application::{ApiResult, Enumerable, RawList};
use gw2_domain::EndpointDescriptor;
use gw2_domain::models::Recipe;

use crate::Gw2Client;

const RECIPES: EndpointDescriptor = EndpointDescriptor::new("recipes").with_cache_hint(Some(3600));
const SEARCH: EndpointDescriptor = EndpointDescriptor::new("recipes/search");

/// What a recipe search matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeQuery {
    /// Recipes using this item as an ingredient.
    Input(u32),
    /// Recipes producing this item.
    Output(u32),
}

impl RecipeQuery {
    const fn key(self) -> &'static str {
        match self {
            Self::Input(_) => "input",
            Self::Output(_) => "output",
        }
    }

    const fn item_id(self) -> u32 {
        match self {
            Self::Input(id) | Self::Output(id) => id,
        }
    }
}

impl Gw2Client {
    /// `/v2/recipes`
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn recipes(&self) -> ApiResult<Enumerable<Recipe>> {
        self.endpoint(RECIPES).build()
    }

    /// `/v2/recipes/search`: ids of recipes matching `query`. Resolve them
    /// with [`Gw2Client::recipes`].
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be opened.
    pub fn recipe_search(&self, query: RecipeQuery) -> ApiResult<RawList<u32>> {
        self.endpoint(SEARCH)
            .param(query.key(), query.item_id().to_string())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_query_params() {
        assert_eq!(RecipeQuery::Input(19721).key(), "input");
        assert_eq!(RecipeQuery::Output(46731).key(), "output");
        assert_eq!(RecipeQuery::Output(46731).item_id(), 46731);
    }
}
