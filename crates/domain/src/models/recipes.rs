use serde::{Deserialize, Serialize};

/// `/v2/recipes/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe id.
    pub id: u32,
    /// Recipe type, e.g. `Refinement`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Produced item id.
    pub output_item_id: u32,
    /// Produced stack size.
    pub output_item_count: u32,
    /// Crafting time in milliseconds.
    pub time_to_craft_ms: u32,
    /// Crafting disciplines that can make it.
    pub disciplines: Vec<String>,
    /// Minimum discipline rating.
    pub min_rating: u32,
    /// Ingredients.
    pub ingredients: Vec<RecipeIngredient>,
    /// Chat code.
    pub chat_link: String,
}

/// One recipe ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// `Item`, `Currency` or `GuildUpgrade`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Ingredient id.
    #[serde(alias = "item_id")]
    pub id: u32,
    /// Amount needed.
    pub count: u32,
}
