use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// `/v2/continents/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Continent {
    /// Continent id (1 = Tyria, 2 = Mists).
    pub id: u32,
    /// Continent name.
    pub name: String,
    /// Width and height in continent coordinates.
    pub continent_dims: [u32; 2],
    /// Minimum zoom level.
    pub min_zoom: u32,
    /// Maximum zoom level.
    pub max_zoom: u32,
    /// Floor ids.
    pub floors: Vec<i32>,
}

/// `/v2/continents/:id/floors/:floor`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    /// Floor id.
    pub id: i32,
    /// Texture width and height.
    pub texture_dims: [u32; 2],
    /// Regions keyed by region id, kept as raw JSON.
    #[serde(default)]
    pub regions: BTreeMap<String, serde_json::Value>,
}
