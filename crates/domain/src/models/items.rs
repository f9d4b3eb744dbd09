use serde::{Deserialize, Serialize};

/// `/v2/items/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item id.
    pub id: u32,
    /// Item name.
    pub name: String,
    /// Item type, e.g. `Weapon` or `CraftingMaterial`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Rarity name.
    pub rarity: String,
    /// Required level.
    pub level: u32,
    /// Vendor value in copper.
    pub vendor_value: u64,
    /// Chat code.
    pub chat_link: String,
    /// Icon URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Flavour text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Item flags.
    #[serde(default)]
    pub flags: Vec<String>,
    /// Type-specific details, as raw JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
