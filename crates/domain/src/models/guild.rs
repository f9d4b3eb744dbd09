use serde::{Deserialize, Serialize};

/// `/v2/guild/:id`, public fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guild {
    /// Guild GUID.
    pub id: String,
    /// Guild name.
    pub name: String,
    /// Guild tag.
    pub tag: String,
    /// Emblem layers, as raw JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emblem: Option<serde_json::Value>,
}
