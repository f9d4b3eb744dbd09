use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `/v2/characters/:name/core`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterCore {
    /// Character name.
    pub name: String,
    /// Race name.
    pub race: String,
    /// `Male` or `Female`.
    pub gender: String,
    /// Profession name.
    pub profession: String,
    /// Character level.
    pub level: u8,
    /// Represented guild id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild: Option<String>,
    /// Seconds played.
    pub age: u64,
    /// Creation time.
    pub created: DateTime<Utc>,
    /// Number of deaths.
    pub deaths: u32,
    /// Selected title id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<u32>,
}

/// `/v2/characters/:name`, trimmed to the core fields plus crafting levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Core attributes.
    #[serde(flatten)]
    pub core: CharacterCore,
    /// Active build tab number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_build_tab: Option<u32>,
    /// Number of unlocked build tabs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_tabs_unlocked: Option<u32>,
}

/// `/v2/characters/:name/buildtabs` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildTab {
    /// Tab number, starting at 1.
    pub tab: u32,
    /// Whether this tab is active.
    pub is_active: bool,
    /// The build stored in this tab.
    pub build: TabBuild,
}

/// The build inside a build tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabBuild {
    /// Player-chosen name.
    pub name: String,
    /// Profession name.
    pub profession: String,
    /// Selected specializations, as raw JSON.
    #[serde(default)]
    pub specializations: Vec<serde_json::Value>,
}
