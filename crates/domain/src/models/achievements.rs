use serde::{Deserialize, Serialize};

/// `/v2/achievements/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Achievement id.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Flavour text.
    #[serde(default)]
    pub description: String,
    /// Completion requirement text.
    #[serde(default)]
    pub requirement: String,
    /// `Default` or `ItemSet`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Flags such as `Pvp` or `Repeatable`.
    #[serde(default)]
    pub flags: Vec<String>,
    /// Point tiers.
    #[serde(default)]
    pub tiers: Vec<AchievementTier>,
}

/// One tier of an achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementTier {
    /// Progress needed for the tier.
    pub count: u32,
    /// Achievement points awarded.
    pub points: u32,
}
