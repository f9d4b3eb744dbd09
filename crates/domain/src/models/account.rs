use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `/v2/account`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account GUID.
    pub id: String,
    /// Account name, e.g. `Name.1234`.
    pub name: String,
    /// Seconds played.
    pub age: u64,
    /// Home world id.
    pub world: u32,
    /// Guild ids the account is a member of.
    pub guilds: Vec<String>,
    /// Creation time.
    pub created: DateTime<Utc>,
    /// Owned game content, e.g. `GuildWars2`, `HeartOfThorns`.
    pub access: Vec<String>,
    /// Whether the commander tag is unlocked.
    pub commander: bool,
    /// Guilds this account leads; needs the `guilds` scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_leader: Option<Vec<String>>,
    /// Needs the `progression` scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fractal_level: Option<u32>,
    /// Needs the `progression` scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wvw_rank: Option<u32>,
}

/// `/v2/account/achievements` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountAchievement {
    /// Achievement id.
    pub id: u32,
    /// Whether the achievement is complete.
    pub done: bool,
    /// Completed bit indices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bits: Option<Vec<u32>>,
    /// Current progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<u32>,
    /// Progress needed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Times repeated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeated: Option<u32>,
}

/// `/v2/account/bank` and inventory slot. Empty slots are `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySlot {
    /// Item id.
    pub id: u32,
    /// Stack size.
    pub count: u32,
    /// `Account` or `Character`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding: Option<String>,
    /// Applied skin id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin: Option<u32>,
    /// Upgrade item ids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrades: Option<Vec<u32>>,
}

/// `/v2/account/wallet` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletEntry {
    /// Currency id.
    pub id: u32,
    /// Amount held.
    pub value: u64,
}
