use serde::{Deserialize, Serialize};

/// `/v2/dungeons/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    /// Dungeon name id, e.g. `ascalonian_catacombs`.
    pub id: String,
    /// Story and explorable paths.
    pub paths: Vec<DungeonPath>,
}

/// One path through a dungeon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonPath {
    /// Path id, e.g. `ac_story`.
    pub id: String,
    /// Story or explorable.
    #[serde(rename = "type")]
    pub kind: DungeonPathKind,
}

/// Mode of a dungeon path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DungeonPathKind {
    /// Story mode.
    Story,
    /// Explorable mode.
    Explorable,
}
