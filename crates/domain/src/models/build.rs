use serde::{Deserialize, Serialize};

/// `/v2/build`: the current game build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    /// Build number.
    pub id: u32,
}
