use serde::{Deserialize, Serialize};

/// `/v2/files/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    /// File name id, e.g. `map_complete`.
    pub id: String,
    /// Render service URL.
    pub icon: String,
}
