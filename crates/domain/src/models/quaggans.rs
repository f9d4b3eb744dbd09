use serde::{Deserialize, Serialize};

/// `/v2/quaggans/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quaggan {
    /// Quaggan name id.
    pub id: String,
    /// Image URL.
    pub url: String,
}
