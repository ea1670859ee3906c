use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SetRow — One row of card-set metadata from the reference database
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRow {
    pub name: String,
    pub display_name: String,
    /// Lower-cased haystack used by substring search.
    pub search_text: String,
    pub sport: String,
}
