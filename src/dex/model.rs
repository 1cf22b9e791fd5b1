use serde::{Deserialize, Serialize};

/// One Pokédex entry. `id` doubles as the record's 1-based position in the
/// source document; the loader rejects documents where they disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

/// One Movedex entry, addressed the same way as [`Pokemon`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub power: u32,
    #[serde(default)]
    pub accuracy: u32,
    #[serde(default)]
    pub pp: u32,
}
