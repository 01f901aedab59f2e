use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// One card's content. Supplied by the host and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    #[serde(alias = "name")]
    pub label: CompactString,
    #[serde(alias = "emoji")]
    pub illustration: CompactString,
    #[serde(default)]
    pub description: CompactString,
}

impl Item {
    pub fn new(id: u64, label: &str, illustration: &str, description: &str) -> Self {
        Self {
            id,
            label: CompactString::from(label),
            illustration: CompactString::from(illustration),
            description: CompactString::from(description),
        }
    }
}
