//! Record identifiers as they appear on the wire.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend record identifier.
///
/// Most tables use integer keys, a few hand out strings; both are kept
/// verbatim so a record survives a round trip to the server unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(i64),
    Text(String),
}

impl ItemId {
    /// Parse user input: integers become `Int`, everything else `Text`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        raw.parse::<i64>()
            .map(ItemId::Int)
            .unwrap_or_else(|_| ItemId::Text(raw.to_string()))
    }
}

impl Default for ItemId {
    fn default() -> Self {
        ItemId::Int(0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Int(id) => f.pad(&id.to_string()),
            ItemId::Text(id) => f.pad(id),
        }
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        ItemId::Int(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId::Text(id.to_string())
    }
}
