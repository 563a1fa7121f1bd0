use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ItemId, Listable, timestamp};

/// Campus event listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: ItemId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, alias = "date", with = "timestamp")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub event_user_id: Option<ItemId>,
    #[serde(default)]
    pub event_user_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Listable for Event {
    fn item_id(&self) -> ItemId {
        self.id.clone()
    }
}
