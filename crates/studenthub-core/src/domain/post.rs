use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ItemId, Listable, amount, timestamp};

/// Bounty board post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: ItemId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "amount::deserialize")]
    pub price: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub post_user_id: Option<ItemId>,
    #[serde(default)]
    pub post_user_name: Option<String>,
    #[serde(default, with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Post {
    pub fn is_owned_by(&self, user_id: &ItemId) -> bool {
        self.post_user_id.as_ref() == Some(user_id)
    }
}

impl Listable for Post {
    fn item_id(&self) -> ItemId {
        self.id.clone()
    }
}
