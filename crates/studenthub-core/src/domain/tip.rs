use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ItemId, Listable, timestamp};

/// Forum entry shown in the tips feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    pub id: ItemId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub dislikes: i64,
    #[serde(default)]
    pub forum_user_id: Option<ItemId>,
    #[serde(default)]
    pub forum_user_name: Option<String>,
    #[serde(default)]
    pub replies: Vec<Reply>,
    #[serde(default, with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Tip {
    pub fn score(&self) -> i64 {
        self.likes - self.dislikes
    }
}

impl Listable for Tip {
    fn item_id(&self) -> ItemId {
        self.id.clone()
    }
}

/// Reply under a forum entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub id: ItemId,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub reply_user_id: Option<ItemId>,
    #[serde(default)]
    pub reply_user_name: Option<String>,
    #[serde(default)]
    pub votes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_forum_entry() {
        let tip: Tip = serde_json::from_str(
            r#"{"id": 5, "title": "Cheap textbooks", "content": "library sale",
                "type": "study", "likes": 4, "dislikes": 1,
                "replies": [{"id": 9, "content": "thanks", "votes": 2}],
                "created_at": "2024-05-02 08:30:00"}"#,
        )
        .unwrap();
        assert_eq!(tip.kind.as_deref(), Some("study"));
        assert_eq!(tip.score(), 3);
        assert_eq!(tip.replies[0].id, ItemId::Int(9));
        assert!(tip.created_at.is_some());
    }
}
