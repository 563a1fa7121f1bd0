use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ItemId, timestamp};

/// Direct message between two users.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: ItemId,
    pub sender_id: ItemId,
    pub receiver_id: ItemId,
    #[serde(default)]
    pub content: String,
    #[serde(default, with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Inbox row: the latest message exchanged with one other user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub user_id: ItemId,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default, with = "timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}
