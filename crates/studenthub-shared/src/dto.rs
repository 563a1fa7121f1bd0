//! Data Transfer Objects - request/response bodies of the StudentHub API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ItemId;

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response to a successful login. `user` is decoded by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "access_token")]
    pub token: String,
    #[serde(default)]
    pub user: Option<Value>,
}

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Partial profile update; absent fields are left alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Bounty board post body, used for create and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostRequest {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Product listing body. Sent as multipart text fields next to the image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductRequest {
    pub title: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// New forum entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TipRequest {
    pub title: String,
    pub content: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Reply under a forum entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyRequest {
    pub content: String,
}

/// Up- or down-vote on a reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyVoteRequest {
    pub reply_id: ItemId,
    /// `1` or `-1`.
    pub vote: i8,
}

/// Direct message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub receiver_id: ItemId,
    pub content: String,
}

/// New event listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventRequest {
    pub title: String,
    pub description: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// RFC 3339 start time.
    #[serde(rename = "date", skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<String>,
}

/// Stored light/dark preference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemePreference {
    #[serde(rename = "lightdark", alias = "mode", alias = "theme")]
    pub mode: String,
}

/// Admin ban/unban toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BanRequest {
    pub banned: bool,
}

/// Plain acknowledgement returned by mutating endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

/// Wrapped list response carrying paging hints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    #[serde(alias = "data", alias = "results")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default, alias = "hasMore")]
    pub has_more: Option<bool>,
    #[serde(default, alias = "nextPage")]
    pub next_page: Option<u32>,
}

/// A list endpoint answers with either a bare array or an envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListBody<T> {
    Bare(Vec<T>),
    Envelope(ListEnvelope<T>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_body_accepts_both_shapes() {
        let bare: ListBody<u32> = serde_json::from_str("[1, 2]").unwrap();
        assert!(matches!(bare, ListBody::Bare(ref v) if v == &[1, 2]));

        let wrapped: ListBody<u32> =
            serde_json::from_str(r#"{"data": [3], "total": 41, "hasMore": true}"#).unwrap();
        match wrapped {
            ListBody::Envelope(env) => {
                assert_eq!(env.items, vec![3]);
                assert_eq!(env.total, Some(41));
                assert_eq!(env.has_more, Some(true));
            }
            ListBody::Bare(_) => panic!("expected envelope"),
        }
    }

    #[test]
    fn optional_fields_are_omitted() {
        let body = serde_json::to_value(PostRequest {
            title: "Fix my bike".into(),
            description: "flat tire".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"title": "Fix my bike", "description": "flat tire"}));

        let pref = serde_json::to_value(ThemePreference { mode: "dark".into() }).unwrap();
        assert_eq!(pref, serde_json::json!({"lightdark": "dark"}));
    }
}
