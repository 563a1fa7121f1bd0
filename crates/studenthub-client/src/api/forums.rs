//! Forum / tips feed interactions.

use studenthub_core::ApiResult;
use studenthub_core::domain::{ItemId, Tip};
use studenthub_shared::dto::{Ack, ReplyRequest, ReplyVoteRequest, TipRequest};

use crate::http::{ApiClient, id_path};

/// Direction of a reply vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Up,
    Down,
}

impl Vote {
    fn value(self) -> i8 {
        match self {
            Vote::Up => 1,
            Vote::Down => -1,
        }
    }
}

impl ApiClient {
    /// POST /api/forums
    pub async fn create_tip(&self, request: &TipRequest) -> ApiResult<Tip> {
        self.post_json("/api/forums", request).await
    }

    /// POST /api/forums/{id}/like
    pub async fn like_tip(&self, id: &ItemId) -> ApiResult<Ack> {
        self.post_json(&id_path("/api/forums", id, "/like")?, &serde_json::json!({}))
            .await
    }

    /// POST /api/forums/{id}/dislike
    pub async fn dislike_tip(&self, id: &ItemId) -> ApiResult<Ack> {
        self.post_json(&id_path("/api/forums", id, "/dislike")?, &serde_json::json!({}))
            .await
    }

    /// POST /api/forums/{id}/reply
    pub async fn reply_to_tip(&self, id: &ItemId, content: &str) -> ApiResult<Ack> {
        let body = ReplyRequest {
            content: content.to_string(),
        };
        self.post_json(&id_path("/api/forums", id, "/reply")?, &body).await
    }

    /// POST /api/forums/{id}/reply-vote
    pub async fn vote_reply(&self, tip_id: &ItemId, reply_id: &ItemId, vote: Vote) -> ApiResult<Ack> {
        let body = ReplyVoteRequest {
            reply_id: reply_id.clone(),
            vote: vote.value(),
        };
        self.post_json(&id_path("/api/forums", tip_id, "/reply-vote")?, &body)
            .await
    }
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};
    use serde_json::json;

    use super::*;
    use crate::ClientConfig;
    use studenthub_core::domain::Session;

    #[tokio::test]
    async fn reply_vote_body() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/api/forums/5/reply-vote")
            .match_body(Matcher::Json(json!({"reply_id": 9, "vote": -1})))
            .with_status(200)
            .with_body(r#"{"message": "ok"}"#)
            .create_async()
            .await;

        let client =
            ApiClient::with_session(&ClientConfig::new(server.url()), Session::new("tok", None))
                .unwrap();
        let ack = client
            .vote_reply(&ItemId::Int(5), &ItemId::Int(9), Vote::Down)
            .await
            .unwrap();

        m.assert_async().await;
        assert_eq!(ack.message.as_deref(), Some("ok"));
    }
}
