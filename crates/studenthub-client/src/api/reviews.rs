use studenthub_core::ApiResult;
use studenthub_core::domain::Review;
use studenthub_shared::dto::Ack;

use crate::http::ApiClient;

impl ApiClient {
    /// POST /api/reviews/new. Invalid reviews never leave the client.
    pub async fn submit_review(&self, review: &Review) -> ApiResult<Ack> {
        review.validate()?;
        self.post_json("/api/reviews/new", review).await
    }
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};
    use serde_json::json;

    use super::*;
    use crate::ClientConfig;
    use studenthub_core::ApiError;
    use studenthub_core::domain::{ItemId, Session};

    fn client(url: String) -> ApiClient {
        ApiClient::with_session(&ClientConfig::new(url), Session::new("tok", None)).unwrap()
    }

    #[tokio::test]
    async fn out_of_range_rating_is_not_sent() {
        let mut server = Server::new_async().await;
        let never = server
            .mock("POST", "/api/reviews/new")
            .expect(0)
            .create_async()
            .await;

        let review = Review {
            reviewer_id: ItemId::Int(1),
            reviewee_id: ItemId::Int(1),
            rating: 9,
            comment: String::new(),
        };
        let err = client(server.url()).submit_review(&review).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
        never.assert_async().await;
    }

    #[tokio::test]
    async fn valid_review_is_posted() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/api/reviews/new")
            .match_body(Matcher::PartialJson(json!({"reviewee_id": 2, "rating": 4})))
            .with_status(201)
            .with_body(r#"{"message": "Review submitted"}"#)
            .create_async()
            .await;

        let review = Review::new(ItemId::Int(1), ItemId::Int(2), 4, "fast pickup").unwrap();
        let ack = client(server.url()).submit_review(&review).await.unwrap();
        assert_eq!(ack.message.as_deref(), Some("Review submitted"));
        m.assert_async().await;
    }
}
