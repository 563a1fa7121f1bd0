//! Direct messages.

use studenthub_core::ApiResult;
use studenthub_core::domain::{Conversation, ItemId, Message};
use studenthub_shared::dto::SendMessageRequest;

use crate::http::{ApiClient, id_path};

impl ApiClient {
    /// GET /api/messages/conversations
    pub async fn conversations(&self) -> ApiResult<Vec<Conversation>> {
        self.get_json("/api/messages/conversations").await
    }

    /// GET /api/messages/{user_id} - thread with one user, oldest first.
    pub async fn thread(&self, user_id: &ItemId) -> ApiResult<Vec<Message>> {
        self.get_json(&id_path("/api/messages", user_id, "")?).await
    }

    /// POST /api/messages/send
    pub async fn send_message(&self, to: &ItemId, content: &str) -> ApiResult<Message> {
        let body = SendMessageRequest {
            receiver_id: to.clone(),
            content: content.to_string(),
        };
        self.post_json("/api/messages/send", &body).await
    }
}
