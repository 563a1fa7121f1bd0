//! Bounty board posts.

use studenthub_core::ApiResult;
use studenthub_core::domain::{ItemId, Post};
use studenthub_shared::dto::PostRequest;

use crate::http::{ApiClient, id_path};

impl ApiClient {
    /// GET /api/posts/{id}
    pub async fn post(&self, id: &ItemId) -> ApiResult<Post> {
        self.get_json(&id_path("/api/posts", id, "")?).await
    }

    /// POST /api/posts
    pub async fn create_post(&self, request: &PostRequest) -> ApiResult<Post> {
        self.post_json("/api/posts", request).await
    }

    /// PUT /api/posts/{id}
    pub async fn update_post(&self, id: &ItemId, request: &PostRequest) -> ApiResult<Post> {
        self.put_json(&id_path("/api/posts", id, "")?, request).await
    }

    /// DELETE /api/posts/{id}
    pub async fn delete_post(&self, id: &ItemId) -> ApiResult<()> {
        self.delete(&id_path("/api/posts", id, "")?).await
    }
}
