//! Profiles.

use studenthub_core::ApiResult;
use studenthub_core::domain::{ItemId, User};
use studenthub_shared::dto::{Ack, UpdateProfileRequest};

use super::Upload;
use crate::http::{ApiClient, id_path};

impl ApiClient {
    /// GET /api/users/me
    pub async fn me(&self) -> ApiResult<User> {
        self.get_json("/api/users/me").await
    }

    /// GET /api/users/{id}
    pub async fn user(&self, id: &ItemId) -> ApiResult<User> {
        self.get_json(&id_path("/api/users", id, "")?).await
    }

    /// PUT /api/users/update
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> ApiResult<User> {
        self.put_json("/api/users/update", request).await
    }

    /// POST /api/users/profile-picture (multipart, field `image`)
    pub async fn upload_profile_picture(&self, image: Upload) -> ApiResult<Ack> {
        let form = reqwest::multipart::Form::new().part("image", image.into_part()?);
        let req = self
            .authed(self.http().post(self.url("/api/users/profile-picture")).multipart(form))
            .await?;
        self.send(req).await
    }
}
