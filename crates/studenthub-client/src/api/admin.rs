//! Admin moderation endpoints. The server enforces the admin role; these
//! calls fail with `Forbidden` for everyone else.

use studenthub_core::ApiResult;
use studenthub_core::domain::ItemId;
use studenthub_shared::dto::BanRequest;

use crate::http::{ApiClient, id_path};

impl ApiClient {
    /// PUT /api/users/admin/ban/{id}
    pub async fn set_user_banned(&self, id: &ItemId, banned: bool) -> ApiResult<()> {
        let req = self
            .authed(
                self.http()
                    .put(self.url(&id_path("/api/users/admin/ban", id, "")?))
                    .json(&BanRequest { banned }),
            )
            .await?;
        self.send_unit(req).await
    }

    /// DELETE /api/users/admin/users/{id}
    pub async fn admin_delete_user(&self, id: &ItemId) -> ApiResult<()> {
        self.delete(&id_path("/api/users/admin/users", id, "")?).await
    }

    /// DELETE /api/users/admin/posts/{id}
    pub async fn admin_remove_post(&self, id: &ItemId) -> ApiResult<()> {
        self.delete(&id_path("/api/users/admin/posts", id, "")?).await
    }
}
