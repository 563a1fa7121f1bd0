//! Stored light/dark preference.

use studenthub_core::ApiResult;
use studenthub_core::domain::ItemId;
use studenthub_core::theme::ThemeMode;
use studenthub_shared::dto::ThemePreference;

use crate::http::{ApiClient, id_path};

impl ApiClient {
    /// GET /api/lightdark/{user_id}
    pub async fn theme_mode(&self, user_id: &ItemId) -> ApiResult<ThemeMode> {
        let pref: ThemePreference = self.get_json(&id_path("/api/lightdark", user_id, "")?).await?;
        pref.mode.parse()
    }

    /// PUT /api/lightdark/{user_id}
    pub async fn set_theme_mode(&self, user_id: &ItemId, mode: ThemeMode) -> ApiResult<()> {
        let body = ThemePreference {
            mode: mode.to_string(),
        };
        let req = self
            .authed(
                self.http()
                    .put(self.url(&id_path("/api/lightdark", user_id, "")?))
                    .json(&body),
            )
            .await?;
        self.send_unit(req).await
    }
}

#[cfg(test)]
mod tests {
    use mockito::Server;

    use super::*;
    use crate::ClientConfig;
    use studenthub_core::domain::Session;

    #[tokio::test]
    async fn reads_stored_mode() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/api/lightdark/4")
            .with_status(200)
            .with_body(r#"{"lightdark": "Dark"}"#)
            .create_async()
            .await;

        let client =
            ApiClient::with_session(&ClientConfig::new(server.url()), Session::new("tok", None))
                .unwrap();
        assert_eq!(client.theme_mode(&ItemId::Int(4)).await.unwrap(), ThemeMode::Dark);
    }
}
