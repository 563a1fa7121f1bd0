//! Login and registration.

use studenthub_core::domain::{Session, User};
use studenthub_core::{ApiError, ApiResult};
use studenthub_shared::dto::{Ack, LoginRequest, LoginResponse, RegisterRequest};

use crate::http::ApiClient;

impl ApiClient {
    /// POST /api/login - stores and returns the new session.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Session> {
        let body = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let req = self.http().post(self.url("/api/login")).json(&body);
        let resp: LoginResponse = self.send(req).await?;

        if resp.token.trim().is_empty() {
            return Err(ApiError::Decode("login response without token".to_string()));
        }
        let user = resp
            .user
            .map(serde_json::from_value::<User>)
            .transpose()
            .map_err(|e| ApiError::Decode(format!("login user: {}", e)))?;

        let session = Session::new(resp.token, user);
        self.set_session(session.clone()).await;
        tracing::info!(user = ?session.user_id(), "logged in");
        Ok(session)
    }

    /// POST /api/users/register
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<Ack> {
        if request.email.is_empty() || !request.email.contains('@') {
            return Err(ApiError::InvalidInput("invalid email address".to_string()));
        }
        if request.password.len() < 8 {
            return Err(ApiError::InvalidInput(
                "password must be at least 8 characters".to_string(),
            ));
        }
        let req = self
            .http()
            .post(self.url("/api/users/register"))
            .json(request);
        self.send(req).await
    }
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};
    use serde_json::json;

    use super::*;
    use crate::ClientConfig;
    use studenthub_core::domain::ItemId;

    #[tokio::test]
    async fn login_stores_session() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/api/login")
            .match_body(Matcher::Json(json!({"email": "ana@uni.edu", "password": "hunter22"})))
            .with_status(200)
            .with_body(r#"{"token": "jwt-1", "user": {"id": 4, "username": "ana"}}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&ClientConfig::new(server.url())).unwrap();
        let session = client.login(" ana@uni.edu ", "hunter22").await.unwrap();

        m.assert_async().await;
        assert_eq!(session.token, "jwt-1");
        assert_eq!(session.user_id(), Some(&ItemId::Int(4)));
        assert_eq!(client.token().await, "jwt-1");
    }

    #[tokio::test]
    async fn bad_credentials_are_unauthorized() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/api/login")
            .with_status(401)
            .with_body(r#"{"message": "Invalid credentials"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&ClientConfig::new(server.url())).unwrap();
        assert_eq!(
            client.login("ana@uni.edu", "nope").await,
            Err(ApiError::Unauthorized)
        );
        assert!(!client.session().await.is_authenticated());
    }

    #[tokio::test]
    async fn register_validates_before_sending() {
        let client = ApiClient::new(&ClientConfig::new("http://127.0.0.1:9")).unwrap();
        let request = RegisterRequest {
            username: "ana".into(),
            email: "not-an-email".into(),
            password: "long-enough".into(),
        };
        assert!(matches!(
            client.register(&request).await,
            Err(ApiError::InvalidInput(_))
        ));
    }
}
