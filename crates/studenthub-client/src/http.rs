//! Shared request plumbing: URL building, bearer auth, status mapping.

use std::sync::Arc;

use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use studenthub_core::domain::{ItemId, Session};
use studenthub_core::{ApiError, ApiResult};
use studenthub_shared::ErrorResponse;

use crate::config::ClientConfig;

/// StudentHub REST client.
///
/// Cheap to clone; clones share the connection pool and the session.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<RwLock<Session>>,
}

/// Map a transport failure into the client error type.
pub(crate) fn network(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Network("request timed out".to_string())
    } else if err.is_decode() {
        ApiError::Decode(err.to_string())
    } else {
        ApiError::Network(err.to_string())
    }
}

/// `{prefix}/{id}{suffix}` with the id percent-encoded as a single path
/// segment, so a text id cannot reach another route.
pub(crate) fn id_path(prefix: &str, id: &ItemId, suffix: &str) -> ApiResult<String> {
    let raw = id.to_string();
    if matches!(raw.as_str(), "" | "." | "..") {
        return Err(ApiError::InvalidInput(format!("invalid id: {:?}", raw)));
    }

    let mut url = reqwest::Url::parse("http://localhost/")
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidInput("cannot build request path".to_string()))?
        .clear()
        .push(&raw);
    Ok(format!("{}{}{}", prefix, url.path(), suffix))
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        Self::with_session(config, Session::default())
    }

    /// Client that starts out with an existing session.
    pub fn with_session(config: &ClientConfig, session: Session) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(network)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session: Arc::new(RwLock::new(session)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    pub async fn set_session(&self, session: Session) {
        *self.session.write().await = session;
    }

    /// Forget the current session.
    pub async fn logout(&self) {
        self.set_session(Session::default()).await;
    }

    pub async fn token(&self) -> String {
        self.session.read().await.token.clone()
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the session's bearer token; fails fast without one.
    pub(crate) async fn authed(&self, builder: RequestBuilder) -> ApiResult<RequestBuilder> {
        let token = self.token().await;
        if token.trim().is_empty() {
            return Err(ApiError::MissingToken);
        }
        Ok(builder.bearer_auth(token))
    }

    /// Send a request and decode a JSON body. An empty success body (204)
    /// decodes as `{}`, which suits acknowledgement types.
    pub(crate) async fn send<R: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<R> {
        let resp = Self::checked(builder).await?;
        let bytes = resp.bytes().await.map_err(network)?;
        let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &bytes
        };
        serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send a request whose body is irrelevant.
    pub(crate) async fn send_unit(&self, builder: RequestBuilder) -> ApiResult<()> {
        Self::checked(builder).await.map(|_| ())
    }

    async fn checked(builder: RequestBuilder) -> ApiResult<reqwest::Response> {
        let resp = builder.send().await.map_err(network)?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let url = resp.url().path().to_string();
        let body = resp.text().await.unwrap_or_default();
        let mut message = ErrorResponse::describe(&body);
        if message.is_empty() {
            message = url.clone();
        }
        let err = ApiError::from_status(status.as_u16(), message);
        tracing::warn!(status = status.as_u16(), path = %url, error = %err, "request failed");
        Err(err)
    }

    pub(crate) async fn get_json<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        let req = self.authed(self.http.get(self.url(path))).await?;
        self.send(req).await
    }

    pub(crate) async fn post_json<B, R>(&self, path: &str, body: &B) -> ApiResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let req = self.authed(self.http.post(self.url(path)).json(body)).await?;
        self.send(req).await
    }

    pub(crate) async fn put_json<B, R>(&self, path: &str, body: &B) -> ApiResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let req = self.authed(self.http.put(self.url(path)).json(body)).await?;
        self.send(req).await
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        let req = self.authed(self.http.delete(self.url(path))).await?;
        self.send_unit(req).await
    }
}
