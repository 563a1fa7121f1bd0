//! HTTP-backed page source for the paginated list.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use studenthub_core::domain::{Event, ItemId, Listable, Post, Product, Tip, User};
use studenthub_core::pagination::{FilterParam, ListConfig, PaginatedList};
use studenthub_core::ports::{Page, PageRequest, PageSource};
use studenthub_core::{ApiError, ApiResult};
use studenthub_shared::dto::ListBody;

use crate::http::{ApiClient, id_path};

/// A list endpoint: where it lives, how big its pages are and how it
/// takes its filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEndpoint {
    pub path: String,
    pub page_size: usize,
    pub filter: Option<FilterParam>,
}

impl ListEndpoint {
    pub fn new(path: impl Into<String>, page_size: usize, filter: Option<FilterParam>) -> Self {
        Self {
            path: path.into(),
            page_size,
            filter,
        }
    }

    /// Bounty board: GET /api/posts?page=N&search=..&category=a,b
    pub fn posts() -> Self {
        Self::new("/api/posts", 20, Some(FilterParam::joined("category")))
    }

    /// Posts by one user, for the post management screen.
    pub fn user_posts(user_id: &ItemId) -> ApiResult<Self> {
        Ok(Self::new(id_path("/api/posts/user", user_id, "")?, 10, None))
    }

    pub fn products() -> Self {
        Self::new("/api/products", 20, Some(FilterParam::joined("category")))
    }

    /// Tips feed: GET /api/forums?page=N&type=a&type=b
    pub fn tips() -> Self {
        Self::new("/api/forums", 10, Some(FilterParam::repeated("type")))
    }

    pub fn events() -> Self {
        Self::new("/api/events", 20, Some(FilterParam::joined("type")))
    }

    pub fn admin_users() -> Self {
        Self::new("/api/users/admin/users", 20, Some(FilterParam::joined("role")))
    }

    pub fn config(&self) -> ListConfig {
        ListConfig::new(self.page_size)
    }
}

/// [`PageSource`] that reads one list endpoint over HTTP.
pub struct HttpPageSource<T> {
    client: ApiClient,
    endpoint: ListEndpoint,
    _item: PhantomData<fn() -> T>,
}

impl<T> HttpPageSource<T> {
    pub fn new(client: ApiClient, endpoint: ListEndpoint) -> Self {
        Self {
            client,
            endpoint,
            _item: PhantomData,
        }
    }

    pub fn endpoint(&self) -> &ListEndpoint {
        &self.endpoint
    }
}

#[async_trait]
impl<T> PageSource<T> for HttpPageSource<T>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn fetch_page(&self, request: &PageRequest) -> Result<Page<T>, ApiError> {
        if request.token.trim().is_empty() {
            return Err(ApiError::MissingToken);
        }

        let pairs = request.query.to_pairs(request.page, self.endpoint.filter);
        tracing::debug!(path = %self.endpoint.path, ?pairs, "requesting list page");

        let req = self
            .client
            .http()
            .get(self.client.url(&self.endpoint.path))
            .query(&pairs)
            .bearer_auth(&request.token);
        let body: ListBody<T> = self.client.send(req).await?;

        Ok(match body {
            ListBody::Bare(items) => Page::from_items(items),
            ListBody::Envelope(env) => Page {
                items: env.items,
                total: env.total,
                more: env.has_more.or(env.next_page.map(|_| true)),
            },
        })
    }
}

impl ApiClient {
    /// Paginated list over `endpoint`.
    ///
    /// The list keeps its own copy of the session token taken here. After a
    /// later `login` or `logout`, call [`ApiClient::sync_token`] on lists that
    /// are still in use; until then they keep using the old token (or keep
    /// skipping with `MissingToken`).
    pub async fn paginated<T>(&self, endpoint: ListEndpoint) -> PaginatedList<T>
    where
        T: Listable + DeserializeOwned + Clone + Send + Sync + 'static,
    {
        let config = endpoint.config();
        let source = HttpPageSource::<T>::new(self.clone(), endpoint);
        PaginatedList::new(std::sync::Arc::new(source), config, self.token().await)
    }

    /// Hand the current session token to `list`. A fetch in flight under
    /// the previous token is discarded.
    pub async fn sync_token<T>(&self, list: &PaginatedList<T>)
    where
        T: Listable + Clone + Send + Sync + 'static,
    {
        list.set_token(self.token().await).await;
    }

    pub async fn posts(&self) -> PaginatedList<Post> {
        self.paginated(ListEndpoint::posts()).await
    }

    pub async fn products(&self) -> PaginatedList<Product> {
        self.paginated(ListEndpoint::products()).await
    }

    pub async fn tips(&self) -> PaginatedList<Tip> {
        self.paginated(ListEndpoint::tips()).await
    }

    pub async fn events(&self) -> PaginatedList<Event> {
        self.paginated(ListEndpoint::events()).await
    }

    pub async fn user_posts(&self, user_id: &ItemId) -> ApiResult<PaginatedList<Post>> {
        Ok(self.paginated(ListEndpoint::user_posts(user_id)?).await)
    }

    pub async fn admin_users(&self) -> PaginatedList<User> {
        self.paginated(ListEndpoint::admin_users()).await
    }
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};

    use super::*;
    use crate::ClientConfig;
    use studenthub_core::domain::Session;
    use studenthub_core::pagination::{FetchOutcome, Filter, ListQuery};

    fn client(url: String, token: &str) -> ApiClient {
        ApiClient::with_session(&ClientConfig::new(url), Session::new(token, None)).unwrap()
    }

    fn posts_json(ids: impl IntoIterator<Item = i64>) -> String {
        let posts: Vec<_> = ids
            .into_iter()
            .map(|id| serde_json::json!({"id": id, "title": format!("post {}", id)}))
            .collect();
        serde_json::Value::Array(posts).to_string()
    }

    #[tokio::test]
    async fn sends_query_and_bearer_token() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/api/posts")
            .match_header("authorization", "Bearer tok")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "2".into()),
                Matcher::UrlEncoded("search".into(), "calc & stats".into()),
                Matcher::UrlEncoded("category".into(), "Books,Tech".into()),
            ]))
            .with_status(200)
            .with_body(posts_json([41]))
            .create_async()
            .await;

        let source = HttpPageSource::<Post>::new(client(server.url(), "tok"), ListEndpoint::posts());
        let page = source
            .fetch_page(&PageRequest {
                page: 2,
                query: ListQuery::new("calc & stats", Filter::from_values(["Books", "Tech"])),
                token: "tok".into(),
            })
            .await
            .unwrap();

        m.assert_async().await;
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, None);
    }

    #[tokio::test]
    async fn repeated_filter_reaches_server() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/api/forums")
            .match_query(Matcher::Regex("page=1&type=study&type=life".into()))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let source = HttpPageSource::<Tip>::new(client(server.url(), "tok"), ListEndpoint::tips());
        source
            .fetch_page(&PageRequest {
                page: 1,
                query: ListQuery::new("", Filter::from_values(["study", "life"])),
                token: "tok".into(),
            })
            .await
            .unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn envelope_hints_are_kept() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/api/products")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"data": [{"id": 1}, {"id": 2}], "total": 2}"#)
            .create_async()
            .await;

        let source =
            HttpPageSource::<Product>::new(client(server.url(), "tok"), ListEndpoint::products());
        let page = source
            .fetch_page(&PageRequest {
                page: 1,
                query: ListQuery::default(),
                token: "tok".into(),
            })
            .await
            .unwrap();
        assert_eq!(page.total, Some(2));
        assert!(!page.has_more(1, 20));
    }

    #[tokio::test]
    async fn paginated_list_over_http() {
        let mut server = Server::new_async().await;
        let first = server
            .mock("GET", "/api/forums")
            .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
            .with_status(200)
            .with_body(posts_json(1..=10))
            .create_async()
            .await;
        let second = server
            .mock("GET", "/api/forums")
            .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
            .with_status(200)
            .with_body(posts_json([10, 11]))
            .create_async()
            .await;

        let list = client(server.url(), "tok").tips().await;
        list.refresh().await.unwrap();
        let outcome = list.load_more().await.unwrap();

        first.assert_async().await;
        second.assert_async().await;
        assert_eq!(
            outcome,
            FetchOutcome::Applied {
                page: 2,
                received: 2,
                added: 1,
                has_more: false
            }
        );
        assert_eq!(list.items().await.len(), 11);
    }

    #[tokio::test]
    async fn server_error_keeps_items() {
        let mut server = Server::new_async().await;
        let _ok = server
            .mock("GET", "/api/events")
            .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
            .with_status(200)
            .with_body(posts_json(1..=20))
            .create_async()
            .await;
        let _fail = server
            .mock("GET", "/api/events")
            .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
            .with_status(500)
            .with_body(r#"{"error": "db down"}"#)
            .create_async()
            .await;

        let list = client(server.url(), "tok").events().await;
        list.refresh().await.unwrap();
        let err = list.load_more().await.unwrap_err();

        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: "db down".to_string()
            }
        );
        let snap = list.snapshot().await;
        assert_eq!(snap.items.len(), 20);
        assert!(!snap.loading);
    }

    #[tokio::test]
    async fn anonymous_client_list_is_skipped() {
        let mut server = Server::new_async().await;
        let never = server
            .mock("GET", "/api/posts")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let list = client(server.url(), "").posts().await;
        assert_eq!(
            list.refresh().await.unwrap(),
            FetchOutcome::Skipped(studenthub_core::pagination::SkipReason::MissingToken)
        );
        never.assert_async().await;
    }

    #[tokio::test]
    async fn list_picks_up_login_after_sync() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/api/posts")
            .match_query(Matcher::Any)
            .match_header("authorization", "Bearer fresh")
            .with_status(200)
            .with_body(posts_json([1, 2]))
            .expect(1)
            .create_async()
            .await;

        let client = client(server.url(), "");
        let list = client.posts().await;
        client.set_session(Session::new("fresh", None)).await;
        assert_eq!(
            list.refresh().await.unwrap(),
            FetchOutcome::Skipped(studenthub_core::pagination::SkipReason::MissingToken)
        );

        client.sync_token(&list).await;
        assert!(matches!(
            list.refresh().await.unwrap(),
            FetchOutcome::Applied { received: 2, .. }
        ));
        m.assert_async().await;
    }

    #[test]
    fn user_posts_path_is_escaped() {
        let endpoint = ListEndpoint::user_posts(&ItemId::from("7/../admin")).unwrap();
        assert_eq!(endpoint.path, "/api/posts/user/7%2F..%2Fadmin");
        assert!(ListEndpoint::user_posts(&ItemId::from("..")).is_err());
    }
}
