//! Bounty board screen data: first page of posts plus the viewer.

use studenthub_core::ApiResult;
use studenthub_core::domain::{Post, User};
use studenthub_core::pagination::ListQuery;
use studenthub_core::ports::{PageRequest, PageSource};

use crate::http::ApiClient;
use crate::list::{HttpPageSource, ListEndpoint};

/// Posts and the current user, fetched together.
#[derive(Debug, Clone)]
pub struct BountyBoard {
    pub posts: Vec<Post>,
    pub has_more: bool,
    pub viewer: User,
}

impl BountyBoard {
    /// Posts the viewer authored, e.g. to show edit/delete controls.
    pub fn own_posts(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter().filter(|post| post.is_owned_by(&self.viewer.id))
    }
}

impl ApiClient {
    /// Fetch page 1 of the bounty board and `/api/users/me` concurrently.
    /// Either failure fails the whole call.
    pub async fn bounty_board(&self, query: &ListQuery) -> ApiResult<BountyBoard> {
        let endpoint = ListEndpoint::posts();
        let page_size = endpoint.page_size;
        let source = HttpPageSource::<Post>::new(self.clone(), endpoint);
        let request = PageRequest {
            page: 1,
            query: query.clone(),
            token: self.token().await,
        };

        let (page, viewer) = tokio::try_join!(source.fetch_page(&request), self.me())?;
        let has_more = page.has_more(1, page_size);

        Ok(BountyBoard {
            posts: page.items,
            has_more,
            viewer,
        })
    }
}
