//! Reusable paginated list.
//!
//! State is `{ idle, loading } x { has_more }` plus a generation counter.
//! Every fetch records the generation it was issued under; a response that
//! arrives after a newer fetch (or a cancel) is discarded instead of
//! overwriting fresher state.

use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use super::merge::merge_page;
use super::query::{Filter, ListQuery};
use crate::domain::{ItemId, Listable};
use crate::error::{ApiResult, ErrorKind};
use crate::ports::{PageRequest, PageSource};

/// Per-list configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    /// Fixed page size the server uses for this endpoint.
    pub page_size: usize,
}

impl ListConfig {
    pub const fn new(page_size: usize) -> Self {
        Self { page_size }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::new(20)
    }
}

/// Why a fetch was not issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No bearer token; nothing is requested.
    MissingToken,
    /// A fetch is already in flight.
    Busy,
    /// The last page has been reached.
    Exhausted,
    /// The new search/filter equals the current one.
    Unchanged,
}

/// Result of one list operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response was merged into the list.
    Applied {
        page: u32,
        received: usize,
        added: usize,
        has_more: bool,
    },
    Skipped(SkipReason),
    /// A newer fetch superseded this one; its response was dropped.
    Stale,
}

/// Point-in-time view of a list, published on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot<T> {
    pub items: Vec<T>,
    /// Last page applied; 0 before the first page arrives.
    pub page: u32,
    pub query: ListQuery,
    pub loading: bool,
    pub has_more: bool,
    pub last_error: Option<ErrorKind>,
}

struct ListState<T> {
    items: Vec<T>,
    page: u32,
    query: ListQuery,
    loading: bool,
    has_more: bool,
    last_error: Option<ErrorKind>,
    token: String,
    generation: u64,
}

impl<T: Clone> ListState<T> {
    fn snapshot(&self) -> ListSnapshot<T> {
        ListSnapshot {
            items: self.items.clone(),
            page: self.page,
            query: self.query.clone(),
            loading: self.loading,
            has_more: self.has_more,
            last_error: self.last_error,
        }
    }

    fn clear(&mut self) {
        self.items.clear();
        self.page = 0;
        self.has_more = false;
    }
}

/// Issued fetch: what to request and under which generation.
struct Ticket {
    request: PageRequest,
    generation: u64,
    append: bool,
}

/// A list screen's data: fetches pages from a [`PageSource`], merges them
/// by id and tracks loading / has-more.
pub struct PaginatedList<T> {
    source: Arc<dyn PageSource<T>>,
    config: ListConfig,
    state: Mutex<ListState<T>>,
    snapshots: watch::Sender<ListSnapshot<T>>,
}

impl<T> PaginatedList<T>
where
    T: Listable + Clone + Send + Sync + 'static,
{
    pub fn new(source: Arc<dyn PageSource<T>>, config: ListConfig, token: impl Into<String>) -> Self {
        let state = ListState {
            items: Vec::new(),
            page: 0,
            query: ListQuery::default(),
            loading: false,
            has_more: false,
            last_error: None,
            token: token.into(),
            generation: 0,
        };
        let (snapshots, _) = watch::channel(state.snapshot());

        Self {
            source,
            config,
            state: Mutex::new(state),
            snapshots,
        }
    }

    pub fn config(&self) -> ListConfig {
        self.config
    }

    /// Observe every state change.
    pub fn subscribe(&self) -> watch::Receiver<ListSnapshot<T>> {
        self.snapshots.subscribe()
    }

    pub async fn snapshot(&self) -> ListSnapshot<T> {
        self.state.lock().await.snapshot()
    }

    pub async fn items(&self) -> Vec<T> {
        self.state.lock().await.items.clone()
    }

    /// Pull-to-refresh: fetch page 1 and replace the list when it arrives.
    pub async fn refresh(&self) -> ApiResult<FetchOutcome> {
        let ticket = {
            let mut st = self.state.lock().await;
            match self.issue(&mut st, 1, false) {
                Ok(ticket) => ticket,
                Err(outcome) => return Ok(outcome),
            }
        };
        self.execute(ticket).await
    }

    /// Screen regained focus: search and filter reset, list cleared,
    /// page 1 fetched.
    pub async fn focus(&self) -> ApiResult<FetchOutcome> {
        let ticket = {
            let mut st = self.state.lock().await;
            st.query = ListQuery::default();
            st.clear();
            match self.issue(&mut st, 1, false) {
                Ok(ticket) => ticket,
                Err(outcome) => return Ok(outcome),
            }
        };
        self.execute(ticket).await
    }

    pub async fn set_search(&self, search: impl Into<String>) -> ApiResult<FetchOutcome> {
        let search = search.into();
        let query = {
            let st = self.state.lock().await;
            ListQuery::new(search, st.query.filter.clone())
        };
        self.set_query(query).await
    }

    pub async fn set_filter(&self, filter: Filter) -> ApiResult<FetchOutcome> {
        let query = {
            let st = self.state.lock().await;
            ListQuery::new(st.query.search.clone(), filter)
        };
        self.set_query(query).await
    }

    /// Apply new search/filter state. A change resets to page 1 and clears
    /// the list before the request goes out.
    pub async fn set_query(&self, query: ListQuery) -> ApiResult<FetchOutcome> {
        let ticket = {
            let mut st = self.state.lock().await;
            if st.query.is_equivalent(&query) {
                return Ok(FetchOutcome::Skipped(SkipReason::Unchanged));
            }
            st.query = query;
            st.clear();
            match self.issue(&mut st, 1, false) {
                Ok(ticket) => ticket,
                Err(outcome) => return Ok(outcome),
            }
        };
        self.execute(ticket).await
    }

    /// Fetch the next page and append it. Only one fetch runs at a time and
    /// nothing is requested once the end has been reached.
    pub async fn load_more(&self) -> ApiResult<FetchOutcome> {
        let ticket = {
            let mut st = self.state.lock().await;
            if st.loading {
                return Ok(FetchOutcome::Skipped(SkipReason::Busy));
            }
            if !st.has_more {
                return Ok(FetchOutcome::Skipped(SkipReason::Exhausted));
            }
            let next = st.page + 1;
            match self.issue(&mut st, next, true) {
                Ok(ticket) => ticket,
                Err(outcome) => return Ok(outcome),
            }
        };
        self.execute(ticket).await
    }

    /// Drop whatever is in flight; its response will be ignored.
    pub async fn cancel_pending(&self) {
        let mut st = self.state.lock().await;
        st.generation += 1;
        st.loading = false;
        self.publish(&st);
    }

    /// Replace the bearer token. A fetch issued under the old token is
    /// dropped when it returns.
    pub async fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        let mut st = self.state.lock().await;
        if st.token == token {
            return;
        }
        st.token = token;
        st.generation += 1;
        st.loading = false;
        self.publish(&st);
    }

    /// Remove one item locally, e.g. after the server confirmed a delete.
    pub async fn remove(&self, id: &ItemId) -> bool {
        let mut st = self.state.lock().await;
        let before = st.items.len();
        st.items.retain(|item| &item.item_id() != id);
        let removed = st.items.len() != before;
        if removed {
            self.publish(&st);
        }
        removed
    }

    /// Mark a fetch as started. Errors carry the outcome when nothing
    /// should be requested.
    fn issue(&self, st: &mut ListState<T>, page: u32, append: bool) -> Result<Ticket, FetchOutcome> {
        if st.token.trim().is_empty() {
            tracing::debug!(page, "no bearer token, skipping fetch");
            // The query may have changed; nothing issued earlier still applies.
            st.generation += 1;
            st.loading = false;
            self.publish(st);
            return Err(FetchOutcome::Skipped(SkipReason::MissingToken));
        }

        st.generation += 1;
        st.loading = true;
        self.publish(st);

        Ok(Ticket {
            request: PageRequest {
                page,
                query: st.query.clone(),
                token: st.token.clone(),
            },
            generation: st.generation,
            append,
        })
    }

    async fn execute(&self, ticket: Ticket) -> ApiResult<FetchOutcome> {
        let Ticket {
            request,
            generation,
            append,
        } = ticket;

        tracing::debug!(page = request.page, append, generation, "fetching page");
        let result = self.source.fetch_page(&request).await;

        let mut st = self.state.lock().await;
        if st.generation != generation {
            tracing::debug!(
                page = request.page,
                generation,
                current = st.generation,
                "discarding stale page"
            );
            return Ok(FetchOutcome::Stale);
        }

        st.loading = false;
        let outcome = match result {
            Ok(page) => {
                let more = page.has_more(request.page, self.config.page_size);
                let received = page.items.len();
                let before = if append { st.items.len() } else { 0 };

                let existing = std::mem::take(&mut st.items);
                st.items = merge_page(existing, page.items, append, T::item_id);
                st.page = request.page;
                st.has_more = more;
                st.last_error = None;

                Ok(FetchOutcome::Applied {
                    page: request.page,
                    received,
                    added: st.items.len() - before,
                    has_more: more,
                })
            }
            Err(err) => {
                tracing::warn!(page = request.page, error = %err, "page fetch failed");
                st.last_error = Some(err.kind());
                Err(err)
            }
        };

        self.publish(&st);
        outcome
    }

    fn publish(&self, st: &ListState<T>) {
        self.snapshots.send_replace(st.snapshot());
    }
}
