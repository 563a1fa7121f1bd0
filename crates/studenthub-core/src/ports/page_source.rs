use async_trait::async_trait;

use crate::error::ApiError;
use crate::pagination::{ListQuery, has_more};

/// One page request issued by a paginated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,
    pub query: ListQuery,
    pub token: String,
}

/// One page of results plus whatever paging hints the server sent.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total number of records across all pages, when reported.
    pub total: Option<u64>,
    /// Explicit continuation flag, when reported.
    pub more: Option<bool>,
}

impl<T> Page<T> {
    /// A page from a bare JSON array: no hints.
    pub fn from_items(items: Vec<T>) -> Self {
        Self {
            items,
            total: None,
            more: None,
        }
    }

    /// Whether another page follows `page_number`.
    ///
    /// Server hints win: an explicit flag first, then the total count.
    /// Without either, a full page is taken to mean more remain.
    pub fn has_more(&self, page_number: u32, page_size: usize) -> bool {
        if let Some(more) = self.more {
            return more;
        }
        if let Some(total) = self.total {
            let loaded = u64::from(page_number.saturating_sub(1)) * page_size as u64
                + self.items.len() as u64;
            return loaded < total;
        }
        has_more(self.items.len(), page_size)
    }
}

/// Source of list pages - an HTTP endpoint in production, a script in tests.
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    /// Fetch one page. Implementations must not retry.
    async fn fetch_page(&self, request: &PageRequest) -> Result<Page<T>, ApiError>;
}
