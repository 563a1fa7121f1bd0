//! Paginated list fetching: query building, merge-by-id and the list
//! state machine shared by every list screen.

mod list;
mod merge;
mod query;

pub use list::{FetchOutcome, ListConfig, ListSnapshot, PaginatedList, SkipReason};
pub use merge::{has_more, merge_page};
pub use query::{Filter, FilterEncoding, FilterParam, ListQuery};
