//! # StudentHub Core
//!
//! Transport-agnostic client logic: domain records, the paginated list
//! state machine, error types and theming. No HTTP here; adapters live in
//! `studenthub-client`.

pub mod domain;
pub mod error;
pub mod pagination;
pub mod ports;
pub mod theme;

pub use error::{ApiError, ApiResult, ErrorKind};
