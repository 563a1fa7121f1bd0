//! # StudentHub Shared
//!
//! Wire types shared with the StudentHub backend: identifiers, request and
//! response bodies, error payloads.

pub mod dto;
mod id;
pub mod response;

pub use id::ItemId;
pub use response::ErrorResponse;
