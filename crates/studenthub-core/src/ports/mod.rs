//! Ports - trait definitions for external dependencies.
//! Transport adapters in `studenthub-client` implement these.

mod page_source;

pub use page_source::{Page, PageRequest, PageSource};
