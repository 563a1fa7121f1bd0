//! # StudentHub Client
//!
//! reqwest-based implementation of the StudentHub REST API and of the
//! `studenthub-core` ports.
//!
//! ```ignore
//! use studenthub_client::{ApiClient, ClientConfig};
//!
//! let client = ApiClient::new(&ClientConfig::from_env())?;
//! client.login("ana@uni.edu", "secret").await?;
//! let posts = client.posts().await;
//! posts.refresh().await?;
//! posts.load_more().await?;
//! ```

pub mod api;
mod board;
pub mod config;
mod http;
pub mod list;

pub use api::{Upload, Vote};
pub use board::BountyBoard;
pub use config::ClientConfig;
pub use http::ApiClient;
pub use list::{HttpPageSource, ListEndpoint};
