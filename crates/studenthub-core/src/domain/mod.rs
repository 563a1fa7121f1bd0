//! Domain records - backend JSON consumed as-is.
//!
//! Known fields are typed; everything else the server sends is kept in
//! each record's `extra` map.

mod amount;
mod event;
mod id;
mod message;
mod post;
mod product;
mod review;
mod tip;
pub mod timestamp;
mod user;

pub use event::Event;
pub use id::{ItemId, Listable};
pub use message::{Conversation, Message};
pub use post::Post;
pub use product::Product;
pub use review::Review;
pub use tip::{Reply, Tip};
pub use user::{Session, User};
