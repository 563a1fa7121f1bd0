//! `studenthub show` and `studenthub board`.

use anyhow::Result;
use clap::ValueEnum;

use studenthub_client::ApiClient;
use studenthub_core::domain::ItemId;
use studenthub_core::pagination::ListQuery;

use super::render::Render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Record {
    Post,
    Product,
    User,
}

pub async fn show(client: &ApiClient, record: Record, id: &str) -> Result<()> {
    let id = ItemId::parse(id);
    let json = match record {
        Record::Post => serde_json::to_string_pretty(&client.post(&id).await?)?,
        Record::Product => serde_json::to_string_pretty(&client.product(&id).await?)?,
        Record::User => serde_json::to_string_pretty(&client.user(&id).await?)?,
    };
    println!("{}", json);
    Ok(())
}

pub async fn board(client: &ApiClient, search: Option<String>) -> Result<()> {
    let query = ListQuery::new(search.unwrap_or_default(), Default::default());
    let board = client.bounty_board(&query).await?;

    println!("Bounty board for {}", board.viewer.username);
    for post in &board.posts {
        let mine = if post.is_owned_by(&board.viewer.id) { "*" } else { " " };
        println!("{} {}", mine, post.line());
    }
    if board.has_more {
        println!("-- more posts available");
    }
    Ok(())
}
