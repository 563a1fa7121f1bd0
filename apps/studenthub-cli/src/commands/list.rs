//! `studenthub list` - browse a paginated list.

use anyhow::Result;
use clap::ValueEnum;
use studenthub_client::ApiClient;
use studenthub_core::domain::Listable;
use studenthub_core::pagination::{FetchOutcome, Filter, ListQuery, PaginatedList};

use super::render::Render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Resource {
    Posts,
    Products,
    Tips,
    Events,
    MyPosts,
    Users,
}

pub async fn run(
    client: &ApiClient,
    resource: Resource,
    search: Option<String>,
    filters: Vec<String>,
    pages: u32,
) -> Result<()> {
    let query = ListQuery::new(search.unwrap_or_default(), Filter::from_values(filters));

    match resource {
        Resource::Posts => browse(client.posts().await, query, pages).await,
        Resource::Products => browse(client.products().await, query, pages).await,
        Resource::Tips => browse(client.tips().await, query, pages).await,
        Resource::Events => browse(client.events().await, query, pages).await,
        Resource::Users => browse(client.admin_users().await, query, pages).await,
        Resource::MyPosts => {
            let me = client.me().await?;
            browse(client.user_posts(&me.id).await?, query, pages).await
        }
    }
}

/// Fetch the first page for `query`, then keep loading until `pages`
/// pages are in or the list runs out.
async fn browse<T>(list: PaginatedList<T>, query: ListQuery, pages: u32) -> Result<()>
where
    T: Listable + Render + Clone + Send + Sync + 'static,
{
    let first = if query.is_default() {
        list.refresh().await?
    } else {
        list.set_query(query).await?
    };
    if let FetchOutcome::Skipped(reason) = first {
        anyhow::bail!("nothing fetched: {:?}", reason);
    }

    for _ in 1..pages.max(1) {
        match list.load_more().await? {
            FetchOutcome::Applied { page, added, .. } => {
                tracing::debug!(page, added, "loaded more");
            }
            _ => break,
        }
    }

    let snapshot = list.snapshot().await;
    for item in &snapshot.items {
        println!("{}", item.line());
    }
    println!(
        "-- {} item(s), {} page(s){}",
        snapshot.items.len(),
        snapshot.page,
        if snapshot.has_more { ", more available" } else { "" }
    );
    Ok(())
}
