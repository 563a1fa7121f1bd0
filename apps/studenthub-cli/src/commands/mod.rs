//! CLI subcommands.

mod account;
mod list;
mod render;
mod show;

use anyhow::{Context, Result};
use clap::Subcommand;

use studenthub_client::ApiClient;
use studenthub_core::domain::Session;
use studenthub_core::theme::{Theme, ThemeMode};

use crate::config::AppConfig;

pub use list::Resource;
pub use show::Record;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and print the bearer token.
    Login {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Show the logged-in user.
    Me,
    /// Browse a list with optional search and filters.
    List {
        #[arg(value_enum)]
        resource: Resource,
        #[arg(long)]
        search: Option<String>,
        /// Category/type filter; repeat for several values.
        #[arg(long = "filter")]
        filters: Vec<String>,
        /// Number of pages to load.
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Show one record as JSON.
    Show {
        #[arg(value_enum)]
        record: Record,
        id: String,
    },
    /// Bounty board with the viewer's own posts marked.
    Board {
        #[arg(long)]
        search: Option<String>,
    },
    /// List conversations.
    Inbox,
    /// Show the viewer's palette; `--set` stores a new mode.
    Theme {
        #[arg(long)]
        set: Option<ThemeMode>,
    },
}

pub async fn run(command: Command, client: &ApiClient, config: &AppConfig) -> Result<()> {
    if !matches!(command, Command::Login { .. }) {
        ensure_session(client, config).await?;
    }

    match command {
        Command::Login { email, password } => {
            let email = email
                .or_else(|| config.email.clone())
                .context("--email or STUDENTHUB_EMAIL required")?;
            let password = password
                .or_else(|| config.password.clone())
                .context("--password or STUDENTHUB_PASSWORD required")?;
            account::login(client, &email, &password).await
        }
        Command::Me => account::me(client).await,
        Command::List {
            resource,
            search,
            filters,
            pages,
        } => list::run(client, resource, search, filters, pages).await,
        Command::Show { record, id } => show::show(client, record, &id).await,
        Command::Board { search } => show::board(client, search).await,
        Command::Inbox => account::inbox(client).await,
        Command::Theme { set } => account::theme(client, &Theme::default(), set).await,
    }
}

/// Use the configured token, or log in with configured credentials.
async fn ensure_session(client: &ApiClient, config: &AppConfig) -> Result<()> {
    if let Some(token) = &config.token {
        client.set_session(Session::new(token.clone(), None)).await;
        return Ok(());
    }
    if let (Some(email), Some(password)) = (&config.email, &config.password) {
        client
            .login(email, password)
            .await
            .context("login with STUDENTHUB_EMAIL/STUDENTHUB_PASSWORD failed")?;
        return Ok(());
    }
    tracing::warn!("no token or credentials configured; requests will be skipped or rejected");
    Ok(())
}
