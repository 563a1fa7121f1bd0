//! Session and profile commands.

use anyhow::{Context, Result};

use studenthub_client::ApiClient;
use studenthub_core::theme::{Theme, ThemeMode};

pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<()> {
    let session = client
        .login(email, password)
        .await
        .context("login failed")?;
    if let Some(user) = &session.user {
        eprintln!("Logged in as {} <{}>", user.username, user.email);
    }
    println!("{}", session.token);
    Ok(())
}

pub async fn me(client: &ApiClient) -> Result<()> {
    let user = client.me().await?;
    println!("{}", serde_json::to_string_pretty(&user)?);
    Ok(())
}

pub async fn inbox(client: &ApiClient) -> Result<()> {
    for conversation in client.conversations().await? {
        println!(
            "#{:<6} {:<20} {}",
            conversation.user_id,
            conversation.user_name,
            conversation.last_message.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

/// Show the viewer's palette, optionally storing a new mode first.
pub async fn theme(client: &ApiClient, theme: &Theme, set: Option<ThemeMode>) -> Result<()> {
    let me = client.me().await?;
    let mode = match set {
        Some(mode) => {
            client.set_theme_mode(&me.id, mode).await?;
            mode
        }
        None => client.theme_mode(&me.id).await.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "no stored theme, using default");
            ThemeMode::default()
        }),
    };

    println!("mode: {}", mode);
    for (name, value) in theme.palette(mode).entries() {
        println!("  {:<16} {}", name, value);
    }
    Ok(())
}
