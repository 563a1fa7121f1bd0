//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use studenthub_client::ClientConfig;

/// CLI configuration. Flags override these values.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub token: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            client: ClientConfig::from_env(),
            token: non_empty(env::var("STUDENTHUB_TOKEN").ok()),
            email: non_empty(env::var("STUDENTHUB_EMAIL").ok()),
            password: non_empty(env::var("STUDENTHUB_PASSWORD").ok()),
        }
    }

    pub fn with_overrides(
        mut self,
        api_url: Option<String>,
        token: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Self {
        if let Some(url) = api_url {
            self.client.base_url = url;
        }
        if let Some(secs) = timeout_secs {
            self.client = self.client.with_timeout(Duration::from_secs(secs));
        }
        if let Some(token) = non_empty(token) {
            self.token = Some(token);
        }
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
