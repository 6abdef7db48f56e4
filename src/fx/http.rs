use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::JsonFetcher;
use crate::error::GdpError;

/// `reqwest`-backed transport.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(concat!("gdp-engine/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, GdpError> {
        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(GdpError::Http(format!("{url} returned {}", resp.status())));
        }
        Ok(resp.json::<Value>().await?)
    }
}
