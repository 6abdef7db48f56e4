use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::{default_providers, ExchangeRate, ProviderDescriptor};
use crate::config::FxConfig;
use crate::error::GdpError;

/// Transport that fetches a URL and decodes the body as JSON.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value, GdpError>;
}

/// Sequential provider cascade with per-provider timeout and fallback.
pub struct RateResolver {
    fetcher: Arc<dyn JsonFetcher>,
    providers: Vec<ProviderDescriptor>,
    config: FxConfig,
    timeout: Duration,
}

impl RateResolver {
    /// Resolver over the default providers.
    pub fn new(fetcher: Arc<dyn JsonFetcher>, config: &FxConfig) -> Self {
        RateResolver {
            fetcher,
            providers: default_providers(),
            timeout: config.timeout(),
            config: config.clone(),
        }
    }

    pub fn with_providers(mut self, providers: Vec<ProviderDescriptor>) -> Self {
        self.providers = providers;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn providers(&self) -> &[ProviderDescriptor] {
        &self.providers
    }

    /// Interval between cache refreshes, from `fx.refresh_interval_secs`.
    pub fn refresh_interval(&self) -> Duration {
        self.config.refresh_interval()
    }

    /// Try each provider in order and return the first plausible rate.
    ///
    /// Never fails: errors, timeouts and out-of-band rates advance the
    /// cascade, and exhausting it yields the fallback rate.
    pub async fn resolve(&self) -> ExchangeRate {
        for provider in &self.providers {
            if let Some(rate) = self.try_provider(provider).await {
                tracing::info!(provider = %provider.name, rate, "resolved exchange rate");
                return ExchangeRate::live(rate, provider.name.clone());
            }
        }
        tracing::warn!(
            fallback = self.config.fallback_rate,
            "all exchange-rate providers failed, using fallback"
        );
        ExchangeRate::fallback(self.config.fallback_rate)
    }

    async fn try_provider(&self, provider: &ProviderDescriptor) -> Option<f64> {
        tracing::debug!(provider = %provider.name, url = %provider.url, "requesting exchange rate");

        let request = self.fetcher.get_json(&provider.url);
        let body = match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(body)) => body,
            Ok(Err(e)) => {
                tracing::debug!(provider = %provider.name, error = %e, "provider request failed");
                return None;
            }
            Err(_) => {
                tracing::debug!(
                    provider = %provider.name,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "provider timed out"
                );
                return None;
            }
        };

        match provider.extract(&body) {
            Some(rate) if self.config.is_plausible(rate) => Some(rate),
            Some(rate) => {
                tracing::warn!(
                    provider = %provider.name,
                    rate,
                    min = self.config.min_rate,
                    max = self.config.max_rate,
                    "rejected implausible exchange rate"
                );
                None
            }
            None => {
                tracing::warn!(provider = %provider.name, "response has no INR rate");
                None
            }
        }
    }
}
