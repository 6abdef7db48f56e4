use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::{ExchangeRate, RateResolver};

/// Last resolved exchange rate, updated only through [`RateCache::refresh`].
pub struct RateCache {
    resolver: RateResolver,
    state: RwLock<Option<ExchangeRate>>,
}

impl RateCache {
    pub fn new(resolver: RateResolver) -> Self {
        RateCache {
            resolver,
            state: RwLock::new(None),
        }
    }

    /// Resolve a fresh rate and store it.
    ///
    /// A fallback result does not displace a previously cached live rate.
    pub async fn refresh(&self) -> ExchangeRate {
        let resolved = self.resolver.resolve().await;
        let mut state = self.state.write().await;
        match state.as_ref() {
            Some(prev) if prev.is_live && !resolved.is_live => {
                tracing::debug!(source = %prev.source, "keeping last live rate");
                prev.clone()
            }
            _ => {
                *state = Some(resolved.clone());
                resolved
            }
        }
    }

    /// Cached rate, if any refresh has completed.
    pub async fn current(&self) -> Option<ExchangeRate> {
        self.state.read().await.clone()
    }

    /// Cached rate, resolving one first if the cache is empty.
    pub async fn get(&self) -> ExchangeRate {
        if let Some(rate) = self.current().await {
            return rate;
        }
        self.refresh().await
    }

    /// Refresh now and then every `interval` until the handle is aborted,
    /// passing each result to `on_refresh`.
    pub fn spawn_periodic_refresh<F>(
        self: Arc<Self>,
        interval: Duration,
        on_refresh: F,
    ) -> JoinHandle<()>
    where
        F: Fn(&ExchangeRate) + Send + 'static,
    {
        let period = interval.max(Duration::from_millis(1));
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let rate = self.refresh().await;
                tracing::debug!(rate = rate.rate, source = %rate.source, "exchange rate refreshed");
                on_refresh(&rate);
            }
        })
    }

    /// [`RateCache::spawn_periodic_refresh`] at the resolver's configured
    /// `refresh_interval_secs`.
    pub fn spawn_configured_refresh<F>(self: Arc<Self>, on_refresh: F) -> JoinHandle<()>
    where
        F: Fn(&ExchangeRate) + Send + 'static,
    {
        let interval = self.resolver.refresh_interval();
        self.spawn_periodic_refresh(interval, on_refresh)
    }
}
