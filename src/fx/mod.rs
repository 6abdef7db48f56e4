//! Live INR-per-USD exchange rate.
//!
//! A [`RateResolver`] walks an ordered list of JSON providers and returns the
//! first plausible rate, or a fixed fallback. A [`RateCache`] holds the last
//! result and can refresh itself on an interval.

mod cache;
#[cfg(feature = "live-fx")]
mod http;
mod provider;
mod resolver;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use cache::RateCache;
#[cfg(feature = "live-fx")]
pub use http::HttpFetcher;
pub use provider::{default_providers, ProviderDescriptor};
pub use resolver::{JsonFetcher, RateResolver};

/// INR per USD used when every provider fails.
pub const FALLBACK_RATE: f64 = 83.5;

/// Source label for a fallback rate, e.g. `fallback (₹83.50)`.
pub fn fallback_label(rate: f64) -> String {
    format!("fallback (₹{rate:.2})")
}

/// A resolved exchange rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// INR per USD
    pub rate: f64,
    /// Provider name, or the fallback label
    pub source: String,
    /// False when the rate is the fallback constant
    pub is_live: bool,
    pub fetched_at: DateTime<Utc>,
}

impl ExchangeRate {
    pub fn live(rate: f64, source: impl Into<String>) -> Self {
        ExchangeRate {
            rate,
            source: source.into(),
            is_live: true,
            fetched_at: Utc::now(),
        }
    }

    pub fn fallback(rate: f64) -> Self {
        ExchangeRate {
            rate,
            source: fallback_label(rate),
            is_live: false,
            fetched_at: Utc::now(),
        }
    }

    /// Convert billions of USD to billions of INR.
    pub fn to_inr(&self, usd: f64) -> f64 {
        usd * self.rate
    }
}

impl Default for ExchangeRate {
    fn default() -> Self {
        ExchangeRate::fallback(FALLBACK_RATE)
    }
}
