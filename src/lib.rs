//! India national and state GDP projections.
//!
//! Anchor tables for national GDP, population and rank plus per-entity GDP
//! anchors for every state and union territory, with piecewise compound-growth
//! interpolation, derived metrics, milestones and a live INR exchange rate.

pub mod analysis;
pub mod config;
pub mod error;
pub mod fx;
pub mod io;
pub mod models;
pub mod visualization;

pub use analysis::Engine;
pub use config::EngineConfig;
pub use error::GdpError;
pub use fx::{ExchangeRate, RateCache, RateResolver};
pub use io::ReportWriter;
pub use models::{Dataset, Entity, NationalSeries};
