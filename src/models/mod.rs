mod data;
mod dataset;
mod entity;
mod national;

pub use dataset::Dataset;
pub use entity::Entity;
pub use national::{NationalSeries, DEFAULT_RANK};

/// Reference year for entity population baselines.
pub const POPULATION_REFERENCE_YEAR: i32 = 2024;
