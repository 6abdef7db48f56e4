use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::GdpError;

/// Rank reported when a year is missing from the rank table.
pub const DEFAULT_RANK: u32 = 5;

/// National GDP, population and global rank, keyed by integer year.
///
/// All three tables cover the same contiguous year range. Queries outside
/// that range are clamped to the nearest boundary year.
#[derive(Debug, Clone, Serialize)]
pub struct NationalSeries {
    gdp: BTreeMap<i32, f64>,
    population: BTreeMap<i32, f64>,
    rank: BTreeMap<i32, u32>,
}

impl NationalSeries {
    /// Build a series from GDP (billions USD), population (millions) and rank tables.
    pub fn new(
        gdp: impl IntoIterator<Item = (i32, f64)>,
        population: impl IntoIterator<Item = (i32, f64)>,
        rank: impl IntoIterator<Item = (i32, u32)>,
    ) -> Result<Self, GdpError> {
        let series = Self {
            gdp: gdp.into_iter().collect(),
            population: population.into_iter().collect(),
            rank: rank.into_iter().collect(),
        };
        series.validate()?;
        Ok(series)
    }

    /// Validate the shared year domain. Returns `GdpError::ValidationError` on failure.
    pub fn validate(&self) -> Result<(), GdpError> {
        if self.gdp.len() < 2 {
            return Err(GdpError::ValidationError(format!(
                "national GDP table needs at least 2 years, got {}",
                self.gdp.len()
            )));
        }
        let years: Vec<i32> = self.gdp.keys().copied().collect();
        if !self.population.keys().eq(years.iter()) {
            return Err(GdpError::ValidationError(
                "national population table does not cover the GDP year range".to_string(),
            ));
        }
        if !self.rank.keys().eq(years.iter()) {
            return Err(GdpError::ValidationError(
                "national rank table does not cover the GDP year range".to_string(),
            ));
        }
        if years.windows(2).any(|w| w[1] != w[0] + 1) {
            return Err(GdpError::ValidationError(
                "national tables must cover contiguous years".to_string(),
            ));
        }
        for (year, value) in self.gdp.iter().chain(self.population.iter()) {
            if !value.is_finite() || *value <= 0.0 {
                return Err(GdpError::ValidationError(format!(
                    "national value for {year} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// First year of the timeline.
    pub fn min_year(&self) -> i32 {
        self.gdp.keys().next().copied().unwrap_or_default()
    }

    /// Last year of the timeline.
    pub fn max_year(&self) -> i32 {
        self.gdp.keys().next_back().copied().unwrap_or_default()
    }

    /// Every year of the timeline, ascending.
    pub fn timeline(&self) -> Vec<i32> {
        self.gdp.keys().copied().collect()
    }

    /// Clamp a possibly fractional year to `[min_year, max_year]`.
    pub fn clamp_year(&self, year: f64) -> f64 {
        year.clamp(self.min_year() as f64, self.max_year() as f64)
    }

    /// Exact table lookup for an integer year.
    pub fn gdp_at(&self, year: i32) -> Option<f64> {
        self.gdp.get(&year).copied()
    }

    /// Exact table lookup for an integer year.
    pub fn population_at(&self, year: i32) -> Option<f64> {
        self.population.get(&year).copied()
    }

    /// National GDP in billions USD, linearly interpolated between integer years.
    ///
    /// ```
    /// use india_gdp_engine::Dataset;
    ///
    /// let data = Dataset::builtin().unwrap();
    /// assert_eq!(data.national().gdp(2024.5), 4103.5);
    /// ```
    pub fn gdp(&self, year: f64) -> f64 {
        self.interpolate(&self.gdp, year)
    }

    /// National population in millions, linearly interpolated between integer years.
    pub fn population(&self, year: f64) -> f64 {
        self.interpolate(&self.population, year)
    }

    /// Approximate global GDP rank for the nearest integer year.
    pub fn rank(&self, year: f64) -> u32 {
        let y = self.clamp_year(year.round()) as i32;
        self.rank.get(&y).copied().unwrap_or(DEFAULT_RANK)
    }

    /// Year-on-year GDP growth in percent for the nearest integer year.
    ///
    /// `None` when the previous or current value is missing or zero.
    pub fn growth_rate(&self, year: f64) -> Option<f64> {
        let lower = (self.min_year() + 1) as f64;
        let y = year.clamp(lower, self.max_year() as f64).round() as i32;
        let prev = self.gdp_at(y - 1)?;
        let curr = self.gdp_at(y)?;
        if prev == 0.0 || curr == 0.0 {
            return None;
        }
        Some((curr - prev) / prev * 100.0)
    }

    /// GDP per person in USD. `None` when population is zero.
    pub fn per_capita(&self, year: f64) -> Option<f64> {
        let pop = self.population(year);
        if pop <= 0.0 {
            return None;
        }
        Some(self.gdp(year) * 1e9 / (pop * 1e6))
    }

    fn interpolate(&self, table: &BTreeMap<i32, f64>, year: f64) -> f64 {
        let y = self.clamp_year(year);
        let floor = y.floor();
        let ceil = y.ceil();
        let lo = table.get(&(floor as i32)).copied().unwrap_or(0.0);
        if floor == ceil {
            return lo;
        }
        let hi = table.get(&(ceil as i32)).copied().unwrap_or(0.0);
        let t = y - floor;
        lo * (1.0 - t) + hi * t
    }
}
