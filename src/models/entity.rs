use serde::Serialize;

use crate::error::GdpError;

/// A state or union territory with sparse GDP anchor points.
#[derive(Debug, Clone, Serialize)]
pub struct Entity {
    /// Short stable identifier (e.g., "MH")
    pub code: String,
    /// Display name (e.g., "Maharashtra")
    pub name: String,
    /// Population in millions as of the reference year (2024)
    pub baseline_population: f64,
    /// Descriptive label of the main economic sectors
    pub focus_sectors: String,
    /// Estimated cumulative investment, absent for smaller entities
    pub cumulative_investment: Option<f64>,
    /// (year, GDP in billions USD), strictly increasing in year
    anchors: Vec<(i32, f64)>,
}

impl Entity {
    /// Create an entity from its anchor points.
    ///
    /// Anchors may be given in any order; they are sorted by year. At least two
    /// anchors with distinct years and positive finite values are required.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        baseline_population: f64,
        anchors: impl IntoIterator<Item = (i32, f64)>,
    ) -> Result<Self, GdpError> {
        let mut anchors: Vec<(i32, f64)> = anchors.into_iter().collect();
        anchors.sort_by_key(|(year, _)| *year);

        let entity = Self {
            code: code.into(),
            name: name.into(),
            baseline_population,
            focus_sectors: String::new(),
            cumulative_investment: None,
            anchors,
        };
        entity.validate()?;
        Ok(entity)
    }

    /// Attach the focus-sector description.
    pub fn with_focus_sectors(mut self, sectors: impl Into<String>) -> Self {
        self.focus_sectors = sectors.into();
        self
    }

    /// Attach the cumulative investment estimate.
    pub fn with_cumulative_investment(mut self, investment: Option<f64>) -> Self {
        self.cumulative_investment = investment;
        self
    }

    /// Validate identity and anchors. Returns `GdpError::ValidationError` on failure.
    pub fn validate(&self) -> Result<(), GdpError> {
        if self.code.trim().is_empty() {
            return Err(GdpError::ValidationError(format!(
                "entity '{}' has an empty code",
                self.name
            )));
        }
        if !self.baseline_population.is_finite() || self.baseline_population < 0.0 {
            return Err(GdpError::ValidationError(format!(
                "{}: baseline population must be non-negative, got {}",
                self.code, self.baseline_population
            )));
        }
        if self.anchors.len() < 2 {
            return Err(GdpError::ValidationError(format!(
                "{}: at least 2 GDP anchors are required, got {}",
                self.code,
                self.anchors.len()
            )));
        }
        if let Some(w) = self.anchors.windows(2).find(|w| w[1].0 <= w[0].0) {
            return Err(GdpError::ValidationError(format!(
                "{}: duplicate anchor year {}",
                self.code, w[1].0
            )));
        }
        if let Some((year, value)) = self
            .anchors
            .iter()
            .find(|(_, v)| !v.is_finite() || *v <= 0.0)
        {
            return Err(GdpError::ValidationError(format!(
                "{}: anchor for {year} must be positive and finite, got {value}",
                self.code
            )));
        }
        Ok(())
    }

    /// All anchors, sorted by year.
    pub fn anchors(&self) -> &[(i32, f64)] {
        &self.anchors
    }

    /// Anchor years, ascending.
    pub fn anchor_years(&self) -> Vec<i32> {
        self.anchors.iter().map(|(y, _)| *y).collect()
    }

    /// Anchor value for an exact year, if one is recorded.
    pub fn anchor(&self, year: i32) -> Option<f64> {
        self.anchors
            .binary_search_by_key(&year, |(y, _)| *y)
            .ok()
            .map(|idx| self.anchors[idx].1)
    }

    pub fn first_anchor(&self) -> (i32, f64) {
        self.anchors[0]
    }

    pub fn last_anchor(&self) -> (i32, f64) {
        self.anchors[self.anchors.len() - 1]
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
