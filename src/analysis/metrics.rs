use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::interpolation::{entity_gdp, projection_mode, ProjectionMode};
use crate::models::{Dataset, Entity, NationalSeries, POPULATION_REFERENCE_YEAR};

/// Composite per-entity record for one year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub code: String,
    pub name: String,
    /// GDP in billions USD
    pub gdp: f64,
    /// Percent of national GDP
    pub share_percent: Option<f64>,
    /// Population in millions for the reference year
    pub baseline_population: f64,
    /// Population in millions scaled to the requested year
    pub population: f64,
    /// Year-on-year GDP growth in percent
    pub growth_rate: Option<f64>,
    /// GDP per person in USD
    pub per_capita: Option<f64>,
    pub focus_sectors: String,
    pub cumulative_investment: Option<f64>,
    pub gdp_anchors: BTreeMap<i32, f64>,
}

/// One year of an entity's time series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub year: i32,
    pub gdp: f64,
    pub growth_rate: Option<f64>,
    pub population: f64,
    pub per_capita: Option<f64>,
    pub share_percent: Option<f64>,
    pub mode: ProjectionMode,
}

/// Entity population in millions, scaled in lockstep with the national curve.
pub fn entity_population(national: &NationalSeries, entity: &Entity, year: f64) -> f64 {
    let reference = national
        .population_at(POPULATION_REFERENCE_YEAR)
        .unwrap_or_else(|| national.population(POPULATION_REFERENCE_YEAR as f64));
    if reference <= 0.0 {
        return entity.baseline_population;
    }
    entity.baseline_population * (national.population(year) / reference)
}

/// Year-on-year GDP growth in percent.
///
/// `None` when the prior year's GDP is zero or negative.
pub fn entity_growth_rate(national: &NationalSeries, entity: &Entity, year: f64) -> Option<f64> {
    let now = entity_gdp(national, entity, year);
    let prev = entity_gdp(national, entity, year - 1.0);
    growth_between(prev, now)
}

/// GDP per person in USD. `None` when population is zero.
pub fn entity_per_capita(national: &NationalSeries, entity: &Entity, year: f64) -> Option<f64> {
    let gdp = entity_gdp(national, entity, year);
    let pop = entity_population(national, entity, year);
    per_capita(gdp, pop)
}

/// Entity GDP as a percentage of national GDP. `None` when national GDP is zero.
pub fn national_share(national: &NationalSeries, entity: &Entity, year: f64) -> Option<f64> {
    let gdp = entity_gdp(national, entity, year);
    share(gdp, national.gdp(year))
}

/// Build the composite record for one entity.
pub fn entity_snapshot(national: &NationalSeries, entity: &Entity, year: f64) -> EntitySnapshot {
    let gdp = entity_gdp(national, entity, year);
    let prev = entity_gdp(national, entity, year - 1.0);
    let population = entity_population(national, entity, year);

    EntitySnapshot {
        code: entity.code.clone(),
        name: entity.name.clone(),
        gdp,
        share_percent: share(gdp, national.gdp(year)),
        baseline_population: entity.baseline_population,
        population,
        growth_rate: growth_between(prev, gdp),
        per_capita: per_capita(gdp, population),
        focus_sectors: entity.focus_sectors.clone(),
        cumulative_investment: entity.cumulative_investment,
        gdp_anchors: entity.anchors().iter().copied().collect(),
    }
}

/// Snapshot every entity in the dataset for `year`, in dataset order.
pub fn all_entity_snapshot(data: &Dataset, year: f64) -> Vec<EntitySnapshot> {
    data.entities()
        .iter()
        .map(|e| entity_snapshot(data.national(), e, year))
        .collect()
}

/// One point per timeline year for `entity`.
pub fn entity_timeline(data: &Dataset, entity: &Entity) -> Vec<TimelinePoint> {
    let national = data.national();
    data.timeline()
        .into_iter()
        .map(|year| {
            let y = year as f64;
            let gdp = entity_gdp(national, entity, y);
            let prev = entity_gdp(national, entity, y - 1.0);
            let population = entity_population(national, entity, y);
            TimelinePoint {
                year,
                gdp,
                growth_rate: growth_between(prev, gdp),
                population,
                per_capita: per_capita(gdp, population),
                share_percent: share(gdp, national.gdp(y)),
                mode: projection_mode(entity, y),
            }
        })
        .collect()
}

/// National headline figures for one year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NationalSummary {
    pub year: f64,
    /// GDP in billions USD
    pub gdp: f64,
    /// Population in millions
    pub population: f64,
    pub rank: u32,
    pub growth_rate: Option<f64>,
    pub per_capita: Option<f64>,
}

pub fn national_summary(national: &NationalSeries, year: f64) -> NationalSummary {
    NationalSummary {
        year,
        gdp: national.gdp(year),
        population: national.population(year),
        rank: national.rank(year),
        growth_rate: national.growth_rate(year),
        per_capita: national.per_capita(year),
    }
}

/// One summary per timeline year.
pub fn national_timeline(national: &NationalSeries) -> Vec<NationalSummary> {
    national
        .timeline()
        .into_iter()
        .map(|year| national_summary(national, year as f64))
        .collect()
}

/// Snapshot field used for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Name,
    Gdp,
    Growth,
    PerCapita,
    Share,
    Population,
}

impl std::str::FromStr for SortKey {
    type Err = crate::error::GdpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "gdp" => Ok(SortKey::Gdp),
            "growth" | "growth_rate" => Ok(SortKey::Growth),
            "per_capita" | "percapita" | "pc" => Ok(SortKey::PerCapita),
            "share" => Ok(SortKey::Share),
            "population" | "pop" => Ok(SortKey::Population),
            _ => Err(crate::error::GdpError::ValidationError(format!(
                "Unknown sort key: '{s}'"
            ))),
        }
    }
}

/// Sort snapshots in place. Missing values sort as the smallest.
pub fn sort_snapshots(rows: &mut [EntitySnapshot], key: SortKey, ascending: bool) {
    let metric = |s: &EntitySnapshot| -> f64 {
        match key {
            SortKey::Gdp => s.gdp,
            SortKey::Growth => s.growth_rate.unwrap_or(f64::NEG_INFINITY),
            SortKey::PerCapita => s.per_capita.unwrap_or(f64::NEG_INFINITY),
            SortKey::Share => s.share_percent.unwrap_or(f64::NEG_INFINITY),
            SortKey::Population => s.population,
            SortKey::Name => 0.0,
        }
    };
    rows.sort_by(|a, b| {
        let ord = match key {
            SortKey::Name => a.name.cmp(&b.name),
            _ => metric(a).partial_cmp(&metric(b)).unwrap_or(Ordering::Equal),
        };
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
}

/// Keep snapshots whose name or code contains `query`, case-insensitively.
pub fn filter_snapshots(rows: Vec<EntitySnapshot>, query: &str) -> Vec<EntitySnapshot> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|s| s.name.to_lowercase().contains(&q) || s.code.to_lowercase().contains(&q))
        .collect()
}

pub(crate) fn growth_between(prev: f64, now: f64) -> Option<f64> {
    if prev.is_nan() || prev <= 0.0 {
        return None;
    }
    Some((now - prev) / prev * 100.0)
}

pub(crate) fn per_capita(gdp_billions: f64, population_millions: f64) -> Option<f64> {
    if population_millions.is_nan() || population_millions <= 0.0 {
        return None;
    }
    Some(gdp_billions * 1e9 / (population_millions * 1e6))
}

pub(crate) fn share(part: f64, whole: f64) -> Option<f64> {
    if whole.is_nan() || whole <= 0.0 {
        return None;
    }
    Some(part / whole * 100.0)
}
