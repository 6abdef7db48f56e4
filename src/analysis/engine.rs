use chrono::{DateTime, Utc};

use crate::analysis::{
    all_entity_snapshot, check_reconciliation, compare, entity_gdp, entity_growth_rate,
    entity_per_capita, entity_population, entity_snapshot, entity_timeline, national_share,
    national_summary, trillion_tracker, trillion_year, ComparisonRow, EntitySnapshot, GdpClock,
    NationalSummary, ReconciliationReport, TimelinePoint, TrillionTracker,
};
use crate::error::GdpError;
use crate::models::Dataset;

/// Unified query API over a dataset, addressing entities by code.
pub struct Engine<'a> {
    data: &'a Dataset,
}

impl<'a> Engine<'a> {
    /// Create a new Engine for the given dataset.
    pub fn new(data: &'a Dataset) -> Self {
        Self { data }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.data
    }

    /// National GDP, population, rank, growth and per-capita for `year`.
    pub fn national(&self, year: f64) -> NationalSummary {
        national_summary(self.data.national(), year)
    }

    /// Entity GDP in billions USD.
    pub fn gdp(&self, code: &str, year: f64) -> Result<f64, GdpError> {
        let entity = self.data.require_entity(code)?;
        Ok(entity_gdp(self.data.national(), entity, year))
    }

    pub fn population(&self, code: &str, year: f64) -> Result<f64, GdpError> {
        let entity = self.data.require_entity(code)?;
        Ok(entity_population(self.data.national(), entity, year))
    }

    pub fn growth_rate(&self, code: &str, year: f64) -> Result<Option<f64>, GdpError> {
        let entity = self.data.require_entity(code)?;
        Ok(entity_growth_rate(self.data.national(), entity, year))
    }

    pub fn per_capita(&self, code: &str, year: f64) -> Result<Option<f64>, GdpError> {
        let entity = self.data.require_entity(code)?;
        Ok(entity_per_capita(self.data.national(), entity, year))
    }

    pub fn share(&self, code: &str, year: f64) -> Result<Option<f64>, GdpError> {
        let entity = self.data.require_entity(code)?;
        Ok(national_share(self.data.national(), entity, year))
    }

    pub fn snapshot(&self, code: &str, year: f64) -> Result<EntitySnapshot, GdpError> {
        let entity = self.data.require_entity(code)?;
        Ok(entity_snapshot(self.data.national(), entity, year))
    }

    /// Snapshot of every entity, in dataset order.
    pub fn all_snapshots(&self, year: f64) -> Vec<EntitySnapshot> {
        all_entity_snapshot(self.data, year)
    }

    pub fn timeline(&self, code: &str) -> Result<Vec<TimelinePoint>, GdpError> {
        let entity = self.data.require_entity(code)?;
        Ok(entity_timeline(self.data, entity))
    }

    /// First year the entity reaches $1T.
    pub fn trillion_year(&self, code: &str) -> Result<Option<i32>, GdpError> {
        let entity = self.data.require_entity(code)?;
        Ok(trillion_year(self.data, entity))
    }

    pub fn tracker(&self, year: f64) -> TrillionTracker {
        trillion_tracker(self.data, year)
    }

    pub fn compare(&self, codes: &[String], year: f64) -> Result<Vec<ComparisonRow>, GdpError> {
        compare(self.data, codes, year)
    }

    pub fn clock(&self, instant: DateTime<Utc>) -> GdpClock {
        GdpClock::at(self.data.national(), instant)
    }

    pub fn reconcile(
        &self,
        tolerance: f64,
        strict: bool,
    ) -> Result<ReconciliationReport, GdpError> {
        check_reconciliation(self.data, tolerance, strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn data() -> Dataset {
        Dataset::builtin().unwrap()
    }

    #[test]
    fn test_gdp_matches_standalone() {
        let data = data();
        let engine = Engine::new(&data);
        let ka = data.entity("KA").unwrap();
        for year in [2015.0, 2025.0, 2033.5, 2050.0] {
            assert_eq!(
                engine.gdp("ka", year).unwrap(),
                entity_gdp(data.national(), ka, year)
            );
        }
    }

    #[test]
    fn test_snapshot_matches_standalone() {
        let data = data();
        let engine = Engine::new(&data);
        let from_engine = engine.snapshot("TN", 2030.0).unwrap();
        let from_standalone = entity_snapshot(data.national(), data.entity("TN").unwrap(), 2030.0);
        assert_eq!(from_engine.gdp, from_standalone.gdp);
        assert_eq!(from_engine.growth_rate, from_standalone.growth_rate);
        assert_eq!(engine.all_snapshots(2030.0).len(), 36);
    }

    #[test]
    fn test_timeline_matches_standalone() {
        let data = data();
        let engine = Engine::new(&data);
        let from_engine = engine.timeline("UP").unwrap();
        let from_standalone = entity_timeline(&data, data.entity("UP").unwrap());
        assert_eq!(from_engine.len(), from_standalone.len());
        assert_eq!(from_engine[20].gdp, from_standalone[20].gdp);
    }

    #[test]
    fn test_trillion_year_via_engine() {
        let data = data();
        let engine = Engine::new(&data);
        assert_eq!(engine.trillion_year("MH").unwrap(), Some(2030));
        assert_eq!(engine.tracker(2030.0).members.len(), 2);
    }

    #[test]
    fn test_clock_matches_standalone() {
        let data = data();
        let engine = Engine::new(&data);
        let instant = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let from_engine = engine.clock(instant);
        let from_standalone = GdpClock::at(data.national(), instant);
        assert_eq!(from_engine.live_gdp, from_standalone.live_gdp);
    }

    #[test]
    fn test_unknown_code_is_error() {
        let data = data();
        let engine = Engine::new(&data);
        assert!(matches!(engine.gdp("XX", 2024.0), Err(GdpError::UnknownEntity(_))));
        assert!(engine.timeline("").is_err());
        assert!(engine.compare(&["ZZ".to_string()], 2024.0).is_err());
    }

    #[test]
    fn test_national_and_reconcile() {
        let data = data();
        let engine = Engine::new(&data);
        assert_eq!(engine.national(2024.5).gdp, 4103.5);
        assert!(engine.reconcile(0.15, true).is_ok());
    }
}
