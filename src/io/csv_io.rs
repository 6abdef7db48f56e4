use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::{EntitySnapshot, TimelinePoint};
use crate::error::GdpError;

/// Flat CSV/XLSX row for one entity snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRow {
    pub year: f64,
    pub code: String,
    pub name: String,
    pub gdp_billion_usd: f64,
    pub share_percent: Option<f64>,
    pub growth_percent: Option<f64>,
    pub population_million: f64,
    pub baseline_population_million: f64,
    pub per_capita_usd: Option<f64>,
    pub cumulative_investment: Option<f64>,
    pub focus_sectors: String,
}

impl SnapshotRow {
    pub fn from_snapshot(s: &EntitySnapshot, year: f64) -> Self {
        SnapshotRow {
            year,
            code: s.code.clone(),
            name: s.name.clone(),
            gdp_billion_usd: s.gdp,
            share_percent: s.share_percent,
            growth_percent: s.growth_rate,
            population_million: s.population,
            baseline_population_million: s.baseline_population,
            per_capita_usd: s.per_capita,
            cumulative_investment: s.cumulative_investment,
            focus_sectors: s.focus_sectors.clone(),
        }
    }
}

/// Flat CSV/XLSX row for one timeline year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineRow {
    pub code: String,
    pub year: i32,
    pub gdp_billion_usd: f64,
    pub growth_percent: Option<f64>,
    pub population_million: f64,
    pub per_capita_usd: Option<f64>,
    pub share_percent: Option<f64>,
    pub method: String,
}

impl TimelineRow {
    pub fn from_point(code: &str, p: &TimelinePoint) -> Self {
        TimelineRow {
            code: code.to_string(),
            year: p.year,
            gdp_billion_usd: p.gdp,
            growth_percent: p.growth_rate,
            population_million: p.population,
            per_capita_usd: p.per_capita,
            share_percent: p.share_percent,
            method: p.mode.to_string(),
        }
    }
}

/// Write an all-entity snapshot as CSV, one row per entity.
pub fn write_snapshot_csv(
    rows: &[EntitySnapshot],
    year: f64,
    path: impl AsRef<Path>,
) -> Result<(), GdpError> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    for s in rows {
        wtr.serialize(SnapshotRow::from_snapshot(s, year))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write an entity timeline as CSV, one row per year.
pub fn write_timeline_csv(
    code: &str,
    points: &[TimelinePoint],
    path: impl AsRef<Path>,
) -> Result<(), GdpError> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    for p in points {
        wtr.serialize(TimelineRow::from_point(code, p))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read snapshot rows back from CSV.
pub fn read_snapshot_csv(path: impl AsRef<Path>) -> Result<Vec<SnapshotRow>, GdpError> {
    let mut rdr = csv::Reader::from_path(path.as_ref())?;
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{all_entity_snapshot, entity_timeline};
    use crate::models::Dataset;

    #[test]
    fn test_snapshot_csv_rows() {
        let data = Dataset::builtin().unwrap();
        let snap = all_entity_snapshot(&data, 2024.0);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.csv");
        write_snapshot_csv(&snap, 2024.0, &path).unwrap();

        let rows = read_snapshot_csv(&path).unwrap();
        assert_eq!(rows.len(), 36);
        let mh = rows.iter().find(|r| r.code == "MH").unwrap();
        assert_eq!(mh.gdp_billion_usd, 488.7);
        assert_eq!(mh.year, 2024.0);
    }

    #[test]
    fn test_timeline_csv_header_and_method() {
        let data = Dataset::builtin().unwrap();
        let mh = data.entity("MH").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mh.csv");
        write_timeline_csv("MH", &entity_timeline(&data, mh), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "code,year,gdp_billion_usd,growth_percent,population_million,\
             per_capita_usd,share_percent,method"
        );
        assert_eq!(content.lines().count(), 39);
        assert!(content.contains("National share"));
        assert!(content.contains("Extrapolated"));
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let err = write_snapshot_csv(&[], 2024.0, "/nonexistent/dir/out.csv");
        assert!(err.is_err());
    }
}
