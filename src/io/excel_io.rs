use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use super::csv_io::{SnapshotRow, TimelineRow};
use crate::analysis::{EntitySnapshot, TimelinePoint};
use crate::error::GdpError;

const SNAPSHOT_HEADERS: [&str; 11] = [
    "year",
    "code",
    "name",
    "gdp_billion_usd",
    "share_percent",
    "growth_percent",
    "population_million",
    "baseline_population_million",
    "per_capita_usd",
    "cumulative_investment",
    "focus_sectors",
];

const TIMELINE_HEADERS: [&str; 8] = [
    "code",
    "year",
    "gdp_billion_usd",
    "growth_percent",
    "population_million",
    "per_capita_usd",
    "share_percent",
    "method",
];

fn write_headers(worksheet: &mut Worksheet, headers: &[&str]) -> Result<(), GdpError> {
    let bold = Format::new().set_bold();
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }
    Ok(())
}

fn write_optional(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<f64>,
) -> Result<(), GdpError> {
    if let Some(v) = value {
        worksheet.write_number(row, col, v)?;
    }
    Ok(())
}

/// Write an all-entity snapshot to an Excel (.xlsx) file.
pub fn write_snapshot_excel(
    rows: &[EntitySnapshot],
    year: f64,
    path: impl AsRef<Path>,
) -> Result<(), GdpError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Snapshot")?;
    write_headers(worksheet, &SNAPSHOT_HEADERS)?;

    for (i, s) in rows.iter().enumerate() {
        let r = SnapshotRow::from_snapshot(s, year);
        let row = i as u32 + 1;
        worksheet.write_number(row, 0, r.year)?;
        worksheet.write_string(row, 1, &r.code)?;
        worksheet.write_string(row, 2, &r.name)?;
        worksheet.write_number(row, 3, r.gdp_billion_usd)?;
        write_optional(worksheet, row, 4, r.share_percent)?;
        write_optional(worksheet, row, 5, r.growth_percent)?;
        worksheet.write_number(row, 6, r.population_million)?;
        worksheet.write_number(row, 7, r.baseline_population_million)?;
        write_optional(worksheet, row, 8, r.per_capita_usd)?;
        write_optional(worksheet, row, 9, r.cumulative_investment)?;
        worksheet.write_string(row, 10, &r.focus_sectors)?;
    }

    workbook.save(path.as_ref())?;
    Ok(())
}

/// Write an entity timeline to an Excel (.xlsx) file.
pub fn write_timeline_excel(
    code: &str,
    points: &[TimelinePoint],
    path: impl AsRef<Path>,
) -> Result<(), GdpError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(code)?;
    write_headers(worksheet, &TIMELINE_HEADERS)?;

    for (i, p) in points.iter().enumerate() {
        let r = TimelineRow::from_point(code, p);
        let row = i as u32 + 1;
        worksheet.write_string(row, 0, &r.code)?;
        worksheet.write_number(row, 1, r.year as f64)?;
        worksheet.write_number(row, 2, r.gdp_billion_usd)?;
        write_optional(worksheet, row, 3, r.growth_percent)?;
        worksheet.write_number(row, 4, r.population_million)?;
        write_optional(worksheet, row, 5, r.per_capita_usd)?;
        write_optional(worksheet, row, 6, r.share_percent)?;
        worksheet.write_string(row, 7, &r.method)?;
    }

    workbook.save(path.as_ref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{all_entity_snapshot, entity_timeline};
    use crate::models::Dataset;

    fn is_xlsx(path: &Path) -> bool {
        let bytes = std::fs::read(path).unwrap();
        bytes.len() > 4 && &bytes[..2] == b"PK"
    }

    #[test]
    fn test_write_snapshot_excel() {
        let data = Dataset::builtin().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.xlsx");
        write_snapshot_excel(&all_entity_snapshot(&data, 2024.0), 2024.0, &path).unwrap();
        assert!(is_xlsx(&path));
    }

    #[test]
    fn test_write_timeline_excel() {
        let data = Dataset::builtin().unwrap();
        let up = data.entity("UP").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("up.xlsx");
        write_timeline_excel("UP", &entity_timeline(&data, up), &path).unwrap();
        assert!(is_xlsx(&path));
    }
}
