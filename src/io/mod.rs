mod csv_io;
mod excel_io;
mod json_io;

use std::path::Path;

use crate::analysis::{EntitySnapshot, TimelinePoint};
use crate::error::GdpError;

pub use csv_io::{
    read_snapshot_csv, write_snapshot_csv, write_timeline_csv, SnapshotRow, TimelineRow,
};
pub use excel_io::{write_snapshot_excel, write_timeline_excel};
pub use json_io::{write_snapshot_json, write_timeline_json};

/// Trait for exporting computed GDP reports to a file.
pub trait ReportWriter {
    fn write_snapshot(
        &self,
        rows: &[EntitySnapshot],
        year: f64,
        path: &Path,
    ) -> Result<(), GdpError>;

    fn write_timeline(
        &self,
        code: &str,
        points: &[TimelinePoint],
        path: &Path,
    ) -> Result<(), GdpError>;
}

/// CSV format writer.
pub struct CsvFormat;

impl ReportWriter for CsvFormat {
    fn write_snapshot(
        &self,
        rows: &[EntitySnapshot],
        year: f64,
        path: &Path,
    ) -> Result<(), GdpError> {
        write_snapshot_csv(rows, year, path)
    }

    fn write_timeline(
        &self,
        code: &str,
        points: &[TimelinePoint],
        path: &Path,
    ) -> Result<(), GdpError> {
        write_timeline_csv(code, points, path)
    }
}

/// JSON format writer.
#[derive(Default)]
pub struct JsonFormat {
    pub pretty: bool,
}

impl ReportWriter for JsonFormat {
    fn write_snapshot(
        &self,
        rows: &[EntitySnapshot],
        year: f64,
        path: &Path,
    ) -> Result<(), GdpError> {
        write_snapshot_json(rows, year, path, self.pretty)
    }

    fn write_timeline(
        &self,
        code: &str,
        points: &[TimelinePoint],
        path: &Path,
    ) -> Result<(), GdpError> {
        write_timeline_json(code, points, path, self.pretty)
    }
}

/// Excel (.xlsx) format writer.
pub struct ExcelFormat;

impl ReportWriter for ExcelFormat {
    fn write_snapshot(
        &self,
        rows: &[EntitySnapshot],
        year: f64,
        path: &Path,
    ) -> Result<(), GdpError> {
        write_snapshot_excel(rows, year, path)
    }

    fn write_timeline(
        &self,
        code: &str,
        points: &[TimelinePoint],
        path: &Path,
    ) -> Result<(), GdpError> {
        write_timeline_excel(code, points, path)
    }
}

/// Pick a writer from the output file's extension.
pub fn writer_for_path(path: &Path, pretty: bool) -> Result<Box<dyn ReportWriter>, GdpError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "csv" => Ok(Box::new(CsvFormat)),
        "json" => Ok(Box::new(JsonFormat { pretty })),
        "xlsx" => Ok(Box::new(ExcelFormat)),
        other => Err(GdpError::ValidationError(format!(
            "Unsupported output format: '{other}' (expected csv, json or xlsx)"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{all_entity_snapshot, entity_timeline};
    use crate::models::Dataset;

    #[test]
    fn test_csv_trait_snapshot() {
        let data = Dataset::builtin().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.csv");

        let writer: &dyn ReportWriter = &CsvFormat;
        writer
            .write_snapshot(&all_entity_snapshot(&data, 2024.0), 2024.0, &path)
            .unwrap();

        assert_eq!(read_snapshot_csv(&path).unwrap().len(), 36);
    }

    #[test]
    fn test_json_trait_timeline() {
        let data = Dataset::builtin().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.json");

        let writer: &dyn ReportWriter = &JsonFormat { pretty: true };
        let gj = data.entity("GJ").unwrap();
        writer
            .write_timeline("GJ", &entity_timeline(&data, gj), &path)
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"code\": \"GJ\""));
    }

    #[test]
    fn test_json_format_default() {
        let fmt = JsonFormat::default();
        assert!(!fmt.pretty);
    }

    #[test]
    fn test_writer_for_path() {
        assert!(writer_for_path(Path::new("out.csv"), false).is_ok());
        assert!(writer_for_path(Path::new("OUT.JSON"), true).is_ok());
        assert!(writer_for_path(Path::new("out.xlsx"), false).is_ok());
        let err = writer_for_path(Path::new("out.txt"), false);
        assert!(matches!(err, Err(GdpError::ValidationError(_))));
        assert!(writer_for_path(Path::new("noext"), false).is_err());
    }
}
