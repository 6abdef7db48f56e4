use std::path::Path;

use serde::Serialize;

use crate::analysis::{EntitySnapshot, TimelinePoint};
use crate::error::GdpError;

#[derive(Serialize)]
struct SnapshotDocument<'a> {
    year: f64,
    entities: &'a [EntitySnapshot],
}

#[derive(Serialize)]
struct TimelineDocument<'a> {
    code: &'a str,
    points: &'a [TimelinePoint],
}

fn write_document<T: Serialize>(doc: &T, path: &Path, pretty: bool) -> Result<(), GdpError> {
    let content = if pretty {
        serde_json::to_string_pretty(doc)?
    } else {
        serde_json::to_string(doc)?
    };
    std::fs::write(path, content)?;
    Ok(())
}

/// Write an all-entity snapshot as a JSON document `{year, entities}`.
pub fn write_snapshot_json(
    rows: &[EntitySnapshot],
    year: f64,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), GdpError> {
    write_document(&SnapshotDocument { year, entities: rows }, path.as_ref(), pretty)
}

/// Write an entity timeline as a JSON document `{code, points}`.
pub fn write_timeline_json(
    code: &str,
    points: &[TimelinePoint],
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), GdpError> {
    write_document(&TimelineDocument { code, points }, path.as_ref(), pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{all_entity_snapshot, entity_timeline};
    use crate::models::Dataset;

    #[test]
    fn test_snapshot_json_document() {
        let data = Dataset::builtin().unwrap();
        let snap = all_entity_snapshot(&data, 2030.0);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        write_snapshot_json(&snap, 2030.0, &path, false).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["year"], 2030.0);
        let entities = value["entities"].as_array().unwrap();
        assert_eq!(entities.len(), 36);
        let mh = entities.iter().find(|e| e["code"] == "MH").unwrap();
        assert_eq!(mh["gdp"], 1000.0);
        assert_eq!(mh["gdp_anchors"]["2030"], 1000.0);
    }

    #[test]
    fn test_timeline_json_pretty() {
        let data = Dataset::builtin().unwrap();
        let ka = data.entity("KA").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ka.json");
        write_timeline_json("KA", &entity_timeline(&data, ka), &path, true).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["code"], "KA");
        assert_eq!(value["points"].as_array().unwrap().len(), 38);
        assert_eq!(value["points"][0]["mode"], "NationalShare");
        assert!(value["points"][0]["growth_rate"].is_number());
    }
}
