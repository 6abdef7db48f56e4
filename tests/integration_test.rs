use assert_approx_eq::assert_approx_eq;

use india_gdp_engine::{
    analysis::{
        all_entity_snapshot, cagr, entity_gdp, entity_growth_rate, entity_per_capita,
        entity_population, national_share, projection_mode, reconcile, trillion_tracker,
        ProjectionMode, SortKey,
    },
    error::GdpError,
    io::{self, ReportWriter},
    models::{Dataset, Entity, NationalSeries},
    Engine,
};

fn data() -> Dataset {
    Dataset::builtin().unwrap()
}

/// Three-year national series for hand-built datasets.
fn small_national() -> NationalSeries {
    NationalSeries::new(
        vec![(2020, 100.0), (2021, 110.0), (2022, 121.0)],
        vec![(2020, 10.0), (2021, 10.0), (2022, 10.0)],
        vec![(2020, 5), (2021, 5), (2022, 4)],
    )
    .unwrap()
}

#[test]
fn test_full_builtin_workflow() {
    let data = data();
    let engine = Engine::new(&data);

    assert_eq!(data.entities().len(), 36);
    assert_eq!(data.timeline().len(), 38);

    let national = engine.national(2024.0);
    assert_eq!(national.gdp, 3937.0);
    assert_eq!(national.rank, 5);

    let snap = engine.all_snapshots(2030.0);
    let total_share: f64 = snap.iter().filter_map(|s| s.share_percent).sum();
    assert!(total_share > 85.0 && total_share < 115.0, "{total_share}");

    let tracker = engine.tracker(2035.0);
    assert!(tracker.members.len() >= 6);
}

#[test]
fn test_national_interpolation_midpoint() {
    let data = data();
    assert_eq!(data.national().gdp(2024.5), 4103.5);
    assert_approx_eq!(data.national().population(2024.5), 1438.0, 1e-9);
}

#[test]
fn test_national_clamps_outside_domain() {
    let data = data();
    let n = data.national();
    assert_eq!(n.gdp(1990.0), 1676.0);
    assert_eq!(n.gdp(2100.0), 53500.0);
    assert_eq!(n.rank(2100.0), n.rank(2047.0));
}

#[test]
fn test_maharashtra_scenarios() {
    let data = data();
    let engine = Engine::new(&data);
    assert_eq!(engine.gdp("MH", 2024.0).unwrap(), 488.7);
    assert_eq!(engine.gdp("MH", 2027.0).unwrap(), 644.0);
    assert_eq!(engine.gdp("MH", 2030.0).unwrap(), 1000.0);
    assert_eq!(engine.trillion_year("MH").unwrap(), Some(2030));
}

#[test]
fn test_anchor_fidelity_every_entity() {
    let data = data();
    for e in data.entities() {
        for &(y, v) in e.anchors() {
            assert_eq!(entity_gdp(data.national(), e, y as f64), v, "{} {y}", e.code);
        }
    }
}

#[test]
fn test_monotonic_from_2020() {
    let data = data();
    for e in data.entities() {
        let mut prev = entity_gdp(data.national(), e, 2020.0);
        for year in 2021..=2047 {
            let now = entity_gdp(data.national(), e, year as f64);
            assert!(now >= prev, "{} dips in {year}", e.code);
            prev = now;
        }
    }
}

#[test]
fn test_share_mode_tracks_national_curve() {
    let data = data();
    let up = data.entity("UP").unwrap();
    let (y0, v0) = up.first_anchor();
    let share = v0 / data.national().gdp(y0 as f64);
    for year in [2010.0, 2015.0, 2020.0] {
        let expected = share * data.national().gdp(year);
        assert_approx_eq!(entity_gdp(data.national(), up, year), expected, 1e-9);
        assert_eq!(projection_mode(up, year), ProjectionMode::NationalShare);
    }
}

#[test]
fn test_custom_dataset_interpolation() {
    let national = small_national();
    let e = Entity::new("AA", "Alpha", 2.0, vec![(2021, 50.0), (2022, 60.0)]).unwrap();
    let data = Dataset::new(national, vec![e]).unwrap();
    let alpha = data.entity("aa").unwrap();

    // Before the first anchor: 50/110 of national
    assert_approx_eq!(entity_gdp(data.national(), alpha, 2020.0), 50.0 / 110.0 * 100.0, 1e-9);
    // After the last anchor: 20% CAGR continues
    assert_approx_eq!(entity_gdp(data.national(), alpha, 2023.0), 72.0, 1e-9);
    assert_approx_eq!(cagr(50.0, 60.0, 1.0), 0.2, 1e-12);
}

#[test]
fn test_custom_dataset_metrics() {
    let national = small_national();
    let e = Entity::new("AA", "Alpha", 2.0, vec![(2021, 50.0), (2022, 60.0)]).unwrap();
    let data = Dataset::new(national, vec![e]).unwrap();
    let n = data.national();
    let alpha = data.entity("AA").unwrap();

    assert_approx_eq!(entity_growth_rate(n, alpha, 2022.0).unwrap(), 20.0, 1e-9);
    // Flat national population keeps the baseline
    assert_approx_eq!(entity_population(n, alpha, 2022.0), 2.0, 1e-12);
    assert_approx_eq!(entity_per_capita(n, alpha, 2022.0).unwrap(), 30_000.0, 1e-6);
    assert_approx_eq!(national_share(n, alpha, 2022.0).unwrap(), 60.0 / 121.0 * 100.0, 1e-9);
}

#[test]
fn test_zero_population_entity_has_no_per_capita() {
    let national = small_national();
    let e = Entity::new("ZP", "Zero Pop", 0.0, vec![(2020, 1.0), (2022, 2.0)]).unwrap();
    let data = Dataset::new(national, vec![e]).unwrap();
    let zp = data.entity("ZP").unwrap();
    assert_eq!(entity_per_capita(data.national(), zp, 2021.0), None);
}

#[test]
fn test_single_anchor_rejected() {
    let err = Entity::new("ONE", "One", 1.0, vec![(2024, 10.0)]).unwrap_err();
    assert!(matches!(err, GdpError::ValidationError(_)));
}

#[test]
fn test_duplicate_entity_codes_rejected() {
    let a = Entity::new("AA", "Alpha", 1.0, vec![(2020, 1.0), (2021, 2.0)]).unwrap();
    let b = Entity::new("aa", "Alpha again", 1.0, vec![(2020, 1.0), (2021, 2.0)]).unwrap();
    assert!(Dataset::new(small_national(), vec![a, b]).is_err());
}

#[test]
fn test_reconciliation_at_anchored_years() {
    let data = data();
    let report = reconcile(&data, 0.15);
    let y2024 = report.years.iter().find(|y| y.year == 2024).unwrap();
    let y2047 = report.years.iter().find(|y| y.year == 2047).unwrap();
    assert!(y2024.relative_deviation.abs() < 1e-3);
    assert!(y2047.relative_deviation.abs() < 1e-3);
    assert!(report.is_consistent());
}

#[test]
fn test_tracker_progress_capped() {
    let data = data();
    let tracker = trillion_tracker(&data, 2047.0);
    assert!(tracker.members.iter().all(|m| m.progress_percent <= 100.0));
    assert!(tracker.contenders.iter().all(|c| c.gdp >= 100.0 && c.gdp < 1000.0));
}

#[test]
fn test_snapshot_sorting_via_key() {
    let data = data();
    let mut rows = all_entity_snapshot(&data, 2024.0);
    let key: SortKey = "per_capita".parse().unwrap();
    india_gdp_engine::analysis::sort_snapshots(&mut rows, key, false);
    let first = rows[0].per_capita.unwrap();
    let last = rows[rows.len() - 1].per_capita.unwrap();
    assert!(first >= last);
}

#[test]
fn test_export_roundtrip_through_trait() {
    let data = data();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.csv");
    let writer = io::writer_for_path(&path, false).unwrap();
    writer
        .write_snapshot(&all_entity_snapshot(&data, 2047.0), 2047.0, &path)
        .unwrap();
    let rows = io::read_snapshot_csv(&path).unwrap();
    let mh = rows.iter().find(|r| r.code == "MH").unwrap();
    assert_eq!(mh.gdp_billion_usd, 5600.0);
}
