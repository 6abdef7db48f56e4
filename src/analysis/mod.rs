mod clock;
mod compare;
mod engine;
mod interpolation;
mod metrics;
mod milestones;
mod reconciliation;

pub use clock::{year_fraction, GdpClock, SECONDS_PER_YEAR};
pub use compare::{compare, ComparisonRow, ComparisonScores};
pub use engine::Engine;
pub use interpolation::{cagr, compound, entity_gdp, projection_mode, ProjectionMode};
pub use metrics::{
    all_entity_snapshot, entity_growth_rate, entity_per_capita, entity_population,
    entity_snapshot, entity_timeline, filter_snapshots, national_share, national_summary,
    national_timeline, sort_snapshots, EntitySnapshot, NationalSummary, SortKey, TimelinePoint,
};
pub use milestones::{
    trillion_tracker, trillion_year, TrillionEntry, TrillionTracker, CONTENDER_COUNT,
    CONTENDER_FLOOR, TRILLION,
};
pub use reconciliation::{
    check_reconciliation, reconcile, ReconciliationReport, YearReconciliation, DEFAULT_TOLERANCE,
};
