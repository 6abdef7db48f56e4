mod charts;
mod format;
mod tables;

pub use charts::{
    format_timeline_chart, format_tracker_chart, print_timeline_chart, print_tracker_chart,
};
pub use format::{
    fixed, format_billions, format_compact, format_dollars, format_optional_dollars,
    format_percent, group_thousands, round_half_up, GdpTier, MISSING,
};
pub use tables::{
    format_clock, format_comparison_table, format_entity_detail, format_exchange_rate,
    format_national_summary, format_national_timeline, format_reconciliation_table,
    format_snapshot_table, format_timeline_table, print_clock, print_comparison_table,
    print_entity_detail, print_exchange_rate, print_national_summary, print_national_timeline,
    print_reconciliation_table, print_snapshot_table, print_timeline_table,
};
