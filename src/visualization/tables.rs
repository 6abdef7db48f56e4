use colored::Colorize;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table,
};

use super::format::{
    format_billions, format_compact, format_optional_dollars, format_percent, GdpTier,
};
use crate::analysis::{
    ComparisonRow, EntitySnapshot, GdpClock, NationalSummary, ReconciliationReport, TimelinePoint,
};
use crate::fx::ExchangeRate;

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn title(output: &mut String, text: &str, width: usize) {
    output.push_str(&format!("\n{}\n", text.bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(width)));
}

/// Format national headline figures for one year as a string.
pub fn format_national_summary(summary: &NationalSummary) -> String {
    let mut output = String::new();
    title(&mut output, &format!("India, {}", summary.year), 50);

    let mut table = new_table(vec!["Metric", "Value", "Unit"]);
    table.add_row(vec![
        Cell::new("GDP"),
        Cell::new(format_billions(summary.gdp)),
        Cell::new("USD"),
    ]);
    table.add_row(vec![
        Cell::new("Population"),
        Cell::new(format!("{:.1}", summary.population)),
        Cell::new("million"),
    ]);
    table.add_row(vec![
        Cell::new("Global Rank"),
        Cell::new(format!("#{}", summary.rank)),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Growth"),
        Cell::new(format_percent(summary.growth_rate)),
        Cell::new("YoY"),
    ]);
    table.add_row(vec![
        Cell::new("GDP per Capita"),
        Cell::new(format_optional_dollars(summary.per_capita)),
        Cell::new("USD"),
    ]);

    output.push_str(&format!("{table}"));
    output
}

/// Print national headline figures.
pub fn print_national_summary(summary: &NationalSummary) {
    print!("{}", format_national_summary(summary));
}

/// Format the national series year by year.
pub fn format_national_timeline(rows: &[NationalSummary]) -> String {
    let mut output = String::new();
    title(&mut output, "India GDP Timeline", 60);

    let mut table = new_table(vec![
        "Year",
        "GDP",
        "Growth",
        "Population (M)",
        "Per Capita",
        "Rank",
    ]);
    for row in rows {
        table.add_row(vec![
            Cell::new(format!("{:.0}", row.year)),
            Cell::new(format_billions(row.gdp)),
            Cell::new(format_percent(row.growth_rate)),
            Cell::new(format!("{:.0}", row.population)),
            Cell::new(format_optional_dollars(row.per_capita)),
            Cell::new(format!("#{}", row.rank)),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

pub fn print_national_timeline(rows: &[NationalSummary]) {
    print!("{}", format_national_timeline(rows));
}

/// Format the all-entity snapshot as a string.
pub fn format_snapshot_table(rows: &[EntitySnapshot], year: f64) -> String {
    let mut output = String::new();
    title(&mut output, &format!("States & Union Territories, {year}"), 70);
    output.push_str(&format!("{}\n", format!("{} entities", rows.len()).dimmed()));

    let mut table = new_table(vec![
        "Code",
        "Name",
        "GDP",
        "Share",
        "Growth",
        "Population (M)",
        "Per Capita",
    ]);
    for s in rows {
        let tier = GdpTier::for_gdp(s.gdp);
        table.add_row(vec![
            Cell::new(&s.code),
            Cell::new(&s.name),
            Cell::new(tier.paint(&format_billions(s.gdp)).to_string()),
            Cell::new(format_percent(s.share_percent)),
            Cell::new(format_percent(s.growth_rate)),
            Cell::new(format!("{:.1}", s.population)),
            Cell::new(format_optional_dollars(s.per_capita)),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the all-entity snapshot.
pub fn print_snapshot_table(rows: &[EntitySnapshot], year: f64) {
    print!("{}", format_snapshot_table(rows, year));
}

/// Format one entity's detail card: snapshot fields plus its anchors.
pub fn format_entity_detail(snapshot: &EntitySnapshot, trillion_year: Option<i32>) -> String {
    let mut output = String::new();
    title(&mut output, &format!("{} ({})", snapshot.name, snapshot.code), 50);
    if !snapshot.focus_sectors.is_empty() {
        output.push_str(&format!("{}\n", snapshot.focus_sectors.dimmed()));
    }

    let mut table = new_table(vec!["Metric", "Value"]);
    table.add_row(vec![Cell::new("GDP"), Cell::new(format_billions(snapshot.gdp))]);
    table.add_row(vec![
        Cell::new("National Share"),
        Cell::new(format_percent(snapshot.share_percent)),
    ]);
    table.add_row(vec![
        Cell::new("Growth"),
        Cell::new(format_percent(snapshot.growth_rate)),
    ]);
    table.add_row(vec![
        Cell::new("Population (M)"),
        Cell::new(format!("{:.1}", snapshot.population)),
    ]);
    table.add_row(vec![
        Cell::new("Per Capita"),
        Cell::new(format_optional_dollars(snapshot.per_capita)),
    ]);
    table.add_row(vec![
        Cell::new("$1T Year"),
        Cell::new(trillion_year.map_or_else(|| "beyond horizon".to_string(), |y| y.to_string())),
    ]);
    if let Some(inv) = snapshot.cumulative_investment {
        table.add_row(vec![
            Cell::new("Cumulative Investment"),
            Cell::new(format_billions(inv)),
        ]);
    }
    output.push_str(&format!("{table}"));

    let anchors: Vec<String> = snapshot
        .gdp_anchors
        .iter()
        .map(|(y, v)| format!("{y}: {}", format_billions(*v)))
        .collect();
    output.push_str(&format!("\n{} {}\n", "Anchors:".bold(), anchors.join(", ")));
    output
}

pub fn print_entity_detail(snapshot: &EntitySnapshot, trillion_year: Option<i32>) {
    print!("{}", format_entity_detail(snapshot, trillion_year));
}

/// Format an entity's timeline as a string.
pub fn format_timeline_table(name: &str, points: &[TimelinePoint]) -> String {
    let mut output = String::new();
    title(&mut output, &format!("{name} GDP Timeline"), 60);

    let mut table = new_table(vec!["Year", "GDP", "Growth", "Share", "Per Capita", "Method"]);
    for p in points {
        table.add_row(vec![
            Cell::new(p.year),
            Cell::new(format_billions(p.gdp)),
            Cell::new(format_percent(p.growth_rate)),
            Cell::new(format_percent(p.share_percent)),
            Cell::new(format_optional_dollars(p.per_capita)),
            Cell::new(p.mode.to_string()),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print an entity's timeline.
pub fn print_timeline_table(name: &str, points: &[TimelinePoint]) {
    print!("{}", format_timeline_table(name, points));
}

/// Format a side-by-side comparison as a string.
pub fn format_comparison_table(rows: &[ComparisonRow], year: f64) -> String {
    let mut output = String::new();
    title(&mut output, &format!("Comparison, {year}"), 60);

    let mut table = new_table(vec![
        "Code",
        "GDP",
        "Growth",
        "Per Capita",
        "GDP (horizon)",
        "Population (M)",
        "Scores G/Gr/PC/H/P",
    ]);
    for r in rows {
        let s = &r.scores;
        table.add_row(vec![
            Cell::new(&r.code),
            Cell::new(format_billions(r.gdp)),
            Cell::new(format_percent(r.growth_rate)),
            Cell::new(format_optional_dollars(r.per_capita)),
            Cell::new(format_billions(r.gdp_horizon)),
            Cell::new(format!("{:.1}", r.baseline_population)),
            Cell::new(format!(
                "{:.0}/{:.0}/{:.0}/{:.0}/{:.0}",
                s.gdp, s.growth, s.per_capita, s.gdp_horizon, s.population
            )),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

pub fn print_comparison_table(rows: &[ComparisonRow], year: f64) {
    print!("{}", format_comparison_table(rows, year));
}

/// Format the reconciliation report as a string.
pub fn format_reconciliation_table(report: &ReconciliationReport) -> String {
    let mut output = String::new();
    title(&mut output, "Reconciliation", 60);
    let status = if report.is_consistent() {
        "within tolerance".green()
    } else {
        "outside tolerance".red()
    };
    output.push_str(&format!(
        "Tolerance: {:.1}% | {}\n",
        report.tolerance * 100.0,
        status
    ));

    let mut table = new_table(vec!["Year", "National", "Sum of Entities", "Deviation", "Relative"]);
    for y in &report.years {
        let rel = format!("{:+.2}%", y.relative_deviation * 100.0);
        let rel = if y.within_tolerance {
            rel
        } else {
            rel.red().to_string()
        };
        table.add_row(vec![
            Cell::new(y.year),
            Cell::new(format_billions(y.national_gdp)),
            Cell::new(format_billions(y.entity_total)),
            Cell::new(format!("{:+.1}", y.deviation)),
            Cell::new(rel),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

pub fn print_reconciliation_table(report: &ReconciliationReport) {
    print!("{}", format_reconciliation_table(report));
}

/// Format a clock reading, with rupee figures when a rate is given.
pub fn format_clock(clock: &GdpClock, rate: Option<&ExchangeRate>) -> String {
    let mut output = String::new();
    title(&mut output, &format!("India's GDP, {}", clock.year), 50);
    output.push_str(&format!(
        "  ${}\n",
        super::format::group_thousands(clock.live_dollars() as i64).bold()
    ));
    if !clock.is_live {
        output.push_str(&format!("  {}\n", "(static: outside timeline)".dimmed()));
    }

    let mut table = new_table(vec!["Metric", "Value"]);
    table.add_row(vec![
        Cell::new("Year elapsed"),
        Cell::new(format!("{:.2}%", clock.elapsed_fraction * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Per second"),
        Cell::new(format!("${}", format_compact(clock.per_second * 1e9))),
    ]);
    table.add_row(vec![
        Cell::new("Per day"),
        Cell::new(
            clock.per_day_usd.map_or_else(
                || super::format::MISSING.to_string(),
                |d| format!("${}", format_compact(d)),
            ),
        ),
    ]);
    if let Some(fx) = rate {
        table.add_row(vec![
            Cell::new("GDP (INR)"),
            Cell::new(format!("₹{}", format_compact(clock.live_gdp_inr(fx.rate) * 1e9))),
        ]);
        table.add_row(vec![
            Cell::new("Per day (INR)"),
            Cell::new(clock.per_day_inr(fx.rate).map_or_else(
                || super::format::MISSING.to_string(),
                |d| format!("₹{}", format_compact(d)),
            )),
        ]);
        table.add_row(vec![
            Cell::new("Rate"),
            Cell::new(format!("₹{:.2} / USD ({})", fx.rate, fx.source)),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

pub fn print_clock(clock: &GdpClock, rate: Option<&ExchangeRate>) {
    print!("{}", format_clock(clock, rate));
}

/// Format a resolved exchange rate as a one-line summary.
pub fn format_exchange_rate(rate: &ExchangeRate) -> String {
    let status = if rate.is_live {
        "live".green()
    } else {
        "fallback".yellow()
    };
    format!(
        "₹{:.2} per USD [{}] source: {} at {}\n",
        rate.rate,
        status,
        rate.source,
        rate.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

pub fn print_exchange_rate(rate: &ExchangeRate) {
    print!("{}", format_exchange_rate(rate));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{
        all_entity_snapshot, compare, entity_timeline, national_summary, national_timeline,
        reconcile,
    };
    use crate::models::Dataset;

    fn data() -> Dataset {
        Dataset::builtin().unwrap()
    }

    #[test]
    fn test_format_national_summary_contains_fields() {
        let data = data();
        let output = format_national_summary(&national_summary(data.national(), 2024.0));
        assert!(output.contains("GDP"));
        assert!(output.contains("3.937T"));
        assert!(output.contains("Global Rank"));
        assert!(output.contains("#5"));
    }

    #[test]
    fn test_format_national_timeline_first_year_missing_growth() {
        let data = data();
        let output = format_national_timeline(&national_timeline(data.national()));
        assert!(output.contains("2010"));
        assert!(output.contains("2047"));
        assert!(output.contains("53.500T"));
    }

    #[test]
    fn test_format_snapshot_table_contains_entities() {
        colored::control::set_override(false);
        let data = data();
        let rows = all_entity_snapshot(&data, 2024.0);
        let output = format_snapshot_table(&rows, 2024.0);
        assert!(output.contains("Maharashtra"));
        assert!(output.contains("488.7B"));
        assert!(output.contains("36 entities"));
    }

    #[test]
    fn test_format_entity_detail() {
        let data = data();
        let rows = all_entity_snapshot(&data, 2024.0);
        let mh = rows.iter().find(|s| s.code == "MH").unwrap();
        let output = format_entity_detail(mh, Some(2030));
        assert!(output.contains("Maharashtra (MH)"));
        assert!(output.contains("2030"));
        assert!(output.contains("Anchors:"));
    }

    #[test]
    fn test_format_timeline_table_shows_method() {
        let data = data();
        let mh = data.entity("MH").unwrap();
        let output = format_timeline_table(&mh.name, &entity_timeline(&data, mh));
        assert!(output.contains("National share"));
        assert!(output.contains("Interpolated"));
        assert!(output.contains("1.000T"));
    }

    #[test]
    fn test_format_comparison_table() {
        let data = data();
        let codes = vec!["MH".to_string(), "GJ".to_string()];
        let rows = compare(&data, &codes, 2024.0).unwrap();
        let output = format_comparison_table(&rows, 2024.0);
        assert!(output.contains("MH"));
        assert!(output.contains("GJ"));
        assert!(output.contains("100/"));
    }

    #[test]
    fn test_format_reconciliation_table() {
        let data = data();
        let output = format_reconciliation_table(&reconcile(&data, 0.15));
        assert!(output.contains("Tolerance: 15.0%"));
        assert!(output.contains("Sum of Entities"));
    }

    #[test]
    fn test_format_clock_with_rate() {
        let data = data();
        let clock = GdpClock::for_year(data.national(), 2025, 0.5);
        let rate = ExchangeRate::fallback(83.5);
        let output = format_clock(&clock, Some(&rate));
        assert!(output.contains("4,103,500,000,000"));
        assert!(output.contains("fallback (₹83.50)"));
        assert!(output.contains("Per day (INR)"));
    }

    #[test]
    fn test_format_exchange_rate() {
        colored::control::set_override(false);
        let output = format_exchange_rate(&ExchangeRate::live(83.25, "open.er-api.com"));
        assert!(output.contains("₹83.25"));
        assert!(output.contains("live"));
        assert!(output.contains("open.er-api.com"));
    }
}
