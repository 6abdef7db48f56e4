use colored::Colorize;

use super::format::{format_billions, GdpTier};
use crate::analysis::{TimelinePoint, TrillionEntry, TrillionTracker};

const BAR_WIDTH: usize = 40;

fn bar(fraction: f64) -> String {
    let len = (fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "\u{2588}".repeat(len), "\u{2591}".repeat(BAR_WIDTH - len))
}

fn push_entry(output: &mut String, e: &TrillionEntry) {
    let tier = GdpTier::for_gdp(e.gdp);
    output.push_str(&format!(
        "  {:<4} {:<28} {:>9}  {}  {:>5.1}%\n",
        e.code,
        e.name,
        format_billions(e.gdp),
        tier.paint(&bar(e.progress_percent / 100.0)),
        e.progress_percent
    ));
}

/// Format the $1T tracker as progress bars.
pub fn format_tracker_chart(tracker: &TrillionTracker) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\n{}\n",
        format!("$1 Trillion Club, {}", tracker.year).bold().green()
    ));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    if tracker.is_empty() {
        output.push_str("  No data available.\n");
        return output;
    }

    if tracker.members.is_empty() {
        output.push_str(&format!("  {}\n", "No members yet.".dimmed()));
    } else {
        output.push_str(&format!("  {}\n", "Members".bold()));
        for e in &tracker.members {
            push_entry(&mut output, e);
        }
    }

    if !tracker.contenders.is_empty() {
        output.push_str(&format!("  {}\n", "Closest contenders".bold()));
        for e in &tracker.contenders {
            push_entry(&mut output, e);
        }
    }

    output.push('\n');
    output
}

/// Print the $1T tracker.
pub fn print_tracker_chart(tracker: &TrillionTracker) {
    print!("{}", format_tracker_chart(tracker));
}

/// Format an entity's GDP trajectory as horizontal bars, scaled to its peak.
pub fn format_timeline_chart(name: &str, points: &[TimelinePoint]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", format!("{name} GDP Trajectory").bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    if points.is_empty() {
        output.push_str("  No data available.\n");
        return output;
    }

    let max_gdp = points.iter().map(|p| p.gdp).fold(0.0f64, f64::max);

    for p in points {
        let fraction = if max_gdp > 0.0 { p.gdp / max_gdp } else { 0.0 };
        output.push_str(&format!(
            "  {}  {:>9}  {}\n",
            p.year,
            format_billions(p.gdp),
            GdpTier::for_gdp(p.gdp).paint(&bar(fraction))
        ));
    }

    output.push('\n');
    output
}

pub fn print_timeline_chart(name: &str, points: &[TimelinePoint]) {
    print!("{}", format_timeline_chart(name, points));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{entity_timeline, trillion_tracker};
    use crate::models::Dataset;

    #[test]
    fn test_bar_bounds() {
        assert_eq!(bar(0.0).chars().filter(|c| *c == '\u{2588}').count(), 0);
        assert_eq!(bar(1.0).chars().filter(|c| *c == '\u{2588}').count(), BAR_WIDTH);
        assert_eq!(bar(2.0).chars().count(), BAR_WIDTH);
        assert_eq!(bar(0.5).chars().filter(|c| *c == '\u{2588}').count(), 20);
    }

    #[test]
    fn test_format_tracker_empty() {
        let tracker = TrillionTracker {
            year: 2024.0,
            members: vec![],
            contenders: vec![],
        };
        let output = format_tracker_chart(&tracker);
        assert!(output.contains("No data available."));
        assert!(output.contains("$1 Trillion Club"));
    }

    #[test]
    fn test_format_tracker_2030() {
        let data = Dataset::builtin().unwrap();
        let output = format_tracker_chart(&trillion_tracker(&data, 2030.0));
        assert!(output.contains("Members"));
        assert!(output.contains("Maharashtra"));
        assert!(output.contains("100.0%"));
        assert!(output.contains("Closest contenders"));
    }

    #[test]
    fn test_format_tracker_before_first_member() {
        let data = Dataset::builtin().unwrap();
        let output = format_tracker_chart(&trillion_tracker(&data, 2024.0));
        assert!(output.contains("No members yet."));
        assert!(output.contains("488.7B"));
    }

    #[test]
    fn test_format_timeline_chart() {
        let data = Dataset::builtin().unwrap();
        let ka = data.entity("KA").unwrap();
        let output = format_timeline_chart(&ka.name, &entity_timeline(&data, ka));
        assert!(output.contains("Karnataka GDP Trajectory"));
        assert!(output.contains("2047"));
        assert!(format_timeline_chart("X", &[]).contains("No data available."));
    }
}
