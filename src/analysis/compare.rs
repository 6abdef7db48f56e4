use serde::{Deserialize, Serialize};

use super::interpolation::entity_gdp;
use super::metrics::{entity_growth_rate, entity_per_capita};
use crate::error::GdpError;
use crate::models::Dataset;

/// Raw and normalised comparison metrics for one entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub code: String,
    pub name: String,
    pub gdp: f64,
    pub growth_rate: Option<f64>,
    pub per_capita: Option<f64>,
    /// GDP in the final timeline year
    pub gdp_horizon: f64,
    pub baseline_population: f64,
    /// Each metric scaled to 0-100 against the largest in the selection
    pub scores: ComparisonScores,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparisonScores {
    pub gdp: f64,
    pub growth: f64,
    pub per_capita: f64,
    pub gdp_horizon: f64,
    pub population: f64,
}

/// Compare the selected entities side by side for `year`.
///
/// Scores divide each value by the maximum across the selection, with the
/// maximum floored at 1 so tiny selections are not inflated.
pub fn compare(
    data: &Dataset,
    codes: &[String],
    year: f64,
) -> Result<Vec<ComparisonRow>, GdpError> {
    let national = data.national();
    let horizon = data.max_year() as f64;

    let mut rows = Vec::with_capacity(codes.len());
    for code in codes {
        let entity = data.require_entity(code)?;
        rows.push(ComparisonRow {
            code: entity.code.clone(),
            name: entity.name.clone(),
            gdp: entity_gdp(national, entity, year),
            growth_rate: entity_growth_rate(national, entity, year),
            per_capita: entity_per_capita(national, entity, year),
            gdp_horizon: entity_gdp(national, entity, horizon),
            baseline_population: entity.baseline_population,
            scores: ComparisonScores::default(),
        });
    }

    let max_gdp = max_floored(rows.iter().map(|r| r.gdp));
    let max_growth = max_floored(rows.iter().map(|r| r.growth_rate.unwrap_or(0.0)));
    let max_pc = max_floored(rows.iter().map(|r| r.per_capita.unwrap_or(0.0)));
    let max_horizon = max_floored(rows.iter().map(|r| r.gdp_horizon));
    let max_pop = max_floored(rows.iter().map(|r| r.baseline_population));

    for row in &mut rows {
        row.scores = ComparisonScores {
            gdp: row.gdp / max_gdp * 100.0,
            growth: row.growth_rate.unwrap_or(0.0) / max_growth * 100.0,
            per_capita: row.per_capita.unwrap_or(0.0) / max_pc * 100.0,
            gdp_horizon: row.gdp_horizon / max_horizon * 100.0,
            population: row.baseline_population / max_pop * 100.0,
        };
    }

    Ok(rows)
}

fn max_floored(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(1.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_compare_scores_leader_is_100() {
        let data = Dataset::builtin().unwrap();
        let rows = compare(&data, &codes(&["MH", "KA", "GA"]), 2024.0).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].code, "MH");
        assert!((rows[0].scores.gdp - 100.0).abs() < 1e-9);
        assert!(rows[2].scores.gdp < rows[1].scores.gdp);
        // Goa has the highest per-capita of the three
        assert!((rows[2].scores.per_capita - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_compare_horizon_uses_final_year() {
        let data = Dataset::builtin().unwrap();
        let rows = compare(&data, &codes(&["TN"]), 2024.0).unwrap();
        assert_eq!(rows[0].gdp_horizon, 5760.0);
    }

    #[test]
    fn test_compare_unknown_code() {
        let data = Dataset::builtin().unwrap();
        let err = compare(&data, &codes(&["MH", "ZZ"]), 2024.0).unwrap_err();
        assert!(matches!(err, GdpError::UnknownEntity(_)));
    }

    #[test]
    fn test_compare_small_values_not_inflated() {
        let data = Dataset::builtin().unwrap();
        let rows = compare(&data, &codes(&["LD"]), 2024.0).unwrap();
        // 0.1B is far below the floor of 1
        assert!(rows[0].scores.gdp < 100.0);
    }

    #[test]
    fn test_compare_empty_selection() {
        let data = Dataset::builtin().unwrap();
        assert!(compare(&data, &[], 2024.0).unwrap().is_empty());
    }
}
