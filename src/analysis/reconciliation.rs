use serde::{Deserialize, Serialize};

use super::interpolation::entity_gdp;
use crate::error::GdpError;
use crate::models::Dataset;

/// Default relative tolerance between summed entity GDP and national GDP.
pub const DEFAULT_TOLERANCE: f64 = 0.15;

/// Summed entity GDP against national GDP for one year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearReconciliation {
    pub year: i32,
    pub national_gdp: f64,
    pub entity_total: f64,
    /// `entity_total - national_gdp`, billions USD
    pub deviation: f64,
    /// `deviation / national_gdp`
    pub relative_deviation: f64,
    pub within_tolerance: bool,
}

/// Reconciliation of the whole timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciliationReport {
    pub tolerance: f64,
    pub years: Vec<YearReconciliation>,
}

impl ReconciliationReport {
    /// True when every year lies within tolerance.
    pub fn is_consistent(&self) -> bool {
        self.years.iter().all(|y| y.within_tolerance)
    }

    /// Year with the largest absolute relative deviation.
    pub fn worst(&self) -> Option<&YearReconciliation> {
        self.years
            .iter()
            .max_by(|a, b| a.relative_deviation.abs().total_cmp(&b.relative_deviation.abs()))
    }

    /// Years outside tolerance.
    pub fn violations(&self) -> Vec<&YearReconciliation> {
        self.years.iter().filter(|y| !y.within_tolerance).collect()
    }

    /// Log every year outside tolerance and fail when `strict`.
    pub fn enforce(&self, strict: bool) -> Result<(), GdpError> {
        let violations = self.violations();
        if violations.is_empty() {
            tracing::debug!(
                tolerance = self.tolerance,
                "entity totals reconcile with national GDP"
            );
            return Ok(());
        }

        for v in &violations {
            tracing::warn!(
                year = v.year,
                relative_deviation = v.relative_deviation,
                tolerance = self.tolerance,
                "entity totals drift from national GDP"
            );
        }
        if strict {
            let years: Vec<String> = violations.iter().map(|v| v.year.to_string()).collect();
            return Err(GdpError::Reconciliation(format!(
                "entity totals exceed {:.1}% tolerance in {}",
                self.tolerance * 100.0,
                years.join(", ")
            )));
        }
        Ok(())
    }
}

/// Compare summed entity GDP to national GDP for every timeline year.
pub fn reconcile(data: &Dataset, tolerance: f64) -> ReconciliationReport {
    let national = data.national();
    let years = data
        .timeline()
        .into_iter()
        .map(|year| {
            let y = year as f64;
            let national_gdp = national.gdp(y);
            let entity_total: f64 = data
                .entities()
                .iter()
                .map(|e| entity_gdp(national, e, y))
                .sum();
            let deviation = entity_total - national_gdp;
            let relative_deviation = if national_gdp > 0.0 {
                deviation / national_gdp
            } else {
                0.0
            };
            YearReconciliation {
                year,
                national_gdp,
                entity_total,
                deviation,
                relative_deviation,
                within_tolerance: relative_deviation.abs() <= tolerance,
            }
        })
        .collect();

    ReconciliationReport { tolerance, years }
}

/// Run the reconciliation check, logging drift and failing only when `strict`.
pub fn check_reconciliation(
    data: &Dataset,
    tolerance: f64,
    strict: bool,
) -> Result<ReconciliationReport, GdpError> {
    let report = reconcile(data, tolerance);
    report.enforce(strict)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_reconciles_within_default_tolerance() {
        let data = Dataset::builtin().unwrap();
        let report = reconcile(&data, DEFAULT_TOLERANCE);
        assert_eq!(report.years.len(), 38);
        assert!(report.is_consistent());
    }

    #[test]
    fn test_anchor_years_reconcile_tightly() {
        let data = Dataset::builtin().unwrap();
        let report = reconcile(&data, DEFAULT_TOLERANCE);
        for year in [2010, 2020, 2024, 2047] {
            let y = report.years.iter().find(|r| r.year == year).unwrap();
            assert!(y.relative_deviation.abs() < 1e-3, "{year}: {}", y.relative_deviation);
        }
    }

    #[test]
    fn test_worst_year_is_mid_horizon() {
        let data = Dataset::builtin().unwrap();
        let report = reconcile(&data, DEFAULT_TOLERANCE);
        let worst = report.worst().unwrap();
        assert!(worst.year > 2025 && worst.year < 2047);
        assert!(worst.relative_deviation.abs() > 0.05);
    }

    #[test]
    fn test_tight_tolerance_reports_violations() {
        let data = Dataset::builtin().unwrap();
        let report = reconcile(&data, 0.01);
        assert!(!report.is_consistent());
        assert!(!report.violations().is_empty());
    }

    #[test]
    fn test_strict_check_fails_on_drift() {
        let data = Dataset::builtin().unwrap();
        let err = check_reconciliation(&data, 0.01, true).unwrap_err();
        assert!(matches!(err, GdpError::Reconciliation(_)));
        assert!(check_reconciliation(&data, 0.01, false).is_ok());
    }

    #[test]
    fn test_enforce_reuses_report() {
        let data = Dataset::builtin().unwrap();
        let report = reconcile(&data, 0.01);
        assert!(report.enforce(false).is_ok());
        let err = report.enforce(true).unwrap_err();
        assert!(err.to_string().contains("1.0% tolerance"));
        assert!(reconcile(&data, DEFAULT_TOLERANCE).enforce(true).is_ok());
    }
}
