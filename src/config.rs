use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::GdpError;

/// Runtime settings, loaded from TOML. Every field has a default.
///
/// ```toml
/// [fx]
/// timeout_secs = 8
/// refresh_interval_secs = 1800
///
/// [reconciliation]
/// tolerance = 0.15
/// strict = false
/// check_on_load = false
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub fx: FxConfig,
    pub reconciliation: ReconciliationConfig,
}

/// Exchange-rate resolver settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    /// Per-provider request timeout
    pub timeout_secs: u64,
    /// Interval between background cache refreshes
    pub refresh_interval_secs: u64,
    /// INR per USD used when no provider answers
    pub fallback_rate: f64,
    /// Exclusive lower bound of a plausible rate
    pub min_rate: f64,
    /// Exclusive upper bound of a plausible rate
    pub max_rate: f64,
}

impl Default for FxConfig {
    fn default() -> Self {
        FxConfig {
            timeout_secs: 8,
            refresh_interval_secs: 30 * 60,
            fallback_rate: 83.5,
            min_rate: 50.0,
            max_rate: 200.0,
        }
    }
}

impl FxConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    /// Whether `rate` falls strictly inside the plausible band.
    pub fn is_plausible(&self, rate: f64) -> bool {
        rate.is_finite() && rate > self.min_rate && rate < self.max_rate
    }
}

/// Reconciliation check settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconciliationConfig {
    /// Allowed relative drift between entity totals and national GDP
    pub tolerance: f64,
    /// Fail instead of warn when drift exceeds tolerance
    pub strict: bool,
    /// Check the dataset right after it is loaded
    pub check_on_load: bool,
}

impl Default for ReconciliationConfig {
    fn default() -> Self {
        ReconciliationConfig {
            tolerance: crate::analysis::DEFAULT_TOLERANCE,
            strict: false,
            check_on_load: false,
        }
    }
}

impl ReconciliationConfig {
    pub fn validate(&self) -> Result<(), GdpError> {
        let tol = self.tolerance;
        if !tol.is_finite() || tol < 0.0 {
            return Err(GdpError::ValidationError(format!(
                "reconciliation.tolerance must be non-negative, got {tol}"
            )));
        }
        Ok(())
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, GdpError> {
        let config: EngineConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GdpError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GdpError> {
        let fx = &self.fx;
        if fx.timeout_secs == 0 {
            return Err(GdpError::ValidationError(
                "fx.timeout_secs must be positive".to_string(),
            ));
        }
        if fx.refresh_interval_secs == 0 {
            return Err(GdpError::ValidationError(
                "fx.refresh_interval_secs must be positive".to_string(),
            ));
        }
        if !(fx.min_rate.is_finite() && fx.max_rate.is_finite()) || fx.min_rate >= fx.max_rate
        {
            return Err(GdpError::ValidationError(format!(
                "fx rate band is empty: ({}, {})",
                fx.min_rate, fx.max_rate
            )));
        }
        if !fx.fallback_rate.is_finite() || fx.fallback_rate <= 0.0 {
            return Err(GdpError::ValidationError(format!(
                "fx.fallback_rate must be positive, got {}",
                fx.fallback_rate
            )));
        }
        self.reconciliation.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.fx.timeout(), Duration::from_secs(8));
        assert_eq!(config.fx.refresh_interval(), Duration::from_secs(1800));
        assert_eq!(config.fx.fallback_rate, 83.5);
        assert_eq!(config.reconciliation.tolerance, 0.15);
        assert!(!config.reconciliation.strict);
        assert!(!config.reconciliation.check_on_load);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = EngineConfig::from_toml_str("[fx]\ntimeout_secs = 3\n").unwrap();
        assert_eq!(config.fx.timeout_secs, 3);
        assert_eq!(config.fx.max_rate, 200.0);
        assert_eq!(config.reconciliation, ReconciliationConfig::default());
    }

    #[test]
    fn test_plausible_band_is_exclusive() {
        let fx = FxConfig::default();
        assert!(fx.is_plausible(83.2));
        assert!(!fx.is_plausible(50.0));
        assert!(!fx.is_plausible(200.0));
        assert!(!fx.is_plausible(1.0));
        assert!(!fx.is_plausible(f64::NAN));
    }

    #[test]
    fn test_invalid_band_rejected() {
        let err = EngineConfig::from_toml_str("[fx]\nmin_rate = 100.0\nmax_rate = 90.0\n");
        assert!(matches!(err, Err(GdpError::ValidationError(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let err = EngineConfig::from_toml_str("[fx\ntimeout_secs = ");
        assert!(matches!(err, Err(GdpError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[reconciliation]\ntolerance = 0.2\nstrict = true").unwrap();
        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.reconciliation.tolerance, 0.2);
        assert!(config.reconciliation.strict);
    }

    #[test]
    fn test_load_missing_file() {
        let err = EngineConfig::load("/nonexistent/gdp-engine.toml");
        assert!(matches!(err, Err(GdpError::Io(_))));
    }

    #[test]
    fn test_check_on_load_key() {
        let config =
            EngineConfig::from_toml_str("[reconciliation]\ncheck_on_load = true\n").unwrap();
        assert!(config.reconciliation.check_on_load);
        assert!(!config.reconciliation.strict);
    }

    #[test]
    fn test_invalid_tolerance_rejected() {
        for tolerance in [-0.1, f64::NAN, f64::INFINITY] {
            let settings = ReconciliationConfig {
                tolerance,
                ..ReconciliationConfig::default()
            };
            assert!(matches!(settings.validate(), Err(GdpError::ValidationError(_))));
        }
        assert!(EngineConfig::from_toml_str("[reconciliation]\ntolerance = -1.0\n").is_err());
    }
}
