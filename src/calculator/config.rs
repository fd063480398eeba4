// src/calculator/config.rs

//! Configuration file support.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/eoq/config.toml` unless a
//! path is given explicitly. Every field has a default.

use crate::calculator::engine::EoqCalculator;
use crate::error::{Error, Result};
use crate::model::inputs::EoqInputs;
use crate::strategy::implementations::{DemandSpanPolicy, DomainKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub inputs: InputsConfig,

    #[serde(default)]
    pub curve: CurveConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

/// Default model parameters used when the CLI does not supply them
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputsConfig {
    #[serde(default = "default_annual_demand")]
    pub annual_demand: f64,

    #[serde(default = "default_ordering_cost")]
    pub ordering_cost: f64,

    #[serde(default = "default_holding_cost")]
    pub holding_cost: f64,
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            annual_demand: default_annual_demand(),
            ordering_cost: default_ordering_cost(),
            holding_cost: default_holding_cost(),
        }
    }
}

/// Cost curve sampling
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CurveConfig {
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,

    #[serde(default)]
    pub domain: DomainKind,

    #[serde(default = "default_demand_floor")]
    pub demand_floor: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            sample_count: default_sample_count(),
            domain: DomainKind::default(),
            demand_floor: default_demand_floor(),
        }
    }
}

/// Report labels
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(default = "default_unit_label")]
    pub unit_label: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            unit_label: default_unit_label(),
        }
    }
}

// Default value functions
fn default_annual_demand() -> f64 {
    1000.0
}

fn default_ordering_cost() -> f64 {
    50_000.0
}

fn default_holding_cost() -> f64 {
    1000.0
}

fn default_sample_count() -> usize {
    EoqCalculator::DEFAULT_SAMPLE_COUNT
}

fn default_demand_floor() -> f64 {
    DemandSpanPolicy::DEFAULT_FLOOR
}

fn default_currency_symbol() -> String {
    "Rp".into()
}

fn default_unit_label() -> String {
    "unit".into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            path => {
                tracing::info!("No config file found at {:?}, using defaults", path);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path, if the platform has a config dir
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("eoq").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Checks the curve settings. Default inputs are validated when used,
    /// since CLI flags may replace them.
    pub fn validate(&self) -> Result<()> {
        if self.curve.sample_count < 2 {
            return Err(Error::Config(format!(
                "curve.sample_count must be at least 2, got {}",
                self.curve.sample_count
            )));
        }
        let floor = self.curve.demand_floor;
        if !(floor.is_finite() && floor > 0.0) {
            return Err(Error::Config(format!(
                "curve.demand_floor must be a positive number, got {}",
                floor
            )));
        }
        Ok(())
    }

    /// Merges explicit overrides over the configured default inputs.
    pub fn resolve_inputs(
        &self,
        annual_demand: Option<f64>,
        ordering_cost: Option<f64>,
        holding_cost: Option<f64>,
    ) -> Result<EoqInputs> {
        let inputs = EoqInputs::new(
            annual_demand.unwrap_or(self.inputs.annual_demand),
            ordering_cost.unwrap_or(self.inputs.ordering_cost),
            holding_cost.unwrap_or(self.inputs.holding_cost),
        )?;
        Ok(inputs)
    }

    /// Builds a calculator from the curve settings, with optional overrides.
    pub fn calculator(
        &self,
        sample_count: Option<usize>,
        domain: Option<DomainKind>,
    ) -> EoqCalculator {
        let kind = domain.unwrap_or(self.curve.domain);
        EoqCalculator::new(
            sample_count.unwrap_or(self.curve.sample_count),
            kind.build(self.curve.demand_floor),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.inputs.annual_demand, 1000.0);
        assert_eq!(config.inputs.ordering_cost, 50_000.0);
        assert_eq!(config.inputs.holding_cost, 1000.0);
        assert_eq!(config.curve.sample_count, 200);
        assert_eq!(config.curve.domain, DomainKind::DemandSpan);
        assert_eq!(config.report.currency_symbol, "Rp");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.curve.sample_count, parsed.curve.sample_count);
        assert_eq!(config.curve.domain, parsed.curve.domain);
        assert_eq!(config.report.unit_label, parsed.report.unit_label);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[inputs]
annual_demand = 12000.0

[curve]
domain = "eoq-bracket"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.inputs.annual_demand, 12_000.0);
        assert_eq!(config.inputs.holding_cost, 1000.0); // default
        assert_eq!(config.curve.domain, DomainKind::EoqBracket);
        assert_eq!(config.curve.sample_count, 200); // default
    }

    #[test]
    fn test_validate_rejects_single_sample() {
        let mut config = Config::default();
        config.curve.sample_count = 1;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_floor() {
        let mut config = Config::default();
        config.curve.demand_floor = 0.0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_resolve_inputs_prefers_overrides() {
        let config = Config::default();
        let inputs = config.resolve_inputs(Some(12_000.0), None, Some(2000.0)).unwrap();
        assert_eq!(inputs.annual_demand, 12_000.0);
        assert_eq!(inputs.ordering_cost, 50_000.0);
        assert_eq!(inputs.holding_cost, 2000.0);
    }

    #[test]
    fn test_resolve_inputs_rejects_zero() {
        let config = Config::default();
        let err = config.resolve_inputs(None, None, Some(0.0)).unwrap_err();
        assert!(err.invalid_input().is_some());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.report.currency_symbol = "$".into();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.report.currency_symbol, "$");
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[curve]\nsample_count = 0\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }
}
