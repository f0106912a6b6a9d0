//! Configuration system for heatplan.
//!
//! Load planner configuration from TOML or YAML files to choose the
//! calculation engine and tune input validation without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use heatplan_config::{EngineConfig, PlannerConfig};
//!
//! let config = PlannerConfig::from_toml_str(r#"
//!     [validation]
//!     allow_empty_name = false
//!
//!     [engine]
//!     type = "heat_load"
//!     specific_load_w_per_m2 = 60.0
//!     design_outdoor_temperature = -14.0
//! "#).unwrap();
//!
//! assert!(!config.validation.allow_empty_name);
//! assert!(matches!(config.engine, EngineConfig::HeatLoad(_)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use heatplan_config::PlannerConfig;
//!
//! let config = PlannerConfig::load("heatplan.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use heatplan_core::ValidationPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main planner configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PlannerConfig {
    /// Rules applied to building input before it enters the store.
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Calculation engine selection and parameters.
    #[serde(default)]
    pub engine: EngineConfig,
}

impl PlannerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// holds parameters that fail [`PlannerConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the validation rules.
    pub fn with_validation(mut self, validation: ValidationConfig) -> Self {
        self.validation = validation;
        self
    }

    /// Sets the calculation engine.
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    /// Checks numeric parameters for values no engine can work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.engine {
            EngineConfig::FloorArea => Ok(()),
            EngineConfig::HeatLoad(heat_load) => heat_load.validate(),
        }
    }
}

/// Input validation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ValidationConfig {
    /// Accept buildings whose name is the empty string.
    #[serde(default = "default_true")]
    pub allow_empty_name: bool,

    /// Reject buildings whose floor area is zero or negative.
    #[serde(default = "default_true")]
    pub require_positive_size: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            allow_empty_name: true,
            require_positive_size: true,
        }
    }
}

impl ValidationConfig {
    /// Returns the validation policy described by this configuration.
    pub fn policy(&self) -> ValidationPolicy {
        ValidationPolicy::new()
            .with_allow_empty_name(self.allow_empty_name)
            .with_require_positive_size(self.require_positive_size)
    }
}

fn default_true() -> bool {
    true
}

/// Calculation engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineConfig {
    /// Floor area and temperature summary.
    #[default]
    FloorArea,

    /// Heating load and annual heat demand estimate.
    HeatLoad(HeatLoadConfig),
}

/// Heat load engine parameters.
///
/// Unset parameters fall back to the engine's defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HeatLoadConfig {
    /// Standard heating load per m² at design conditions, in W/m².
    pub specific_load_w_per_m2: Option<f64>,

    /// Outdoor design temperature in °C.
    pub design_outdoor_temperature: Option<f64>,

    /// Indoor temperature the specific load was rated for, in °C.
    pub reference_indoor_temperature: Option<f64>,

    /// Equivalent full-load heating hours per year.
    pub full_load_hours: Option<f64>,
}

impl HeatLoadConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("specific_load_w_per_m2", self.specific_load_w_per_m2),
            ("full_load_hours", self.full_load_hours),
        ];
        for (key, value) in non_negative {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(ConfigError::Invalid(format!(
                        "{key} must be a finite non-negative number, got {value}"
                    )));
                }
            }
        }

        let temperatures = [
            ("design_outdoor_temperature", self.design_outdoor_temperature),
            (
                "reference_indoor_temperature",
                self.reference_indoor_temperature,
            ),
        ];
        for (key, value) in temperatures {
            if let Some(value) = value {
                if !value.is_finite() {
                    return Err(ConfigError::Invalid(format!(
                        "{key} must be finite, got {value}"
                    )));
                }
            }
        }

        if let (Some(outdoor), Some(indoor)) = (
            self.design_outdoor_temperature,
            self.reference_indoor_temperature,
        ) {
            if indoor <= outdoor {
                return Err(ConfigError::Invalid(format!(
                    "reference_indoor_temperature ({indoor}) must be above design_outdoor_temperature ({outdoor})"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
