//! Engines selected at runtime from configuration.

use heatplan_config::{EngineConfig, HeatLoadConfig};
use heatplan_core::{EngineFailure, HeatplanError, Snapshot};

use crate::floor_area::{FloorAreaEngine, FloorAreaSummary};
use crate::heat_load::{HeatLoadEngine, HeatLoadParams, HeatLoadReport};
use crate::traits::{CalculationEngine, Outcome};

/// Result of a [`ConfiguredEngine`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "engine", rename_all = "snake_case"))]
pub enum Assessment {
    FloorArea(FloorAreaSummary),
    HeatLoad(HeatLoadReport),
}

impl Assessment {
    pub fn as_floor_area(&self) -> Option<&FloorAreaSummary> {
        match self {
            Assessment::FloorArea(summary) => Some(summary),
            Assessment::HeatLoad(_) => None,
        }
    }

    pub fn as_heat_load(&self) -> Option<&HeatLoadReport> {
        match self {
            Assessment::HeatLoad(report) => Some(report),
            Assessment::FloorArea(_) => None,
        }
    }
}

impl Outcome for Assessment {
    fn neutral() -> Self {
        Assessment::FloorArea(FloorAreaSummary::neutral())
    }
}

/// One of the built-in engines, chosen by configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfiguredEngine {
    FloorArea(FloorAreaEngine),
    HeatLoad(HeatLoadEngine),
}

impl CalculationEngine for ConfiguredEngine {
    type Output = Assessment;

    fn name(&self) -> &str {
        match self {
            ConfiguredEngine::FloorArea(engine) => engine.name(),
            ConfiguredEngine::HeatLoad(engine) => engine.name(),
        }
    }

    fn calculate(&self, snapshot: &Snapshot<'_>) -> Result<Assessment, EngineFailure> {
        if snapshot.is_empty() {
            return Ok(Assessment::neutral());
        }
        match self {
            ConfiguredEngine::FloorArea(engine) => {
                engine.calculate(snapshot).map(Assessment::FloorArea)
            }
            ConfiguredEngine::HeatLoad(engine) => {
                engine.calculate(snapshot).map(Assessment::HeatLoad)
            }
        }
    }
}

/// Builds engines from [`EngineConfig`].
pub struct EngineFactory;

impl EngineFactory {
    /// Creates the configured engine, checking its parameters up front.
    ///
    /// # Errors
    ///
    /// Returns [`HeatplanError::Config`] if the parameters could never
    /// produce a result.
    pub fn from_config(config: &EngineConfig) -> Result<ConfiguredEngine, HeatplanError> {
        match config {
            EngineConfig::FloorArea => Ok(ConfiguredEngine::FloorArea(FloorAreaEngine)),
            EngineConfig::HeatLoad(heat_load) => {
                let params = heat_load_params(heat_load);
                params.validate().map_err(HeatplanError::Config)?;
                Ok(ConfiguredEngine::HeatLoad(HeatLoadEngine::new(params)))
            }
        }
    }
}

fn heat_load_params(config: &HeatLoadConfig) -> HeatLoadParams {
    let defaults = HeatLoadParams::default();
    HeatLoadParams {
        specific_load_w_per_m2: config
            .specific_load_w_per_m2
            .unwrap_or(defaults.specific_load_w_per_m2),
        design_outdoor_temperature: config
            .design_outdoor_temperature
            .unwrap_or(defaults.design_outdoor_temperature),
        reference_indoor_temperature: config
            .reference_indoor_temperature
            .unwrap_or(defaults.reference_indoor_temperature),
        full_load_hours: config.full_load_hours.unwrap_or(defaults.full_load_hours),
    }
}
