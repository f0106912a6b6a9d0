//! Heating load and annual heat demand estimate.
//!
//! Each building's peak load is its floor area times a standard specific
//! heating load, scaled by how far its target temperature sits above the
//! outdoor design temperature relative to the rating conditions:
//!
//! ```text
//! scale        = max(0, (target - outdoor) / (reference - outdoor))
//! peak_load_kw = size * specific_load_w_per_m2 * scale / 1000
//! annual_kwh   = peak_load_kw * full_load_hours
//! ```

use heatplan_core::{EngineFailure, Snapshot};

use crate::traits::{CalculationEngine, Outcome};

/// Parameters of the heat load model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HeatLoadParams {
    /// Standard heating load per m² at design conditions, in W/m².
    pub specific_load_w_per_m2: f64,

    /// Outdoor design temperature in °C.
    pub design_outdoor_temperature: f64,

    /// Indoor temperature the specific load was rated for, in °C.
    pub reference_indoor_temperature: f64,

    /// Equivalent full-load heating hours per year.
    pub full_load_hours: f64,
}

impl Default for HeatLoadParams {
    fn default() -> Self {
        Self {
            specific_load_w_per_m2: 50.0,
            design_outdoor_temperature: -12.0,
            reference_indoor_temperature: 20.0,
            full_load_hours: 2000.0,
        }
    }
}

impl HeatLoadParams {
    /// Checks the preconditions the model divides and multiplies by.
    pub fn validate(&self) -> Result<(), String> {
        if !self.specific_load_w_per_m2.is_finite() || self.specific_load_w_per_m2 < 0.0 {
            return Err(format!(
                "specific load must be finite and non-negative, got {}",
                self.specific_load_w_per_m2
            ));
        }
        if !self.full_load_hours.is_finite() || self.full_load_hours < 0.0 {
            return Err(format!(
                "full load hours must be finite and non-negative, got {}",
                self.full_load_hours
            ));
        }
        if !self.design_outdoor_temperature.is_finite()
            || !self.reference_indoor_temperature.is_finite()
        {
            return Err("design temperatures must be finite".to_string());
        }
        if self.reference_indoor_temperature <= self.design_outdoor_temperature {
            return Err(format!(
                "reference indoor temperature ({}) must be above design outdoor temperature ({})",
                self.reference_indoor_temperature, self.design_outdoor_temperature
            ));
        }
        Ok(())
    }

    fn design_delta(&self) -> f64 {
        self.reference_indoor_temperature - self.design_outdoor_temperature
    }
}

/// Heat load of a single building.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BuildingLoad {
    pub name: String,
    pub peak_load_kw: f64,
    pub annual_demand_kwh: f64,
}

/// Heat loads for every building plus totals.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HeatLoadReport {
    /// Per-building loads in snapshot order.
    pub buildings: Vec<BuildingLoad>,
    pub total_peak_load_kw: f64,
    pub total_annual_demand_kwh: f64,
}

impl Outcome for HeatLoadReport {
    fn neutral() -> Self {
        Self::default()
    }
}

/// Estimates heating load and yearly heat demand per building.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeatLoadEngine {
    params: HeatLoadParams,
}

impl HeatLoadEngine {
    pub const NAME: &'static str = "heat_load";

    pub fn new(params: HeatLoadParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &HeatLoadParams {
        &self.params
    }

    fn load_for(&self, size: f64, temperature: f64) -> f64 {
        let p = &self.params;
        let scale = ((temperature - p.design_outdoor_temperature) / p.design_delta()).max(0.0);
        size * p.specific_load_w_per_m2 * scale / 1000.0
    }
}

impl CalculationEngine for HeatLoadEngine {
    type Output = HeatLoadReport;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn calculate(&self, snapshot: &Snapshot<'_>) -> Result<HeatLoadReport, EngineFailure> {
        if snapshot.is_empty() {
            return Ok(HeatLoadReport::neutral());
        }
        self.params
            .validate()
            .map_err(|reason| EngineFailure::new(Self::NAME, reason))?;

        let mut report = HeatLoadReport {
            buildings: Vec::with_capacity(snapshot.len()),
            ..HeatLoadReport::default()
        };

        for record in snapshot.iter() {
            let peak_load_kw = self.load_for(record.size(), record.temperature());
            let annual_demand_kwh = peak_load_kw * self.params.full_load_hours;
            report.total_peak_load_kw += peak_load_kw;
            report.total_annual_demand_kwh += annual_demand_kwh;
            report.buildings.push(BuildingLoad {
                name: record.name().to_string(),
                peak_load_kw,
                annual_demand_kwh,
            });
        }

        if !report.total_peak_load_kw.is_finite() || !report.total_annual_demand_kwh.is_finite() {
            return Err(EngineFailure::new(Self::NAME, "heat load aggregate overflowed"));
        }

        Ok(report)
    }
}
