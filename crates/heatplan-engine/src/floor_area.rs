//! Floor area and temperature summary.

use heatplan_core::{EngineFailure, Snapshot};

use crate::traits::{CalculationEngine, Outcome};

/// Aggregate floor area and temperature figures for a set of buildings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FloorAreaSummary {
    pub building_count: usize,

    /// Total floor area in m².
    pub total_floor_area: f64,

    /// Mean target temperature weighted by floor area, in °C.
    pub weighted_mean_temperature: Option<f64>,

    pub min_temperature: Option<f64>,

    pub max_temperature: Option<f64>,
}

impl Outcome for FloorAreaSummary {
    fn neutral() -> Self {
        Self::default()
    }
}

/// Summarises floor area and target temperatures.
///
/// # Examples
///
/// ```
/// use heatplan_core::{BuildingRecord, Snapshot};
/// use heatplan_engine::{CalculationEngine, FloorAreaEngine};
///
/// let records = vec![
///     BuildingRecord::try_new("Office", 50.0, 21.0).unwrap(),
///     BuildingRecord::try_new("Depot", 150.0, 17.0).unwrap(),
/// ];
/// let summary = FloorAreaEngine.calculate(&Snapshot::from_records(&records)).unwrap();
///
/// assert_eq!(summary.total_floor_area, 200.0);
/// assert_eq!(summary.weighted_mean_temperature, Some(18.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloorAreaEngine;

impl FloorAreaEngine {
    pub const NAME: &'static str = "floor_area";
}

impl CalculationEngine for FloorAreaEngine {
    type Output = FloorAreaSummary;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn calculate(&self, snapshot: &Snapshot<'_>) -> Result<FloorAreaSummary, EngineFailure> {
        if snapshot.is_empty() {
            return Ok(FloorAreaSummary::neutral());
        }

        let mut total_floor_area = 0.0;
        let mut weighted_sum = 0.0;
        let mut min_temperature = f64::INFINITY;
        let mut max_temperature = f64::NEG_INFINITY;

        for record in snapshot.iter() {
            total_floor_area += record.size();
            weighted_sum += record.size() * record.temperature();
            min_temperature = min_temperature.min(record.temperature());
            max_temperature = max_temperature.max(record.temperature());
        }

        if !total_floor_area.is_finite() || !weighted_sum.is_finite() {
            return Err(EngineFailure::new(
                Self::NAME,
                "floor area aggregate overflowed",
            ));
        }

        // A permissive policy can admit zero-area buildings only.
        let weighted_mean_temperature = if total_floor_area > 0.0 {
            Some(weighted_sum / total_floor_area)
        } else {
            None
        };

        Ok(FloorAreaSummary {
            building_count: snapshot.len(),
            total_floor_area,
            weighted_mean_temperature,
            min_temperature: Some(min_temperature),
            max_temperature: Some(max_temperature),
        })
    }
}
