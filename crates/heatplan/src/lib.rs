//! heatplan - Collect building constraints and run heat calculations
//!
//! A [`PlanningSession`] owns the list of buildings entered by a user, the
//! draft of the building currently being typed, and a pluggable
//! calculation engine.
//!
//! # Example
//!
//! ```rust
//! use heatplan::prelude::*;
//!
//! let mut session = PlanningSession::new(FloorAreaEngine);
//! session.add_building(&BuildingInput::new("Office", 50.0, 21.0));
//! session.add_building(&BuildingInput::empty().with_name("Depot")); // ignored
//!
//! assert_eq!(session.count(), 1);
//! let summary = session.calculate().unwrap();
//! assert_eq!(summary.total_floor_area, 50.0);
//! ```

// Core model
pub use heatplan_core::{
    AddOutcome, BuildingInput, BuildingRecord, ConstraintSet, ConstraintStore, EngineFailure,
    HeatplanError, Rejection, Result, Snapshot, ValidationPolicy,
};

// Engines
pub use heatplan_engine::{
    Assessment, BuildingLoad, CalculationEngine, ConfiguredEngine, EngineFactory,
    FloorAreaEngine, FloorAreaSummary, FnEngine, HeatLoadEngine, HeatLoadParams, HeatLoadReport,
    Outcome,
};

// Configuration
pub use heatplan_config::{
    ConfigError, EngineConfig, HeatLoadConfig, PlannerConfig, ValidationConfig,
};

mod session;
pub use session::{PlanningSession, DEFAULT_CONFIG_FILE};

/// Console output, enabled with the `console` feature.
#[cfg(feature = "console")]
pub use heatplan_console as console;

pub mod prelude {
    pub use super::{
        AddOutcome, BuildingInput, BuildingRecord, CalculationEngine, FloorAreaEngine, FnEngine,
        HeatLoadEngine, Outcome, PlanningSession, Snapshot, ValidationPolicy,
    };
}
