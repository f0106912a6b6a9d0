//! Planning session: store, draft and engine behind one value.

use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

use heatplan_config::{ConfigError, PlannerConfig};
use heatplan_core::{
    AddOutcome, BuildingInput, BuildingRecord, ConstraintStore, HeatplanError, Result,
    ValidationPolicy,
};
use heatplan_engine::{CalculationEngine, ConfiguredEngine, EngineFactory, Outcome};
use tracing::{info, warn};

/// Conventional name of the planner configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "heatplan.toml";

/// One user's planning session.
///
/// The session is created empty, grows through [`add_building`] or
/// [`submit_draft`], and is cleared through [`reset`]. Calculations run
/// against a snapshot of the store; the session keeps no record of earlier
/// results.
///
/// [`add_building`]: PlanningSession::add_building
/// [`submit_draft`]: PlanningSession::submit_draft
/// [`reset`]: PlanningSession::reset
#[derive(Debug)]
pub struct PlanningSession<E> {
    store: ConstraintStore,
    draft: BuildingInput,
    engine: E,
}

impl<E: CalculationEngine> PlanningSession<E> {
    /// Creates an empty session using the default validation policy.
    pub fn new(engine: E) -> Self {
        Self::with_policy(engine, ValidationPolicy::default())
    }

    /// Creates an empty session using the given validation policy.
    pub fn with_policy(engine: E, policy: ValidationPolicy) -> Self {
        Self {
            store: ConstraintStore::with_policy(policy),
            draft: BuildingInput::empty(),
            engine,
        }
    }

    /// The building currently being entered.
    pub fn draft(&self) -> &BuildingInput {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut BuildingInput {
        &mut self.draft
    }

    /// Adds the draft as a building.
    ///
    /// The draft keeps its values afterwards, whether or not it was
    /// accepted.
    pub fn submit_draft(&mut self) -> AddOutcome {
        self.store.add_building(&self.draft)
    }

    /// Validates the input and appends it; invalid input is ignored.
    pub fn add_building(&mut self, input: &BuildingInput) -> AddOutcome {
        self.store.add_building(input)
    }

    /// Clears every building and the draft.
    pub fn reset(&mut self) {
        self.store.reset();
        self.draft.clear();
    }

    /// Buildings in the order they were added.
    pub fn list(&self) -> &[BuildingRecord] {
        self.store.list()
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    pub fn store(&self) -> &ConstraintStore {
        &self.store
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Runs the engine over a snapshot of the current buildings.
    ///
    /// # Errors
    ///
    /// Returns [`HeatplanError::Engine`] when the engine cannot produce a
    /// result. An empty session never fails: it yields the neutral output
    /// without running the engine.
    pub fn calculate(&self) -> Result<E::Output> {
        let snapshot = self.store.snapshot();
        let engine = self.engine.name();

        info!(
            event = "calculate_start",
            engine,
            building_count = snapshot.len(),
            revision = snapshot.revision(),
        );

        let started = Instant::now();
        if snapshot.is_empty() {
            info!(
                event = "calculate_end",
                engine,
                duration_us = started.elapsed().as_micros() as u64,
            );
            return Ok(<E::Output as Outcome>::neutral());
        }

        match self.engine.calculate(&snapshot) {
            Ok(output) => {
                info!(
                    event = "calculate_end",
                    engine,
                    duration_us = started.elapsed().as_micros() as u64,
                );
                Ok(output)
            }
            Err(failure) => {
                warn!(event = "calculate_failed", engine, error = %failure);
                Err(failure.into())
            }
        }
    }
}

impl PlanningSession<ConfiguredEngine> {
    /// Creates a session with the engine and validation rules from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HeatplanError::Config`] if the engine parameters are invalid.
    pub fn from_config(config: &PlannerConfig) -> Result<Self> {
        let engine = EngineFactory::from_config(&config.engine)?;
        Ok(Self::with_policy(engine, config.validation.policy()))
    }

    /// Creates a session from a TOML configuration file.
    ///
    /// A missing file means default configuration; a file that exists but
    /// cannot be parsed or validated is an error.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = match PlannerConfig::load(path) {
            Ok(config) => config,
            Err(ConfigError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                PlannerConfig::default()
            }
            Err(err) => return Err(HeatplanError::Config(err.to_string())),
        };
        Self::from_config(&config)
    }
}
