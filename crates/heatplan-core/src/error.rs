//! Error types for heatplan

use thiserror::Error;

/// Main error type for heatplan operations.
///
/// Rejected building input is deliberately absent here: the store treats it
/// as a no-op and reports it through [`crate::AddOutcome`] instead.
#[derive(Debug, Error)]
pub enum HeatplanError {
    /// Error in planner configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A calculation engine could not produce a result
    #[error(transparent)]
    Engine(#[from] EngineFailure),
}

/// A calculation that could not be performed.
///
/// Engines return this instead of a misleading default whenever one of
/// their preconditions does not hold.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Engine '{engine}' failed: {reason}")]
pub struct EngineFailure {
    engine: String,
    reason: String,
}

impl EngineFailure {
    /// Creates a failure attributed to the named engine.
    pub fn new(engine: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            engine: engine.into(),
            reason: reason.into(),
        }
    }

    pub fn engine(&self) -> &str {
        &self.engine
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Result type alias for heatplan operations
pub type Result<T> = std::result::Result<T, HeatplanError>;
