// Calculation engine trait definitions.

use std::fmt::Debug;

use heatplan_core::{EngineFailure, Snapshot};

/// A result an engine can produce.
///
/// Every outcome type defines a neutral value, returned for an empty
/// constraint set.
pub trait Outcome: Clone + Debug + PartialEq + Send + Sync + 'static {
    /// Returns the result of calculating over zero buildings.
    fn neutral() -> Self;
}

/// Computes an aggregate result from a snapshot of building records.
///
/// Implementations must be pure functions of the snapshot: they hold no
/// memory of earlier calls and return equal results for equal snapshots.
/// They must not fail on an empty snapshot. Any other precondition that
/// does not hold is reported as an [`EngineFailure`] instead of a
/// defaulted result.
pub trait CalculationEngine: Send + Sync {
    /// The result type produced by this engine.
    type Output: Outcome;

    /// Short identifier used in logs and failures.
    fn name(&self) -> &str;

    /// Calculates the aggregate result for the snapshot.
    fn calculate(&self, snapshot: &Snapshot<'_>) -> Result<Self::Output, EngineFailure>;
}

impl<E: CalculationEngine + ?Sized> CalculationEngine for &E {
    type Output = E::Output;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn calculate(&self, snapshot: &Snapshot<'_>) -> Result<Self::Output, EngineFailure> {
        (**self).calculate(snapshot)
    }
}

impl<E: CalculationEngine + ?Sized> CalculationEngine for Box<E> {
    type Output = E::Output;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn calculate(&self, snapshot: &Snapshot<'_>) -> Result<Self::Output, EngineFailure> {
        (**self).calculate(snapshot)
    }
}
