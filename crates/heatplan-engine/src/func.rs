//! Closure-backed engine.

use std::fmt;
use std::marker::PhantomData;

use heatplan_core::{EngineFailure, Snapshot};

use crate::traits::{CalculationEngine, Outcome};

/// An engine whose formula is an arbitrary closure.
///
/// The closure is stored as a concrete generic type parameter, not as
/// `Box<dyn Fn>`. Empty snapshots never reach the closure; they
/// short-circuit to the neutral outcome.
///
/// # Examples
///
/// ```
/// use heatplan_core::{BuildingRecord, Snapshot};
/// use heatplan_engine::{CalculationEngine, FnEngine};
///
/// let largest = FnEngine::new("largest", |snapshot: &Snapshot<'_>| {
///     Ok(snapshot.iter().map(|r| r.size()).fold(0.0_f64, f64::max))
/// });
///
/// let records = vec![
///     BuildingRecord::try_new("A", 40.0, 20.0).unwrap(),
///     BuildingRecord::try_new("B", 90.0, 20.0).unwrap(),
/// ];
/// assert_eq!(largest.calculate(&Snapshot::from_records(&records)), Ok(90.0));
/// assert_eq!(largest.calculate(&Snapshot::from_records(&[])), Ok(0.0));
/// ```
pub struct FnEngine<F, O> {
    name: String,
    formula: F,
    _phantom: PhantomData<fn() -> O>,
}

impl<F, O> FnEngine<F, O>
where
    F: Fn(&Snapshot<'_>) -> Result<O, EngineFailure> + Send + Sync,
    O: Outcome,
{
    pub fn new(name: impl Into<String>, formula: F) -> Self {
        Self {
            name: name.into(),
            formula,
            _phantom: PhantomData,
        }
    }
}

impl<F, O> CalculationEngine for FnEngine<F, O>
where
    F: Fn(&Snapshot<'_>) -> Result<O, EngineFailure> + Send + Sync,
    O: Outcome,
{
    type Output = O;

    fn name(&self) -> &str {
        &self.name
    }

    fn calculate(&self, snapshot: &Snapshot<'_>) -> Result<O, EngineFailure> {
        if snapshot.is_empty() {
            return Ok(O::neutral());
        }
        (self.formula)(snapshot)
    }
}

impl<F: Clone, O> Clone for FnEngine<F, O> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            formula: self.formula.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<F, O> fmt::Debug for FnEngine<F, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnEngine").field("name", &self.name).finish()
    }
}

impl Outcome for f64 {
    fn neutral() -> Self {
        0.0
    }
}

impl<T: Clone + fmt::Debug + PartialEq + Send + Sync + 'static> Outcome for Vec<T> {
    fn neutral() -> Self {
        Vec::new()
    }
}
