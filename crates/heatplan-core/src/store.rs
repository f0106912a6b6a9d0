//! The constraint store: an ordered, validated collection of buildings.

use tracing::debug;

use crate::building::{BuildingInput, BuildingRecord};
use crate::snapshot::Snapshot;
use crate::validation::{Rejection, ValidationPolicy};

/// The ordered collection of all building records in a session.
///
/// Insertion order is preserved. The revision counts content changes and
/// never goes backwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintSet {
    records: Vec<BuildingRecord>,
    revision: u64,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[BuildingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.records, self.revision)
    }

    fn push(&mut self, record: BuildingRecord) -> usize {
        self.records.push(record);
        self.revision += 1;
        self.records.len()
    }

    fn clear(&mut self) {
        if !self.records.is_empty() {
            self.records.clear();
            self.revision += 1;
        }
    }
}

/// Outcome of an attempt to add a building.
///
/// A rejection is not an error: the store is left untouched and the
/// reason is only kept for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// The record was appended; `count` is the new number of records.
    Added { count: usize },

    /// The input failed validation and nothing changed.
    Rejected(Rejection),
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added { .. })
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            AddOutcome::Rejected(reason) => Some(reason),
            AddOutcome::Added { .. } => None,
        }
    }
}

/// Owns the constraint set and is the only way to mutate it.
///
/// # Examples
///
/// ```
/// use heatplan_core::{BuildingInput, ConstraintStore};
///
/// let mut store = ConstraintStore::new();
/// store.add_building(&BuildingInput::new("Office", 50.0, 21.0));
///
/// // Size omitted: silently ignored
/// store.add_building(&BuildingInput::empty().with_name("Depot").with_temperature("15"));
///
/// assert_eq!(store.count(), 1);
/// store.reset();
/// assert!(store.list().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConstraintStore {
    set: ConstraintSet,
    policy: ValidationPolicy,
}

impl ConstraintStore {
    /// Creates an empty store using the default validation policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store using the given validation policy.
    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self {
            set: ConstraintSet::new(),
            policy,
        }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Validates the input and appends the resulting record.
    ///
    /// Duplicate names are accepted. Rejected input leaves the store
    /// unchanged.
    pub fn add_building(&mut self, input: &BuildingInput) -> AddOutcome {
        match self.policy.validate(input) {
            Ok(record) => self.append(record),
            Err(reason) => self.reject(reason),
        }
    }

    /// Appends an already typed record after checking it against the policy.
    pub fn add_record(&mut self, record: BuildingRecord) -> AddOutcome {
        match self.policy.check(&record) {
            Ok(()) => self.append(record),
            Err(reason) => self.reject(reason),
        }
    }

    /// Removes every record. Calling it on an empty store is a no-op.
    pub fn reset(&mut self) -> &ConstraintSet {
        let cleared = self.set.len();
        self.set.clear();
        debug!(event = "store_reset", cleared, revision = self.set.revision());
        &self.set
    }

    /// Records in insertion order.
    pub fn list(&self) -> &[BuildingRecord] {
        self.set.records()
    }

    pub fn count(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.set.revision()
    }

    /// Takes an immutable view for a calculation.
    pub fn snapshot(&self) -> Snapshot<'_> {
        self.set.snapshot()
    }

    fn append(&mut self, record: BuildingRecord) -> AddOutcome {
        let name = record.name().to_string();
        let count = self.set.push(record);
        debug!(
            event = "building_added",
            name = %name,
            count,
            revision = self.set.revision(),
        );
        AddOutcome::Added { count }
    }

    fn reject(&self, reason: Rejection) -> AddOutcome {
        debug!(
            event = "building_rejected",
            reason = %reason,
            count = self.set.len(),
        );
        AddOutcome::Rejected(reason)
    }
}
