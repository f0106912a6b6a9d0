//! Immutable views of a constraint set.

use std::slice;

use crate::building::BuildingRecord;

/// A read-only view of the records at the moment a calculation starts.
///
/// A snapshot borrows the store it was taken from, so the store cannot be
/// mutated while a calculation holds one. The revision identifies which
/// state of the store the snapshot reflects.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    records: &'a [BuildingRecord],
    revision: u64,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(records: &'a [BuildingRecord], revision: u64) -> Self {
        Self { records, revision }
    }

    /// Creates a snapshot that is not tied to any store.
    ///
    /// Detached snapshots always report revision 0.
    pub fn from_records(records: &'a [BuildingRecord]) -> Self {
        Self::new(records, 0)
    }

    pub fn records(&self) -> &'a [BuildingRecord] {
        self.records
    }

    pub fn iter(&self) -> slice::Iter<'a, BuildingRecord> {
        self.records.iter()
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

    /// Sum of all floor areas in m².
    pub fn total_floor_area(&self) -> f64 {
        self.records.iter().map(BuildingRecord::size).sum()
    }
}

impl<'a> IntoIterator for Snapshot<'a> {
    type Item = &'a BuildingRecord;
    type IntoIter = slice::Iter<'a, BuildingRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
