//! Sample building records.
//!
//! # Example
//!
//! ```
//! use heatplan_test::records::{populated_store, sample_records};
//!
//! let store = populated_store(&sample_records());
//! assert_eq!(store.count(), 3);
//! ```

use heatplan_core::{BuildingRecord, ConstraintStore};

/// Creates a record, panicking if the values do not validate.
pub fn record(name: &str, size: f64, temperature: f64) -> BuildingRecord {
    BuildingRecord::try_new(name, size, temperature)
        .unwrap_or_else(|reason| panic!("invalid fixture {name}: {reason}"))
}

/// 50 m² office heated to 21 °C.
pub fn office() -> BuildingRecord {
    record("Office", 50.0, 21.0)
}

/// 200 m² depot heated to 15 °C.
pub fn depot() -> BuildingRecord {
    record("Depot", 200.0, 15.0)
}

/// Office, depot and a 150 m² school at 20 °C, in that order.
pub fn sample_records() -> Vec<BuildingRecord> {
    vec![office(), depot(), record("School", 150.0, 20.0)]
}

/// Creates a default-policy store holding the given records in order.
pub fn populated_store(records: &[BuildingRecord]) -> ConstraintStore {
    let mut store = ConstraintStore::new();
    for record in records {
        let outcome = store.add_record(record.clone());
        assert!(outcome.is_added(), "fixture rejected: {outcome:?}");
    }
    store
}
