//! heatplan Core - Building records and the constraint store
//!
//! This crate provides the data model every other heatplan crate builds on:
//! - Building records and the raw input drafts they are validated from
//! - The validation policy deciding which drafts become records
//! - The constraint store owning the ordered record collection
//! - Read-only snapshots handed to calculation engines

pub mod building;
pub mod error;
pub mod snapshot;
pub mod store;
pub mod validation;

pub use building::{BuildingInput, BuildingRecord};
pub use error::{EngineFailure, HeatplanError, Result};
pub use snapshot::Snapshot;
pub use store::{AddOutcome, ConstraintSet, ConstraintStore};
pub use validation::{Rejection, ValidationPolicy};
