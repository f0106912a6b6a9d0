//! Pluggable calculation engines for heatplan.
//!
//! An engine reads an immutable [`Snapshot`] of the constraint store and
//! produces an aggregate result. The crate provides:
//! - The [`CalculationEngine`] and [`Outcome`] traits every engine implements
//! - [`FloorAreaEngine`] - floor area and temperature summary
//! - [`HeatLoadEngine`] - heating load and annual heat demand estimate
//! - [`FnEngine`] - any deterministic closure as an engine
//! - [`ConfiguredEngine`] - an engine chosen at runtime from configuration
//!
//! # Contract
//!
//! Engines are stateless between calls and deterministic: the same
//! snapshot always yields an equal result. An empty snapshot always
//! yields [`Outcome::neutral`], never a failure.
//!
//! [`Snapshot`]: heatplan_core::Snapshot

pub mod configured;
pub mod floor_area;
pub mod func;
pub mod heat_load;
mod traits;


pub use configured::{Assessment, ConfiguredEngine, EngineFactory};
pub use floor_area::{FloorAreaEngine, FloorAreaSummary};
pub use func::FnEngine;
pub use heat_load::{BuildingLoad, HeatLoadEngine, HeatLoadParams, HeatLoadReport};
pub use traits::{CalculationEngine, Outcome};
