//! Shared test fixtures for heatplan crates.
//!
//! This crate provides sample data and helpers for testing.
//! It depends on `heatplan-core` only, so every other crate can use it
//! as a dev-dependency without cycles.
//!
//! - [`records`] - Sample building records
//! - [`inputs`] - Complete and deliberately broken building inputs
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! heatplan-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use heatplan_test::records::{office, sample_records};
//! use heatplan_test::inputs::{input_missing, Field};
//! ```

pub mod inputs;
pub mod records;

pub use inputs::{complete_input, input_missing, input_unparseable, Field};
pub use records::{depot, office, populated_store, record, sample_records};
