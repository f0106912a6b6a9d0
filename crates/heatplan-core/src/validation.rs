//! Validation policy turning raw input into building records.

use thiserror::Error;

use crate::building::{BuildingInput, BuildingRecord};

/// Why a building input was not accepted.
///
/// Only the first failing field is reported; fields are checked in the
/// order name, size, temperature.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("name is missing")]
    MissingName,

    #[error("name is empty")]
    EmptyName,

    #[error("size is missing")]
    MissingSize,

    #[error("temperature is missing")]
    MissingTemperature,

    #[error("size '{0}' is not a number")]
    UnparseableSize(String),

    #[error("temperature '{0}' is not a number")]
    UnparseableTemperature(String),

    #[error("size is not finite")]
    NonFiniteSize,

    #[error("temperature is not finite")]
    NonFiniteTemperature,

    #[error("size {0} is not positive")]
    NonPositiveSize(f64),
}

/// Rules deciding which inputs become [`BuildingRecord`]s.
///
/// The default accepts an empty name as present and requires a strictly
/// positive floor area.
///
/// # Examples
///
/// ```
/// use heatplan_core::{BuildingInput, Rejection, ValidationPolicy};
///
/// let policy = ValidationPolicy::default();
/// let unnamed = BuildingInput::new("", 80.0, 19.5);
/// assert!(policy.validate(&unnamed).is_ok());
///
/// let strict = ValidationPolicy::default().with_allow_empty_name(false);
/// assert_eq!(strict.validate(&unnamed), Err(Rejection::EmptyName));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Accept `""` as a name.
    pub allow_empty_name: bool,

    /// Reject floor areas that are zero or negative.
    pub require_positive_size: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            allow_empty_name: true,
            require_positive_size: true,
        }
    }
}

impl ValidationPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allow_empty_name(mut self, allow: bool) -> Self {
        self.allow_empty_name = allow;
        self
    }

    pub fn with_require_positive_size(mut self, require: bool) -> Self {
        self.require_positive_size = require;
        self
    }

    /// Validates a raw input, producing a record or the first rejection.
    pub fn validate(&self, input: &BuildingInput) -> Result<BuildingRecord, Rejection> {
        let name = input.name().ok_or(Rejection::MissingName)?;
        if !self.allow_empty_name && name.trim().is_empty() {
            return Err(Rejection::EmptyName);
        }

        let size_text = input.size().ok_or(Rejection::MissingSize)?;
        let size = parse_number(size_text)
            .ok_or_else(|| Rejection::UnparseableSize(size_text.to_string()))?;
        if !size.is_finite() {
            return Err(Rejection::NonFiniteSize);
        }
        if self.require_positive_size && size <= 0.0 {
            return Err(Rejection::NonPositiveSize(size));
        }

        let temperature_text = input.temperature().ok_or(Rejection::MissingTemperature)?;
        let temperature = parse_number(temperature_text)
            .ok_or_else(|| Rejection::UnparseableTemperature(temperature_text.to_string()))?;
        if !temperature.is_finite() {
            return Err(Rejection::NonFiniteTemperature);
        }

        Ok(BuildingRecord::from_validated(
            name.to_string(),
            size,
            temperature,
        ))
    }

    /// Checks an existing record against this policy.
    pub fn check(&self, record: &BuildingRecord) -> Result<(), Rejection> {
        if !self.allow_empty_name && record.name().trim().is_empty() {
            return Err(Rejection::EmptyName);
        }
        if !record.size().is_finite() {
            return Err(Rejection::NonFiniteSize);
        }
        if self.require_positive_size && record.size() <= 0.0 {
            return Err(Rejection::NonPositiveSize(record.size()));
        }
        if !record.temperature().is_finite() {
            return Err(Rejection::NonFiniteTemperature);
        }
        Ok(())
    }
}

// Rust's float parser accepts "inf" and "NaN"; those are caught by the
// finiteness checks above rather than here.
fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
