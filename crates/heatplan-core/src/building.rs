//! Building records and the raw input they are validated from.

use std::fmt;

use crate::validation::{Rejection, ValidationPolicy};

/// One building: its name, floor area and target temperature.
///
/// Records can only be obtained through a [`ValidationPolicy`], so every
/// record held by a store carries a finite floor area and temperature.
///
/// # Examples
///
/// ```
/// use heatplan_core::BuildingRecord;
///
/// let office = BuildingRecord::try_new("Office", 50.0, 21.0).unwrap();
/// assert_eq!(office.name(), "Office");
/// assert_eq!(office.size(), 50.0);
/// assert_eq!(office.temperature(), 21.0);
///
/// assert!(BuildingRecord::try_new("Shed", -4.0, 10.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BuildingRecord {
    name: String,
    size: f64,
    temperature: f64,
}

impl BuildingRecord {
    /// Validates typed values against the default policy.
    pub fn try_new(
        name: impl Into<String>,
        size: f64,
        temperature: f64,
    ) -> Result<Self, Rejection> {
        ValidationPolicy::default().validate(&BuildingInput::new(name, size, temperature))
    }

    // Only the validation policy calls this.
    pub(crate) fn from_validated(name: String, size: f64, temperature: f64) -> Self {
        Self {
            name,
            size,
            temperature,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Floor area in m².
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Target temperature in °C.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }
}

impl fmt::Display for BuildingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} m², {} °C)",
            self.name, self.size, self.temperature
        )
    }
}

/// The three raw fields of an add-building form.
///
/// Each field is `None` until the user has entered something. Numeric
/// fields are kept as text and only parsed during validation, so a draft
/// can hold input that will later be rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildingInput {
    name: Option<String>,
    size: Option<String>,
    temperature: Option<String>,
}

impl BuildingInput {
    /// Creates a fully populated input from typed values.
    pub fn new(name: impl Into<String>, size: f64, temperature: f64) -> Self {
        Self {
            name: Some(name.into()),
            size: Some(size.to_string()),
            temperature: Some(temperature.to_string()),
        }
    }

    /// Creates an input with every field absent.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_temperature(mut self, temperature: impl Into<String>) -> Self {
        self.temperature = Some(temperature.into());
        self
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn set_size(&mut self, size: Option<String>) {
        self.size = size;
    }

    pub fn set_temperature(&mut self, temperature: Option<String>) {
        self.temperature = temperature;
    }

    /// Clears every field back to absent.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    pub fn temperature(&self) -> Option<&str> {
        self.temperature.as_deref()
    }

    /// Returns true when all three fields hold a value.
    ///
    /// Presence says nothing about whether the values parse.
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.size.is_some() && self.temperature.is_some()
    }
}

#[cfg(test)]
mod tests;
