//! Building input fixtures.
//!
//! # Example
//!
//! ```
//! use heatplan_test::inputs::{complete_input, input_missing, Field};
//!
//! assert!(complete_input().is_complete());
//! assert!(!input_missing(Field::Size).is_complete());
//! ```

use heatplan_core::BuildingInput;

/// A field of the add-building form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Size,
    Temperature,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Size, Field::Temperature];
}

/// The office from the walkthrough: `("Office", 50, 21)`.
pub fn complete_input() -> BuildingInput {
    BuildingInput::empty()
        .with_name("Office")
        .with_size("50")
        .with_temperature("21")
}

/// [`complete_input`] with one field absent.
pub fn input_missing(field: Field) -> BuildingInput {
    let mut input = complete_input();
    match field {
        Field::Name => input.set_name(None),
        Field::Size => input.set_size(None),
        Field::Temperature => input.set_temperature(None),
    }
    input
}

/// [`complete_input`] with one field holding text that is not a number.
///
/// Names accept any text, so `Field::Name` yields a complete, valid input.
pub fn input_unparseable(field: Field) -> BuildingInput {
    let input = complete_input();
    match field {
        Field::Name => input.with_name("12.5"),
        Field::Size => input.with_size("fifty"),
        Field::Temperature => input.with_temperature("21C"),
    }
}
