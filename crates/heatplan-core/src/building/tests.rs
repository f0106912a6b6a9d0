//! Tests for building records and inputs.

use super::*;

#[test]
fn test_try_new_accepts_valid_values() {
    let record = BuildingRecord::try_new("Office", 50.0, 21.0).unwrap();
    assert_eq!(record.name(), "Office");
    assert_eq!(record.size(), 50.0);
    assert_eq!(record.temperature(), 21.0);
}

#[test]
fn test_try_new_rejects_invalid_size() {
    assert_eq!(
        BuildingRecord::try_new("Shed", 0.0, 10.0),
        Err(Rejection::NonPositiveSize(0.0))
    );
    assert_eq!(
        BuildingRecord::try_new("Shed", f64::NAN, 10.0),
        Err(Rejection::NonFiniteSize)
    );
}

#[test]
fn test_display() {
    let record = BuildingRecord::try_new("Gym", 120.5, 18.0).unwrap();
    assert_eq!(record.to_string(), "Gym (120.5 m², 18 °C)");
}

#[test]
fn test_input_builder() {
    let input = BuildingInput::empty()
        .with_name("School")
        .with_size("300")
        .with_temperature("20.5");

    assert_eq!(input.name(), Some("School"));
    assert_eq!(input.size(), Some("300"));
    assert_eq!(input.temperature(), Some("20.5"));
    assert!(input.is_complete());
}

#[test]
fn test_input_setters_and_clear() {
    let mut input = BuildingInput::new("Office", 50.0, 21.0);
    input.set_size(None);
    assert!(!input.is_complete());
    assert_eq!(input.name(), Some("Office"));

    input.clear();
    assert_eq!(input, BuildingInput::empty());
}

#[test]
fn test_input_from_numbers_round_trips_through_text() {
    let input = BuildingInput::new("Hall", 75.25, -3.0);
    assert_eq!(input.size(), Some("75.25"));
    assert_eq!(input.temperature(), Some("-3"));
}
