//! Tests for console event formatting.

use super::*;

fn visitor(event: &str) -> EventVisitor {
    EventVisitor {
        event: Some(event.to_string()),
        ..EventVisitor::default()
    }
}

#[test]
fn test_unknown_events_are_silent() {
    assert!(format_event(&EventVisitor::default()).is_empty());
    assert!(format_event(&visitor("unknown_event")).is_empty());
}

#[test]
fn test_building_added() {
    let v = EventVisitor {
        name: Some("Office".to_string()),
        count: Some(1200),
        ..visitor("building_added")
    };
    let output = format_event(&v);
    assert!(output.contains("Added"));
    assert!(output.contains("Office"));
    assert!(output.contains("1,200"));
}

#[test]
fn test_building_rejected() {
    let v = EventVisitor {
        reason: Some("size is missing".to_string()),
        count: Some(1),
        ..visitor("building_rejected")
    };
    let output = format_event(&v);
    assert!(output.contains("Ignored input"));
    assert!(output.contains("size is missing"));
}

#[test]
fn test_store_reset() {
    let v = EventVisitor {
        cleared: Some(2),
        ..visitor("store_reset")
    };
    assert!(format_event(&v).contains("buildings cleared"));
}

#[test]
fn test_calculate_lifecycle() {
    let start = EventVisitor {
        engine: Some("heat_load".to_string()),
        building_count: Some(3),
        revision: Some(7),
        ..visitor("calculate_start")
    };
    let output = format_event(&start);
    assert!(output.contains("Calculating"));
    assert!(output.contains("heat_load"));
    assert!(output.contains("revision"));

    let end = EventVisitor {
        engine: Some("heat_load".to_string()),
        duration_us: Some(2_500),
        ..visitor("calculate_end")
    };
    let output = format_event(&end);
    assert!(output.contains("finished"));
    assert!(output.contains("2.50ms"));

    let failed = EventVisitor {
        engine: Some("heat_load".to_string()),
        error: Some("boom".to_string()),
        ..visitor("calculate_failed")
    };
    assert!(format_event(&failed).contains("boom"));
}

#[test]
fn test_format_duration_us() {
    assert_eq!(format_duration_us(999), "999µs");
    assert_eq!(format_duration_us(1_500), "1.50ms");
    assert_eq!(format_duration_us(2_000_000), "2.00s");
}

#[test]
fn test_init_is_idempotent() {
    init();
    init();
    tracing::info!(event = "calculate_start", engine = "floor_area", building_count = 0u64);
}
