//! Tests for sessions built from configuration.

use std::io::Write;

use heatplan::{
    Assessment, BuildingInput, ConfiguredEngine, EngineConfig, HeatLoadConfig, HeatplanError,
    Outcome, PlannerConfig, PlanningSession, ValidationConfig,
};

#[test]
fn test_default_config_session() {
    let session = PlanningSession::from_config(&PlannerConfig::default()).unwrap();
    assert!(matches!(session.engine(), ConfiguredEngine::FloorArea(_)));
    assert_eq!(session.calculate().unwrap(), Assessment::neutral());
}

#[test]
fn test_heat_load_config_session() {
    let config = PlannerConfig::from_toml_str(
        r#"
        [engine]
        type = "heat_load"
        specific_load_w_per_m2 = 40.0
        design_outdoor_temperature = -10.0
        reference_indoor_temperature = 20.0
        full_load_hours = 1000.0
    "#,
    )
    .unwrap();

    let mut session = PlanningSession::from_config(&config).unwrap();
    session.add_building(&BuildingInput::new("Office", 100.0, 20.0));

    let assessment = session.calculate().unwrap();
    let report = assessment.as_heat_load().unwrap();
    assert_eq!(report.buildings.len(), 1);
    assert!((report.total_peak_load_kw - 4.0).abs() < 1e-9);
    assert!((report.total_annual_demand_kwh - 4000.0).abs() < 1e-9);
}

#[test]
fn test_validation_config_applies_to_session() {
    let config = PlannerConfig::new().with_validation(ValidationConfig {
        allow_empty_name: false,
        require_positive_size: true,
    });
    let mut session = PlanningSession::from_config(&config).unwrap();

    assert!(!session.add_building(&BuildingInput::new("", 10.0, 20.0)).is_added());
    assert_eq!(session.count(), 0);
}

#[test]
fn test_invalid_engine_config_is_an_error() {
    let config = PlannerConfig::new().with_engine(EngineConfig::HeatLoad(HeatLoadConfig {
        design_outdoor_temperature: Some(18.0),
        reference_indoor_temperature: Some(18.0),
        ..HeatLoadConfig::default()
    }));
    assert!(matches!(
        PlanningSession::from_config(&config),
        Err(HeatplanError::Config(_))
    ));
}

#[test]
fn test_missing_config_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let session = PlanningSession::from_config_file(dir.path().join(heatplan::DEFAULT_CONFIG_FILE))
        .unwrap();
    assert!(matches!(session.engine(), ConfiguredEngine::FloorArea(_)));
}

#[test]
fn test_config_file_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[engine]\ntype = \"heat_load\"").unwrap();

    let session = PlanningSession::from_config_file(file.path()).unwrap();
    assert!(matches!(session.engine(), ConfiguredEngine::HeatLoad(_)));
    assert_eq!(session.calculate().unwrap(), Assessment::neutral());
}

#[test]
fn test_broken_config_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[engine\ntype = ").unwrap();

    assert!(matches!(
        PlanningSession::from_config_file(file.path()),
        Err(HeatplanError::Config(_))
    ));
}
