//! Tests for planner configuration.

use std::io::Write;

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [validation]
        allow_empty_name = false
        require_positive_size = true

        [engine]
        type = "heat_load"
        specific_load_w_per_m2 = 60.0
        design_outdoor_temperature = -14.0
        reference_indoor_temperature = 20.0
        full_load_hours = 1800.0
    "#;

    let config = PlannerConfig::from_toml_str(toml).unwrap();
    assert!(!config.validation.allow_empty_name);
    assert!(config.validation.require_positive_size);
    match config.engine {
        EngineConfig::HeatLoad(heat_load) => {
            assert_eq!(heat_load.specific_load_w_per_m2, Some(60.0));
            assert_eq!(heat_load.design_outdoor_temperature, Some(-14.0));
            assert_eq!(heat_load.full_load_hours, Some(1800.0));
        }
        other => panic!("expected heat load engine, got {other:?}"),
    }
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        validation:
          allow_empty_name: false
        engine:
          type: heat_load
          specific_load_w_per_m2: 45.0
    "#;

    let config = PlannerConfig::from_yaml_str(yaml).unwrap();
    assert!(!config.validation.allow_empty_name);
    assert!(config.validation.require_positive_size);
    assert_eq!(
        config.engine,
        EngineConfig::HeatLoad(HeatLoadConfig {
            specific_load_w_per_m2: Some(45.0),
            ..HeatLoadConfig::default()
        })
    );
}

#[test]
fn test_empty_document_uses_defaults() {
    let config = PlannerConfig::from_toml_str("").unwrap();
    assert_eq!(config, PlannerConfig::default());
    assert_eq!(config.engine, EngineConfig::FloorArea);
    assert!(config.validation.allow_empty_name);
}

#[test]
fn test_floor_area_engine_tag() {
    let config = PlannerConfig::from_toml_str(
        r#"
        [engine]
        type = "floor_area"
    "#,
    )
    .unwrap();
    assert_eq!(config.engine, EngineConfig::FloorArea);
}

#[test]
fn test_unknown_engine_is_rejected() {
    let result = PlannerConfig::from_toml_str(
        r#"
        [engine]
        type = "monte_carlo"
    "#,
    );
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_builder() {
    let config = PlannerConfig::new()
        .with_validation(ValidationConfig {
            allow_empty_name: false,
            require_positive_size: false,
        })
        .with_engine(EngineConfig::HeatLoad(HeatLoadConfig::default()));

    assert!(!config.validation.allow_empty_name);
    assert!(matches!(config.engine, EngineConfig::HeatLoad(_)));
}

#[test]
fn test_policy_conversion() {
    let policy = ValidationConfig {
        allow_empty_name: false,
        require_positive_size: false,
    }
    .policy();
    assert!(!policy.allow_empty_name);
    assert!(!policy.require_positive_size);
    assert_eq!(ValidationConfig::default().policy(), ValidationPolicy::default());
}

#[test]
fn test_validate_rejects_degenerate_heat_load() {
    let config = PlannerConfig::new().with_engine(EngineConfig::HeatLoad(HeatLoadConfig {
        design_outdoor_temperature: Some(20.0),
        reference_indoor_temperature: Some(20.0),
        ..HeatLoadConfig::default()
    }));
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let inverted = PlannerConfig::new().with_engine(EngineConfig::HeatLoad(HeatLoadConfig {
        design_outdoor_temperature: Some(25.0),
        reference_indoor_temperature: Some(20.0),
        ..HeatLoadConfig::default()
    }));
    match inverted.validate() {
        Err(ConfigError::Invalid(msg)) => assert!(msg.contains("must be above")),
        other => panic!("expected invalid config, got {other:?}"),
    }

    let negative = PlannerConfig::new().with_engine(EngineConfig::HeatLoad(HeatLoadConfig {
        specific_load_w_per_m2: Some(-1.0),
        ..HeatLoadConfig::default()
    }));
    assert!(matches!(negative.validate(), Err(ConfigError::Invalid(_))));

    assert!(PlannerConfig::default().validate().is_ok());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[engine]\ntype = \"heat_load\"\nfull_load_hours = 1500.0").unwrap();

    let config = PlannerConfig::load(file.path()).unwrap();
    assert!(matches!(config.engine, EngineConfig::HeatLoad(_)));
}

#[test]
fn test_load_rejects_invalid_file_contents() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[engine]\ntype = \"heat_load\"\nfull_load_hours = -5.0").unwrap();

    assert!(matches!(
        PlannerConfig::load(file.path()),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_missing_file_falls_back_to_default() {
    let result = PlannerConfig::load("does/not/exist/heatplan.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
    assert_eq!(result.unwrap_or_default(), PlannerConfig::default());
}

#[test]
fn test_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "engine:\n  type: floor_area").unwrap();

    let config = PlannerConfig::from_yaml_file(file.path()).unwrap();
    assert_eq!(config.engine, EngineConfig::FloorArea);
}
