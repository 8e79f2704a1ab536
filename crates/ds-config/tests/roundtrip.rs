use ds_config::*;
use ds_core::{Precision, Quantity, ScaleError};

fn block() -> UnitSystemDef {
    UnitSystemDef {
        id: "block".to_string(),
        name: "Block".to_string(),
        precision: Precision::Double,
        variant: VariantDef::Mechanical,
        length: Some(2.0.into()),
        density: None,
        mass: Some(3.0.into()),
        time: Some(4.0.into()),
        temperature: None,
    }
}

fn earth() -> UnitSystemDef {
    UnitSystemDef {
        id: "earth".to_string(),
        name: "Earth".to_string(),
        precision: Precision::Double,
        variant: VariantDef::General,
        length: Some(ScaleValueDef::Plain(6.371e6)),
        density: Some(ScaleValueDef::Plain(5.514e3)),
        mass: None,
        time: None,
        temperature: None,
    }
}

#[test]
fn roundtrip_yaml_document() {
    let document = ScaleDocument {
        version: 1,
        systems: vec![block(), earth()],
    };

    validate_document(&document).unwrap();

    let path =
        std::env::temp_dir().join(format!("ds_config_roundtrip_{}.yaml", std::process::id()));
    save_yaml(&path, &document).unwrap();
    let loaded = load_yaml(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(document, loaded);
}

#[test]
fn roundtrip_json_document() {
    let mut single = earth();
    single.id = "earth32".to_string();
    single.precision = Precision::Single;
    // energy / kB would overflow f32 for an Earth-sized system
    single.temperature = Some(3000.0.into());
    let document = ScaleDocument {
        version: 1,
        systems: vec![single],
    };

    let path =
        std::env::temp_dir().join(format!("ds_config_roundtrip_{}.json", std::process::id()));
    save_json(&path, &document).unwrap();
    let loaded = load(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(document, loaded);
}

#[test]
fn parses_plain_and_tagged_values() {
    let yaml = r#"
version: 1
systems:
  - id: lab
    name: Lab
    precision: single
    length: 2.0
    density: { value: 0.5, precision: single }
    time: 1.0
"#;
    let document = from_yaml_str(yaml).unwrap();
    let def = document.system("lab").unwrap();
    assert_eq!(def.length, Some(ScaleValueDef::Plain(2.0)));
    assert_eq!(
        def.density,
        Some(ScaleValueDef::Tagged {
            value: 0.5,
            precision: Precision::Single
        })
    );

    let sys = document.build("lab").unwrap();
    assert_eq!(sys.precision(), Precision::Single);
    assert_eq!(sys.scale(Quantity::Mass), 4.0);
}

#[test]
fn precision_mismatch_is_rejected() {
    let yaml = r#"
version: 1
systems:
  - id: mixed
    name: Mixed
    length: 2.0
    density: { value: 0.5, precision: single }
"#;
    let err = from_yaml_str(yaml).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Validation(ValidationError::InvalidSystem {
            source: ScaleError::PrecisionMismatch { .. },
            ..
        })
    ));
}

#[test]
fn missing_density_and_mass_is_rejected() {
    let mut def = earth();
    def.density = None;
    let document = ScaleDocument {
        version: 1,
        systems: vec![def],
    };
    let err = validate_document(&document).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::InvalidSystem {
            source: ScaleError::MissingBaseScale { .. },
            ..
        }
    ));
}

#[test]
fn negative_length_is_rejected() {
    let mut def = earth();
    def.length = Some((-1.0).into());
    let err = validate_system(&def).unwrap_err();
    assert!(err.to_string().contains("length"));
}

#[test]
fn empty_id_is_rejected() {
    let mut def = earth();
    def.id = "  ".to_string();
    let document = ScaleDocument {
        version: 1,
        systems: vec![def],
    };
    let err = validate_document(&document).unwrap_err();
    assert!(matches!(err, ValidationError::EmptyId { .. }));
    assert!(err.to_string().contains("Earth"));
}

#[test]
fn build_reports_tagged_precision_mismatch() {
    // Constructed directly, so nothing has validated it yet.
    let mut def = earth();
    def.density = Some(ScaleValueDef::Tagged {
        value: 5.514e3,
        precision: Precision::Single,
    });
    let document = ScaleDocument {
        version: 1,
        systems: vec![def],
    };
    let err = document.build("earth").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Scale(ScaleError::PrecisionMismatch {
            quantity: "density",
            expected: Precision::Double,
            found: Precision::Single,
        })
    ));
}

#[test]
fn duplicate_ids_are_rejected() {
    let document = ScaleDocument {
        version: 1,
        systems: vec![earth(), earth()],
    };
    let err = validate_document(&document).unwrap_err();
    assert!(matches!(err, ValidationError::DuplicateId { .. }));
}

#[test]
fn mechanical_with_temperature_conflicts() {
    let mut def = block();
    def.temperature = Some(300.0.into());
    let err = validate_system(&def).unwrap_err();
    assert!(matches!(err, ValidationError::Conflict { .. }));
}

#[test]
fn unsupported_version_is_rejected() {
    let document = ScaleDocument {
        version: LATEST_VERSION + 1,
        systems: vec![],
    };
    let err = validate_document(&document).unwrap_err();
    assert!(matches!(err, ValidationError::UnsupportedVersion { .. }));
}

#[test]
fn unknown_system_id() {
    let document = ScaleDocument {
        version: 1,
        systems: vec![earth()],
    };
    let err = document.build("mars").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownSystem { .. }));
}
