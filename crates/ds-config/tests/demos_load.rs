use std::path::PathBuf;

use ds_core::{Precision, Quantity};
use ds_scales::{TemperatureSource, TimeSource};

fn demo_path() -> PathBuf {
    let crate_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    crate_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .join("demos/unit_systems.yaml")
}

#[test]
fn demo_document_validates() {
    let path = demo_path();
    let result = ds_config::load_yaml(&path);
    assert!(
        result.is_ok(),
        "demo failed validation: {} => {:?}",
        path.display(),
        result.err()
    );
}

#[test]
fn demo_systems_resolve_as_documented() {
    let document = ds_config::load_yaml(&demo_path()).unwrap();

    let free_fall = document.build("earth_free_fall").unwrap();
    assert_eq!(free_fall.sources().time, TimeSource::FreeFall);

    let block = document.build("block").unwrap();
    assert_eq!(block.scale(Quantity::Density), 0.375);
    assert_eq!(block.sources().temperature, TemperatureSource::Unit);

    let lab = document.build("lab_single").unwrap();
    assert_eq!(lab.precision(), Precision::Single);
    assert_eq!(lab.scale(Quantity::Temperature), 300.0);
}
