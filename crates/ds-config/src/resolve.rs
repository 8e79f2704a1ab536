//! Turn a unit-system definition into a validated scale system.

use ds_core::{Precision, ScaleResult};
use ds_scales::{AnyScaleSystem, ScaleValue, TaggedScales, TemperatureDefault};

use crate::schema::{ScaleValueDef, UnitSystemDef, VariantDef};

fn tag(value: Option<ScaleValueDef>, system_precision: Precision) -> Option<ScaleValue> {
    value.map(|v| match v {
        ScaleValueDef::Plain(value) => ScaleValue::with_precision(value, system_precision),
        ScaleValueDef::Tagged { value, precision } => ScaleValue::with_precision(value, precision),
    })
}

pub fn tagged_scales(def: &UnitSystemDef) -> TaggedScales {
    TaggedScales {
        length: tag(def.length, def.precision),
        density: tag(def.density, def.precision),
        mass: tag(def.mass, def.precision),
        time: tag(def.time, def.precision),
        temperature: tag(def.temperature, def.precision),
        temperature_default: match def.variant {
            VariantDef::General => TemperatureDefault::Boltzmann,
            VariantDef::Mechanical => TemperatureDefault::Unit,
        },
    }
}

/// Build the system in its declared precision.
pub fn build_system(def: &UnitSystemDef) -> ScaleResult<AnyScaleSystem> {
    let system = AnyScaleSystem::with_precision(&tagged_scales(def), def.precision)?;
    tracing::debug!(
        id = %def.id,
        precision = %def.precision,
        sources = ?system.sources(),
        "built unit system"
    );
    Ok(system)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ds_core::{Quantity, ScaleError};
    use ds_scales::TemperatureSource;

    fn def() -> UnitSystemDef {
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

    #[test]
    fn builds_mechanical_system() {
        let sys = build_system(&def()).unwrap();
        assert_eq!(sys.scale(Quantity::Density), 0.375);
        assert_eq!(sys.scale(Quantity::Temperature), 1.0);
        assert_eq!(sys.sources().temperature, TemperatureSource::Unit);
    }

    #[test]
    fn single_precision_system() {
        let mut d = def();
        d.precision = Precision::Single;
        let sys = build_system(&d).unwrap();
        assert_eq!(sys.precision(), Precision::Single);
        assert_eq!(sys.scale(Quantity::Energy), 0.75);
    }

    #[test]
    fn tagged_value_must_match_system_precision() {
        let mut d = def();
        d.time = Some(ScaleValueDef::Tagged {
            value: 4.0,
            precision: Precision::Single,
        });
        let err = build_system(&d).unwrap_err();
        assert!(matches!(
            err,
            ScaleError::PrecisionMismatch {
                quantity: "time",
                ..
            }
        ));
    }
}
