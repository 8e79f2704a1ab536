//! Unit systems whose precision is only known at run time.
//!
//! Values carry their own precision tag; a system is built in one precision
//! and every supplied value has to agree with it.

use ds_core::{BaseScale, Precision, Quantity, Real, ScaleError, ScaleResult};

use crate::sources::{ScaleSources, TemperatureDefault};
use crate::summary::ScaleSummary;
use crate::system::{BaseScales, ScaleSystem};

/// A scale value together with the precision it was supplied in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleValue {
    Single(f32),
    Double(f64),
}

impl ScaleValue {
    pub fn precision(self) -> Precision {
        match self {
            ScaleValue::Single(_) => Precision::Single,
            ScaleValue::Double(_) => Precision::Double,
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            ScaleValue::Single(v) => f64::from(v),
            ScaleValue::Double(v) => v,
        }
    }

    /// Tag an f64 with the given precision (narrowing for `Single`).
    pub fn with_precision(value: f64, precision: Precision) -> Self {
        match precision {
            Precision::Single => ScaleValue::Single(value as f32),
            Precision::Double => ScaleValue::Double(value),
        }
    }
}

impl From<f32> for ScaleValue {
    fn from(v: f32) -> Self {
        ScaleValue::Single(v)
    }
}

impl From<f64> for ScaleValue {
    fn from(v: f64) -> Self {
        ScaleValue::Double(v)
    }
}

/// Base scales with per-value precision tags.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TaggedScales {
    pub length: Option<ScaleValue>,
    pub density: Option<ScaleValue>,
    pub mass: Option<ScaleValue>,
    pub time: Option<ScaleValue>,
    pub temperature: Option<ScaleValue>,
    pub temperature_default: TemperatureDefault,
}

impl TaggedScales {
    fn entries(&self) -> [(BaseScale, Option<ScaleValue>); 5] {
        [
            (BaseScale::Length, self.length),
            (BaseScale::Density, self.density),
            (BaseScale::Mass, self.mass),
            (BaseScale::Time, self.time),
            (BaseScale::Temperature, self.temperature),
        ]
    }

    /// Precision of the first supplied value, length first.
    pub fn inferred_precision(&self) -> Option<Precision> {
        self.entries()
            .into_iter()
            .find_map(|(_, value)| value.map(ScaleValue::precision))
    }

    /// Narrow to `R`, rejecting any value tagged with another precision.
    ///
    /// Missing base scales are reported before any precision disagreement.
    pub fn to_base<R: Real>(&self) -> ScaleResult<BaseScales<R>> {
        if self.length.is_none() {
            return Err(ScaleError::MissingBaseScale {
                quantity: BaseScale::Length.name(),
            });
        }
        if self.density.is_none() && self.mass.is_none() {
            return Err(ScaleError::MissingBaseScale {
                quantity: "density or mass",
            });
        }
        for (scale, value) in self.entries() {
            let found = value.map(ScaleValue::precision);
            if let Some(found) = found.filter(|p| *p != R::PRECISION) {
                return Err(ScaleError::PrecisionMismatch {
                    quantity: scale.name(),
                    expected: R::PRECISION,
                    found,
                });
            }
        }
        let narrow = |value: Option<ScaleValue>| value.map(|v| R::from_f64_lossy(v.as_f64()));
        Ok(BaseScales {
            length: narrow(self.length),
            density: narrow(self.density),
            mass: narrow(self.mass),
            time: narrow(self.time),
            temperature: narrow(self.temperature),
            temperature_default: self.temperature_default,
        })
    }
}

/// A scale system in either precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyScaleSystem {
    Single(ScaleSystem<f32>),
    Double(ScaleSystem<f64>),
}

impl AnyScaleSystem {
    /// Build in the precision of the supplied values; they must all agree.
    pub fn from_tagged(scales: &TaggedScales) -> ScaleResult<Self> {
        let precision = scales
            .inferred_precision()
            .ok_or(ScaleError::MissingBaseScale {
                quantity: BaseScale::Length.name(),
            })?;
        Self::with_precision(scales, precision)
    }

    /// Build in a fixed precision.
    pub fn with_precision(scales: &TaggedScales, precision: Precision) -> ScaleResult<Self> {
        match precision {
            Precision::Single => Ok(AnyScaleSystem::Single(ScaleSystem::from_base(
                scales.to_base::<f32>()?,
            )?)),
            Precision::Double => Ok(AnyScaleSystem::Double(ScaleSystem::from_base(
                scales.to_base::<f64>()?,
            )?)),
        }
    }

    pub fn precision(&self) -> Precision {
        match self {
            AnyScaleSystem::Single(_) => Precision::Single,
            AnyScaleSystem::Double(_) => Precision::Double,
        }
    }

    pub fn sources(&self) -> ScaleSources {
        match self {
            AnyScaleSystem::Single(sys) => sys.sources(),
            AnyScaleSystem::Double(sys) => sys.sources(),
        }
    }

    pub fn scale(&self, quantity: Quantity) -> f64 {
        match self {
            AnyScaleSystem::Single(sys) => sys.scale(quantity).as_f64(),
            AnyScaleSystem::Double(sys) => sys.scale(quantity),
        }
    }

    /// Converts in the system's own precision, then widens the result.
    pub fn nondimensionalize(&self, quantity: Quantity, value: f64) -> f64 {
        match self {
            AnyScaleSystem::Single(sys) => sys
                .nondimensionalize(quantity, f32::from_f64_lossy(value))
                .as_f64(),
            AnyScaleSystem::Double(sys) => sys.nondimensionalize(quantity, value),
        }
    }

    pub fn redimensionalize(&self, quantity: Quantity, value: f64) -> f64 {
        match self {
            AnyScaleSystem::Single(sys) => sys
                .redimensionalize(quantity, f32::from_f64_lossy(value))
                .as_f64(),
            AnyScaleSystem::Double(sys) => sys.redimensionalize(quantity, value),
        }
    }

    pub fn gravitational_constant(&self) -> f64 {
        match self {
            AnyScaleSystem::Single(sys) => sys.gravitational_constant().as_f64(),
            AnyScaleSystem::Double(sys) => sys.gravitational_constant(),
        }
    }

    pub fn boltzmann_constant(&self) -> f64 {
        match self {
            AnyScaleSystem::Single(sys) => sys.boltzmann_constant().as_f64(),
            AnyScaleSystem::Double(sys) => sys.boltzmann_constant(),
        }
    }

    pub fn summary(&self) -> ScaleSummary {
        match self {
            AnyScaleSystem::Single(sys) => sys.summary(),
            AnyScaleSystem::Double(sys) => sys.summary(),
        }
    }
}

impl From<ScaleSystem<f32>> for AnyScaleSystem {
    fn from(sys: ScaleSystem<f32>) -> Self {
        AnyScaleSystem::Single(sys)
    }
}

impl From<ScaleSystem<f64>> for AnyScaleSystem {
    fn from(sys: ScaleSystem<f64>) -> Self {
        AnyScaleSystem::Double(sys)
    }
}
