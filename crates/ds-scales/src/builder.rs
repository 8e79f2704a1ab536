//! Builder for unit systems assembled at run time.

use ds_core::{Real, ScaleResult};

use crate::sources::TemperatureDefault;
use crate::system::{BaseScales, ScaleSystem};

/// Collects base scales, then validates them into a [`ScaleSystem`].
///
/// `build()` requires a length and at least one of density/mass; time and
/// temperature are optional overrides of their defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaleSystemBuilder<R> {
    base: BaseScales<R>,
}

impl<R: Real> ScaleSystemBuilder<R> {
    pub fn new() -> Self {
        Self {
            base: BaseScales::default(),
        }
    }

    pub fn length(mut self, length: R) -> Self {
        self.base.length = Some(length);
        self
    }

    pub fn density(mut self, density: R) -> Self {
        self.base.density = Some(density);
        self
    }

    pub fn mass(mut self, mass: R) -> Self {
        self.base.mass = Some(mass);
        self
    }

    pub fn time(mut self, time: R) -> Self {
        self.base.time = Some(time);
        self
    }

    pub fn temperature(mut self, temperature: R) -> Self {
        self.base.temperature = Some(temperature);
        self
    }

    /// Default an absent temperature scale to 1.0. An explicit temperature
    /// still wins and is validated like any other base scale.
    pub fn mechanical(mut self) -> Self {
        self.base.temperature_default = TemperatureDefault::Unit;
        self
    }

    pub fn base(&self) -> &BaseScales<R> {
        &self.base
    }

    pub fn build(self) -> ScaleResult<ScaleSystem<R>> {
        ScaleSystem::from_base(self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{TemperatureSource, TimeSource};
    use ds_core::ScaleError;

    #[test]
    fn builds_with_explicit_scales() {
        let sys = ScaleSystemBuilder::<f64>::new()
            .length(2.0)
            .mass(3.0)
            .time(4.0)
            .build()
            .unwrap();
        assert_eq!(sys.velocity_scale(), 0.5);
        assert_eq!(sys.sources().time, TimeSource::Explicit);
    }

    #[test]
    fn mechanical_defaults_absent_temperature() {
        let sys = ScaleSystemBuilder::<f32>::new()
            .length(1.0)
            .density(1.0)
            .mechanical()
            .build()
            .unwrap();
        assert_eq!(sys.temperature_scale(), 1.0);
        assert_eq!(sys.sources().temperature, TemperatureSource::Unit);
    }

    #[test]
    fn mechanical_is_order_independent() {
        let before = ScaleSystemBuilder::<f64>::new()
            .length(1.0)
            .density(1.0)
            .temperature(300.0)
            .mechanical()
            .build()
            .unwrap();
        let after = ScaleSystemBuilder::<f64>::new()
            .length(1.0)
            .density(1.0)
            .mechanical()
            .temperature(300.0)
            .build()
            .unwrap();
        assert_eq!(before, after);
        assert_eq!(before.temperature_scale(), 300.0);
        assert_eq!(before.sources().temperature, TemperatureSource::Explicit);
    }

    #[test]
    fn mechanical_still_validates_temperature() {
        let err = ScaleSystemBuilder::<f64>::new()
            .length(1.0)
            .density(1.0)
            .temperature(f64::NAN)
            .mechanical()
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ScaleError::InvalidScaleValue {
                quantity: "temperature",
                ..
            }
        ));
    }

    #[test]
    fn empty_builder_fails() {
        let err = ScaleSystemBuilder::<f64>::new().build().unwrap_err();
        assert_eq!(err, ScaleError::MissingBaseScale { quantity: "length" });
    }

    #[test]
    fn length_only_fails() {
        let err = ScaleSystemBuilder::<f64>::new()
            .length(1.0)
            .time(1.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, ScaleError::MissingBaseScale { .. }));
    }
}
