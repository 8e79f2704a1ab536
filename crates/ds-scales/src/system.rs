//! The derivation engine.
//!
//! Base scales are resolved and validated once, at construction. Derived
//! scales and dimensionless constants are evaluated on each query as pure
//! functions of the resolved base set.

use std::f64::consts::PI;

use ds_core::units::constants::{G_SI, KB_SI};
use ds_core::{
    BaseScale, Precision, Quantity, Real, ScaleError, ScaleResult, Tolerances, ensure_positive,
    nearly_equal,
};
use tracing::{debug, warn};

use crate::provider::ScaleProvider;
use crate::sources::{MassSource, ScaleSources, TemperatureDefault, TemperatureSource, TimeSource};
use crate::summary::ScaleSummary;

/// Raw, unvalidated base-scale inputs. `None` means "not supplied".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BaseScales<R> {
    pub length: Option<R>,
    pub density: Option<R>,
    pub mass: Option<R>,
    pub time: Option<R>,
    pub temperature: Option<R>,
    pub temperature_default: TemperatureDefault,
}

impl<R: Real> BaseScales<R> {
    /// Snapshot the accessors of a provider.
    pub fn from_provider<P>(provider: &P) -> Self
    where
        P: ScaleProvider<Real = R> + ?Sized,
    {
        Self {
            length: Some(provider.length_scale()),
            density: provider.density_scale(),
            mass: provider.mass_scale(),
            time: provider.time_scale(),
            temperature: provider.temperature_scale(),
            temperature_default: provider.temperature_default(),
        }
    }
}

/// A complete, validated unit system in precision `R`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleSystem<R> {
    length: R,
    density: R,
    mass: R,
    time: R,
    temperature: R,
    sources: ScaleSources,
}

impl<R: Real> ScaleSystem<R> {
    /// Bind a scale system to a provider.
    pub fn new<P>(provider: &P) -> ScaleResult<Self>
    where
        P: ScaleProvider<Real = R> + ?Sized,
    {
        Self::from_base(BaseScales::from_provider(provider))
    }

    /// Resolve and validate a set of base scales.
    ///
    /// Presence is checked before values, so an unconfigured system always
    /// reports `MissingBaseScale`. Defaults are applied only to absent scales;
    /// a present but invalid scale is an error.
    pub fn from_base(base: BaseScales<R>) -> ScaleResult<Self> {
        let length = base.length.ok_or(ScaleError::MissingBaseScale {
            quantity: BaseScale::Length.name(),
        })?;
        let supplied = match (base.density, base.mass) {
            (Some(density), Some(mass)) => Supplied::Both { density, mass },
            (Some(density), None) => Supplied::Density(density),
            (None, Some(mass)) => Supplied::Mass(mass),
            (None, None) => {
                return Err(ScaleError::MissingBaseScale {
                    quantity: "density or mass",
                });
            }
        };

        let length = ensure_positive(length, BaseScale::Length.name())?;
        let volume = length * length * length;

        let (density, mass, mass_source) = match supplied {
            Supplied::Both { density, mass } => {
                let density = ensure_positive(density, BaseScale::Density.name())?;
                let mass = ensure_positive(mass, BaseScale::Mass.name())?;
                let implied = (density * volume).as_f64();
                if !nearly_equal(
                    mass.as_f64(),
                    implied,
                    Tolerances::for_precision(R::PRECISION),
                ) {
                    warn!(
                        mass = mass.as_f64(),
                        implied_mass = implied,
                        "mass and density scales are inconsistent; using both as given"
                    );
                }
                (density, mass, MassSource::Both)
            }
            Supplied::Density(density) => {
                let density = ensure_positive(density, BaseScale::Density.name())?;
                let mass = ensure_positive(density * volume, BaseScale::Mass.name())?;
                debug!(mass = mass.as_f64(), "mass scale derived from density");
                (density, mass, MassSource::Density)
            }
            Supplied::Mass(mass) => {
                let mass = ensure_positive(mass, BaseScale::Mass.name())?;
                let density = ensure_positive(mass / volume, BaseScale::Density.name())?;
                debug!(density = density.as_f64(), "density scale derived from mass");
                (density, mass, MassSource::Mass)
            }
        };

        let (time, time_source) = match base.time {
            Some(time) => (
                ensure_positive(time, BaseScale::Time.name())?,
                TimeSource::Explicit,
            ),
            None => {
                let time = free_fall_time(density);
                let time = ensure_positive(time, BaseScale::Time.name())?;
                debug!(time = time.as_f64(), "time scale defaulted to free-fall time");
                (time, TimeSource::FreeFall)
            }
        };

        let mut system = Self {
            length,
            density,
            mass,
            time,
            temperature: R::one(),
            sources: ScaleSources {
                mass: mass_source,
                time: time_source,
                temperature: TemperatureSource::Explicit,
            },
        };

        match base.temperature {
            Some(temperature) => {
                system.temperature =
                    ensure_positive(temperature, BaseScale::Temperature.name())?;
            }
            None => {
                system.sources.temperature =
                    TemperatureSource::defaulted(base.temperature_default);
                if base.temperature_default == TemperatureDefault::Boltzmann {
                    let temperature = system.energy_scale() / R::from_f64_lossy(KB_SI);
                    system.temperature =
                        ensure_positive(temperature, BaseScale::Temperature.name())?;
                    debug!(
                        temperature = system.temperature.as_f64(),
                        "temperature scale defaulted from energy / kB"
                    );
                }
            }
        }

        Ok(system)
    }

    pub fn precision(&self) -> Precision {
        R::PRECISION
    }

    pub fn sources(&self) -> ScaleSources {
        self.sources
    }

    pub fn length_scale(&self) -> R {
        self.length
    }

    pub fn density_scale(&self) -> R {
        self.density
    }

    pub fn mass_scale(&self) -> R {
        self.mass
    }

    pub fn time_scale(&self) -> R {
        self.time
    }

    pub fn temperature_scale(&self) -> R {
        self.temperature
    }

    pub fn velocity_scale(&self) -> R {
        self.length / self.time
    }

    pub fn acceleration_scale(&self) -> R {
        self.velocity_scale() / self.time
    }

    pub fn force_scale(&self) -> R {
        self.mass * self.acceleration_scale()
    }

    /// Force per unit area.
    pub fn traction_scale(&self) -> R {
        self.force_scale() / (self.length * self.length)
    }

    pub fn moment_scale(&self) -> R {
        self.force_scale() * self.length
    }

    /// Energy per unit mass.
    pub fn potential_scale(&self) -> R {
        self.acceleration_scale() * self.length
    }

    pub fn energy_scale(&self) -> R {
        let v = self.velocity_scale();
        self.mass * v * v
    }

    /// G expressed in this unit system: `G * density * time^2`.
    pub fn gravitational_constant(&self) -> R {
        R::from_f64_lossy(G_SI) * self.density * self.time * self.time
    }

    /// kB expressed in this unit system: `kB * temperature / energy`.
    pub fn boltzmann_constant(&self) -> R {
        R::from_f64_lossy(KB_SI) * self.temperature / self.energy_scale()
    }

    /// Scale factor of any supported quantity.
    pub fn scale(&self, quantity: Quantity) -> R {
        match quantity {
            Quantity::Length => self.length_scale(),
            Quantity::Density => self.density_scale(),
            Quantity::Mass => self.mass_scale(),
            Quantity::Time => self.time_scale(),
            Quantity::Temperature => self.temperature_scale(),
            Quantity::Velocity => self.velocity_scale(),
            Quantity::Acceleration => self.acceleration_scale(),
            Quantity::Force => self.force_scale(),
            Quantity::Traction => self.traction_scale(),
            Quantity::Moment => self.moment_scale(),
            Quantity::Potential => self.potential_scale(),
            Quantity::Energy => self.energy_scale(),
        }
    }

    /// Physical (SI) value -> pure number.
    pub fn nondimensionalize(&self, quantity: Quantity, value: R) -> R {
        value / self.scale(quantity)
    }

    /// Pure number -> physical (SI) value.
    pub fn redimensionalize(&self, quantity: Quantity, value: R) -> R {
        value * self.scale(quantity)
    }

    pub fn summary(&self) -> ScaleSummary {
        ScaleSummary {
            precision: R::PRECISION,
            sources: self.sources,
            length: self.length.as_f64(),
            density: self.density.as_f64(),
            mass: self.mass.as_f64(),
            time: self.time.as_f64(),
            temperature: self.temperature.as_f64(),
            velocity: self.velocity_scale().as_f64(),
            acceleration: self.acceleration_scale().as_f64(),
            force: self.force_scale().as_f64(),
            traction: self.traction_scale().as_f64(),
            moment: self.moment_scale().as_f64(),
            potential: self.potential_scale().as_f64(),
            energy: self.energy_scale().as_f64(),
            gravitational_constant: self.gravitational_constant().as_f64(),
            boltzmann_constant: self.boltzmann_constant().as_f64(),
        }
    }
}

enum Supplied<R> {
    Density(R),
    Mass(R),
    Both { density: R, mass: R },
}

/// Free-fall collapse time of a uniform body of the given density.
fn free_fall_time<R: Real>(density: R) -> R {
    let pi = R::from_f64_lossy(PI);
    let g = R::from_f64_lossy(G_SI);
    R::one() / (pi * g * density).sqrt()
}
