//! Provider capability contract.
//!
//! A provider is a user type describing one unit system. It must supply a
//! length scale and may supply any subset of the other base scales; whatever
//! it leaves out is derived by [`ScaleSystem`](crate::ScaleSystem).

use ds_core::Real;

use crate::sources::TemperatureDefault;

/// Base scales a concrete unit-system definition supplies directly.
///
/// Accessors must be pure: the same value on every call. At least one of
/// [`density_scale`](Self::density_scale) and [`mass_scale`](Self::mass_scale)
/// has to return `Some`, otherwise construction fails with
/// `MissingBaseScale`.
pub trait ScaleProvider {
    /// Precision shared by every scale of the system.
    type Real: Real;

    /// Characteristic length (m). Mandatory.
    fn length_scale(&self) -> Self::Real;

    /// Characteristic density (kg/m^3).
    fn density_scale(&self) -> Option<Self::Real> {
        None
    }

    /// Characteristic mass (kg).
    fn mass_scale(&self) -> Option<Self::Real> {
        None
    }

    /// Characteristic time (s). Defaults to the free-fall time when absent.
    fn time_scale(&self) -> Option<Self::Real> {
        None
    }

    /// Characteristic temperature (K). Defaults per
    /// [`temperature_default`](Self::temperature_default) when absent.
    fn temperature_scale(&self) -> Option<Self::Real> {
        None
    }

    /// Rule used when no temperature scale is supplied.
    fn temperature_default(&self) -> TemperatureDefault {
        TemperatureDefault::Boltzmann
    }
}

/// Provider for unit systems anchored on a mass rather than a density.
///
/// Wrap it in [`MassFirst`] to obtain a [`ScaleProvider`]; the density scale
/// is then derived as `mass / length^3`.
pub trait MassFirstProvider {
    type Real: Real;

    fn length_scale(&self) -> Self::Real;

    fn mass_scale(&self) -> Self::Real;

    fn time_scale(&self) -> Option<Self::Real> {
        None
    }

    fn temperature_scale(&self) -> Option<Self::Real> {
        None
    }
}

/// Adapter turning a [`MassFirstProvider`] into a [`ScaleProvider`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassFirst<P>(pub P);

impl<P: MassFirstProvider> ScaleProvider for MassFirst<P> {
    type Real = P::Real;

    fn length_scale(&self) -> Self::Real {
        self.0.length_scale()
    }

    fn mass_scale(&self) -> Option<Self::Real> {
        Some(self.0.mass_scale())
    }

    fn time_scale(&self) -> Option<Self::Real> {
        self.0.time_scale()
    }

    fn temperature_scale(&self) -> Option<Self::Real> {
        self.0.temperature_scale()
    }
}

/// Adapter for purely mechanical unit systems: an absent temperature scale
/// defaults to 1.0 instead of the Boltzmann relation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mechanical<P>(pub P);

impl<P: ScaleProvider> ScaleProvider for Mechanical<P> {
    type Real = P::Real;

    fn length_scale(&self) -> Self::Real {
        self.0.length_scale()
    }

    fn density_scale(&self) -> Option<Self::Real> {
        self.0.density_scale()
    }

    fn mass_scale(&self) -> Option<Self::Real> {
        self.0.mass_scale()
    }

    fn time_scale(&self) -> Option<Self::Real> {
        self.0.time_scale()
    }

    fn temperature_scale(&self) -> Option<Self::Real> {
        self.0.temperature_scale()
    }

    fn temperature_default(&self) -> TemperatureDefault {
        TemperatureDefault::Unit
    }
}
