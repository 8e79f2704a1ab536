// ds-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, AvailableEnergy as UomAvailableEnergy, Energy as UomEnergy,
    Force as UomForce, Length as UomLength, Mass as UomMass, MassDensity as UomMassDensity,
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
    Time as UomTime, Torque as UomTorque, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Density = UomMassDensity;
pub type Energy = UomEnergy;
pub type Force = UomForce;
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Pressure = UomPressure;
pub type SpecificEnergy = UomAvailableEnergy;
pub type Temperature = UomThermodynamicTemperature;
pub type Time = UomTime;
pub type Torque = UomTorque;
pub type Velocity = UomVelocity;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

pub mod constants {
    /// Newtonian gravitational constant, m^3 kg^-1 s^-2 (CODATA 2018).
    pub const G_SI: f64 = 6.674_30e-11;

    /// Boltzmann constant, J/K (exact since the 2019 SI redefinition).
    pub const KB_SI: f64 = 1.380_649e-23;
}
