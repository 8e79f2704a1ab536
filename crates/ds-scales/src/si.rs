//! Typed SI views of double-precision scale systems.

use ds_core::units::{
    Accel, Density, Energy, Force, Length, Mass, Pressure, SpecificEnergy, Temperature, Time,
    Torque, Velocity,
};
use uom::si::acceleration::meter_per_second_squared;
use uom::si::available_energy::joule_per_kilogram;
use uom::si::energy::joule;
use uom::si::force::newton;
use uom::si::length::meter;
use uom::si::mass::kilogram;
use uom::si::mass_density::kilogram_per_cubic_meter;
use uom::si::pressure::pascal;
use uom::si::thermodynamic_temperature::kelvin;
use uom::si::time::second;
use uom::si::torque::newton_meter;
use uom::si::velocity::meter_per_second;

use crate::builder::ScaleSystemBuilder;
use crate::system::ScaleSystem;

impl ScaleSystem<f64> {
    pub fn length_si(&self) -> Length {
        Length::new::<meter>(self.length_scale())
    }

    pub fn density_si(&self) -> Density {
        Density::new::<kilogram_per_cubic_meter>(self.density_scale())
    }

    pub fn mass_si(&self) -> Mass {
        Mass::new::<kilogram>(self.mass_scale())
    }

    pub fn time_si(&self) -> Time {
        Time::new::<second>(self.time_scale())
    }

    pub fn temperature_si(&self) -> Temperature {
        Temperature::new::<kelvin>(self.temperature_scale())
    }

    pub fn velocity_si(&self) -> Velocity {
        Velocity::new::<meter_per_second>(self.velocity_scale())
    }

    pub fn acceleration_si(&self) -> Accel {
        Accel::new::<meter_per_second_squared>(self.acceleration_scale())
    }

    pub fn force_si(&self) -> Force {
        Force::new::<newton>(self.force_scale())
    }

    pub fn traction_si(&self) -> Pressure {
        Pressure::new::<pascal>(self.traction_scale())
    }

    pub fn moment_si(&self) -> Torque {
        Torque::new::<newton_meter>(self.moment_scale())
    }

    pub fn potential_si(&self) -> SpecificEnergy {
        SpecificEnergy::new::<joule_per_kilogram>(self.potential_scale())
    }

    pub fn energy_si(&self) -> Energy {
        Energy::new::<joule>(self.energy_scale())
    }
}

impl ScaleSystemBuilder<f64> {
    pub fn length_si(self, length: Length) -> Self {
        self.length(length.get::<meter>())
    }

    pub fn density_si(self, density: Density) -> Self {
        self.density(density.get::<kilogram_per_cubic_meter>())
    }

    pub fn mass_si(self, mass: Mass) -> Self {
        self.mass(mass.get::<kilogram>())
    }

    pub fn time_si(self, time: Time) -> Self {
        self.time(time.get::<second>())
    }

    pub fn temperature_si(self, temperature: Temperature) -> Self {
        self.temperature(temperature.get::<kelvin>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ds_core::units::{k, kg, m, s};
    use uom::si::length::kilometer;
    use uom::si::time::hour;

    #[test]
    fn builder_accepts_any_unit() {
        let sys = ScaleSystemBuilder::<f64>::new()
            .length_si(Length::new::<kilometer>(2.0))
            .mass_si(kg(8.0))
            .time_si(Time::new::<hour>(1.0))
            .temperature_si(k(300.0))
            .build()
            .unwrap();
        assert_eq!(sys.length_scale(), 2000.0);
        assert_eq!(sys.time_scale(), 3600.0);
        assert_eq!(sys.temperature_si().get::<kelvin>(), 300.0);
    }

    #[test]
    fn typed_views_match_raw_scales() {
        let sys = ScaleSystemBuilder::<f64>::new()
            .length_si(m(2.0))
            .mass_si(kg(3.0))
            .time_si(s(4.0))
            .build()
            .unwrap();
        assert_eq!(sys.velocity_si().get::<meter_per_second>(), 0.5);
        assert_eq!(sys.force_si().get::<newton>(), 0.375);
        assert_eq!(sys.energy_si().get::<joule>(), 0.75);
        assert_eq!(sys.density_si().get::<kilogram_per_cubic_meter>(), 0.375);
        assert_eq!(sys.moment_si().get::<newton_meter>(), sys.moment_scale());
    }
}
