//! Flat, precision-independent report of a scale system.

use ds_core::{Precision, Quantity};

use crate::sources::ScaleSources;

/// Every scale and dimensionless constant of one system, widened to f64.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleSummary {
    pub precision: Precision,
    pub sources: ScaleSources,
    pub length: f64,
    pub density: f64,
    pub mass: f64,
    pub time: f64,
    pub temperature: f64,
    pub velocity: f64,
    pub acceleration: f64,
    pub force: f64,
    pub traction: f64,
    pub moment: f64,
    pub potential: f64,
    pub energy: f64,
    pub gravitational_constant: f64,
    pub boltzmann_constant: f64,
}

impl ScaleSummary {
    pub fn scale(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::Length => self.length,
            Quantity::Density => self.density,
            Quantity::Mass => self.mass,
            Quantity::Time => self.time,
            Quantity::Temperature => self.temperature,
            Quantity::Velocity => self.velocity,
            Quantity::Acceleration => self.acceleration,
            Quantity::Force => self.force,
            Quantity::Traction => self.traction,
            Quantity::Moment => self.moment,
            Quantity::Potential => self.potential,
            Quantity::Energy => self.energy,
        }
    }

    /// `(quantity, scale)` in the canonical order of [`Quantity::ALL`].
    pub fn scales(&self) -> impl Iterator<Item = (Quantity, f64)> + '_ {
        Quantity::ALL.into_iter().map(|q| (q, self.scale(q)))
    }
}
