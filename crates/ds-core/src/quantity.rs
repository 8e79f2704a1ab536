//! Identifiers for the fixed list of scaled quantities.

use std::fmt;
use std::str::FromStr;

use crate::error::ScaleError;

/// A base scale: one of the characteristic quantities anchoring a unit system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BaseScale {
    Length,
    Density,
    Mass,
    Time,
    Temperature,
}

impl BaseScale {
    pub const ALL: [BaseScale; 5] = [
        BaseScale::Length,
        BaseScale::Density,
        BaseScale::Mass,
        BaseScale::Time,
        BaseScale::Temperature,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BaseScale::Length => "length",
            BaseScale::Density => "density",
            BaseScale::Mass => "mass",
            BaseScale::Time => "time",
            BaseScale::Temperature => "temperature",
        }
    }
}

impl fmt::Display for BaseScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every quantity a unit system carries a scale factor for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Quantity {
    Length,
    Density,
    Mass,
    Time,
    Temperature,
    Velocity,
    Acceleration,
    Force,
    /// Force per unit area (pressure, stress)
    Traction,
    /// Force times length (torque)
    Moment,
    /// Energy per unit mass
    Potential,
    Energy,
}

impl Quantity {
    pub const ALL: [Quantity; 12] = [
        Quantity::Length,
        Quantity::Density,
        Quantity::Mass,
        Quantity::Time,
        Quantity::Temperature,
        Quantity::Velocity,
        Quantity::Acceleration,
        Quantity::Force,
        Quantity::Traction,
        Quantity::Moment,
        Quantity::Potential,
        Quantity::Energy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Quantity::Length => "length",
            Quantity::Density => "density",
            Quantity::Mass => "mass",
            Quantity::Time => "time",
            Quantity::Temperature => "temperature",
            Quantity::Velocity => "velocity",
            Quantity::Acceleration => "acceleration",
            Quantity::Force => "force",
            Quantity::Traction => "traction",
            Quantity::Moment => "moment",
            Quantity::Potential => "potential",
            Quantity::Energy => "energy",
        }
    }

    /// SI unit of the scale factor (what one nondimensional unit is worth).
    pub fn si_unit(self) -> &'static str {
        match self {
            Quantity::Length => "m",
            Quantity::Density => "kg/m^3",
            Quantity::Mass => "kg",
            Quantity::Time => "s",
            Quantity::Temperature => "K",
            Quantity::Velocity => "m/s",
            Quantity::Acceleration => "m/s^2",
            Quantity::Force => "N",
            Quantity::Traction => "Pa",
            Quantity::Moment => "N*m",
            Quantity::Potential => "J/kg",
            Quantity::Energy => "J",
        }
    }

    /// The base scale this quantity is, if it is one.
    pub fn base(self) -> Option<BaseScale> {
        match self {
            Quantity::Length => Some(BaseScale::Length),
            Quantity::Density => Some(BaseScale::Density),
            Quantity::Mass => Some(BaseScale::Mass),
            Quantity::Time => Some(BaseScale::Time),
            Quantity::Temperature => Some(BaseScale::Temperature),
            _ => None,
        }
    }
}

impl From<BaseScale> for Quantity {
    fn from(base: BaseScale) -> Self {
        match base {
            BaseScale::Length => Quantity::Length,
            BaseScale::Density => Quantity::Density,
            BaseScale::Mass => Quantity::Mass,
            BaseScale::Time => Quantity::Time,
            BaseScale::Temperature => Quantity::Temperature,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Quantity {
    type Err = ScaleError;

    /// Accepts `velocity`, `Velocity`, `velocity_scale`, `velocity-scale`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        let key = normalized
            .strip_suffix("_scale")
            .unwrap_or(normalized.as_str());
        let key = match key {
            "torque" => "moment",
            "pressure" | "stress" => "traction",
            other => other,
        };
        Quantity::ALL
            .into_iter()
            .find(|q| q.name() == key)
            .ok_or_else(|| ScaleError::UnknownQuantity {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_common_spellings() {
        assert_eq!("velocity".parse::<Quantity>().unwrap(), Quantity::Velocity);
        assert_eq!("Energy".parse::<Quantity>().unwrap(), Quantity::Energy);
        assert_eq!(
            "traction-scale".parse::<Quantity>().unwrap(),
            Quantity::Traction
        );
        assert_eq!("pressure".parse::<Quantity>().unwrap(), Quantity::Traction);
        assert_eq!("torque".parse::<Quantity>().unwrap(), Quantity::Moment);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "viscosity".parse::<Quantity>().unwrap_err();
        assert!(matches!(err, ScaleError::UnknownQuantity { .. }));
    }

    #[test]
    fn base_scales_map_back() {
        for base in BaseScale::ALL {
            let q = Quantity::from(base);
            assert_eq!(q.base(), Some(base));
            assert_eq!(q.name(), base.name());
        }
        assert_eq!(Quantity::Force.base(), None);
    }
}
