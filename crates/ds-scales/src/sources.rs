//! Which base scales were supplied and which were defaulted.

/// Rule applied when a provider leaves the temperature scale out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TemperatureDefault {
    /// `temperature = energy / kB`
    #[default]
    Boltzmann,
    /// Fixed at 1.0 for mechanical unit systems.
    Unit,
}

/// Where the mass/density pair came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MassSource {
    /// Density supplied, mass derived.
    Density,
    /// Mass supplied, density derived.
    Mass,
    /// Both supplied and trusted as given.
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TimeSource {
    Explicit,
    /// `1 / sqrt(pi G density)`
    FreeFall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TemperatureSource {
    Explicit,
    Unit,
    Boltzmann,
}

impl TemperatureSource {
    pub(crate) fn defaulted(rule: TemperatureDefault) -> Self {
        match rule {
            TemperatureDefault::Boltzmann => TemperatureSource::Boltzmann,
            TemperatureDefault::Unit => TemperatureSource::Unit,
        }
    }
}

/// Resolution record of one scale system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleSources {
    pub mass: MassSource,
    pub time: TimeSource,
    pub temperature: TemperatureSource,
}
