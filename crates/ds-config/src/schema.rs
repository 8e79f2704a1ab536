//! Unit-system document schema.

use ds_core::Precision;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScaleDocument {
    pub version: u32,
    #[serde(default)]
    pub systems: Vec<UnitSystemDef>,
}

impl ScaleDocument {
    pub fn system(&self, id: &str) -> Option<&UnitSystemDef> {
        self.systems.iter().find(|s| s.id == id)
    }
}

/// One unit system. Every base scale is optional here; which ones are
/// present selects the defaulting rules when the system is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnitSystemDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub precision: Precision,
    #[serde(default)]
    pub variant: VariantDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<ScaleValueDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<ScaleValueDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<ScaleValueDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<ScaleValueDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<ScaleValueDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum VariantDef {
    /// Temperature supplied or derived from energy / kB.
    #[default]
    General,
    /// Temperature fixed to 1.0.
    Mechanical,
}

/// `2.0` (system precision) or `{ value: 2.0, precision: single }`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ScaleValueDef {
    Plain(f64),
    Tagged { value: f64, precision: Precision },
}

impl ScaleValueDef {
    pub fn value(self) -> f64 {
        match self {
            ScaleValueDef::Plain(v) => v,
            ScaleValueDef::Tagged { value, .. } => value,
        }
    }
}

impl From<f64> for ScaleValueDef {
    fn from(v: f64) -> Self {
        ScaleValueDef::Plain(v)
    }
}
