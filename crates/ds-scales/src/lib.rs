//! ds-scales: derive a complete set of scale factors from a few base scales.
//!
//! Provides:
//! - `ScaleProvider` contract and the `Mechanical` / `MassFirst` variants
//! - `ScaleSystem`, the derivation engine (velocity, force, energy, ... and
//!   the dimensionless G and kB)
//! - `ScaleSystemBuilder` for systems assembled at run time
//! - `AnyScaleSystem` for precision chosen at run time
//!
//! # Example
//!
//! ```
//! use ds_scales::{ScaleProvider, ScaleSystem, TimeSource};
//!
//! struct Earth;
//!
//! impl ScaleProvider for Earth {
//!     type Real = f64;
//!
//!     fn length_scale(&self) -> f64 {
//!         6.371e6
//!     }
//!
//!     fn density_scale(&self) -> Option<f64> {
//!         Some(5.514e3)
//!     }
//! }
//!
//! let sys = ScaleSystem::new(&Earth).unwrap();
//! assert_eq!(sys.sources().time, TimeSource::FreeFall);
//! let v = sys.velocity_scale();
//! assert!((v * sys.time_scale() - sys.length_scale()).abs() < 1e-3);
//! ```

pub mod builder;
pub mod dynamic;
pub mod provider;
pub mod si;
pub mod sources;
pub mod summary;
pub mod system;

// Re-exports for ergonomics
pub use builder::ScaleSystemBuilder;
pub use dynamic::{AnyScaleSystem, ScaleValue, TaggedScales};
pub use provider::{MassFirst, MassFirstProvider, Mechanical, ScaleProvider};
pub use sources::{MassSource, ScaleSources, TemperatureDefault, TemperatureSource, TimeSource};
pub use summary::ScaleSummary;
pub use system::{BaseScales, ScaleSystem};
