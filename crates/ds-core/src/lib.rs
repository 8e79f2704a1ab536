//! ds-core: stable foundation for dimscale.
//!
//! Contains:
//! - numeric (Real precision trait + tolerances + positivity checks)
//! - quantity (identifiers for base scales and every scaled quantity)
//! - units (uom SI types + constructors + physical constants)
//! - error (shared error taxonomy)

pub mod error;
pub mod numeric;
pub mod quantity;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{ScaleError, ScaleResult};
pub use numeric::*;
pub use quantity::{BaseScale, Quantity};
