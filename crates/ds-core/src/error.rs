use thiserror::Error;

use crate::numeric::Precision;

pub type ScaleResult<T> = Result<T, ScaleError>;

/// Configuration-time failures of a unit system.
///
/// None of these are recoverable by retrying: the caller has to supply a
/// corrected set of base scales and construct a new system.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScaleError {
    #[error("Missing base scale: {quantity}")]
    MissingBaseScale { quantity: &'static str },

    #[error("Invalid {quantity} scale: {value} (must be finite and strictly positive)")]
    InvalidScaleValue { quantity: &'static str, value: f64 },

    #[error("Precision mismatch for {quantity}: expected {expected}, found {found}")]
    PrecisionMismatch {
        quantity: &'static str,
        expected: Precision,
        found: Precision,
    },

    #[error("Unknown quantity: {name}")]
    UnknownQuantity { name: String },
}
