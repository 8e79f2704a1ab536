use core::fmt::{self, Debug, Display};

use num_traits::Float;

use crate::error::{ScaleError, ScaleResult};

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating point width shared by every scale of one unit system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Precision {
    /// 32-bit IEEE 754
    Single,
    /// 64-bit IEEE 754
    #[default]
    Double,
}

impl Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Single => write!(f, "single"),
            Precision::Double => write!(f, "double"),
        }
    }
}

/// Real number type a unit system is evaluated in.
///
/// Sealed: only `f32` and `f64` implement it, so the precision of an instance
/// is fixed by its type parameter and cannot be mixed.
pub trait Real:
    private::Sealed + Float + Debug + Display + Default + Send + Sync + 'static
{
    const PRECISION: Precision;

    /// Convert an f64 literal (e.g. a physical constant) into this precision.
    fn from_f64_lossy(v: f64) -> Self;

    /// Widen to f64 for reporting and cross-precision comparison.
    fn as_f64(self) -> f64;
}

impl Real for f32 {
    const PRECISION: Precision = Precision::Single;

    #[inline]
    fn from_f64_lossy(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Real for f64 {
    const PRECISION: Precision = Precision::Double;

    #[inline]
    fn from_f64_lossy(v: f64) -> Self {
        v
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Purely relative tolerance sized to the rounding of the given precision.
    ///
    /// Scales span dozens of orders of magnitude, so no absolute floor.
    pub fn for_precision(precision: Precision) -> Self {
        match precision {
            Precision::Single => Self { abs: 0.0, rel: 1e-5 },
            Precision::Double => Self {
                abs: 0.0,
                rel: 1e-10,
            },
        }
    }
}

pub fn nearly_equal(a: f64, b: f64, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Accept a scale only if it is finite and strictly positive.
pub fn ensure_positive<R: Real>(v: R, what: &'static str) -> ScaleResult<R> {
    if v.is_finite() && v > R::zero() {
        Ok(v)
    } else {
        Err(ScaleError::InvalidScaleValue {
            quantity: what,
            value: v.as_f64(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn relative_tolerance_handles_tiny_values() {
        let tol = Tolerances::for_precision(Precision::Double);
        assert!(nearly_equal(6.6743e-11, 6.6743e-11 * (1.0 + 1e-12), tol));
        assert!(!nearly_equal(6.6743e-11, 6.7e-11, tol));
    }

    #[test]
    fn ensure_positive_rejects_bad_scales() {
        assert_eq!(ensure_positive(2.5_f64, "length").unwrap(), 2.5);
        for bad in [0.0_f64, -1.0, f64::NAN, f64::INFINITY] {
            let err = ensure_positive(bad, "length").unwrap_err();
            assert!(matches!(
                err,
                ScaleError::InvalidScaleValue {
                    quantity: "length",
                    ..
                }
            ));
        }
    }

    #[test]
    fn precision_tags_match_types() {
        assert_eq!(<f32 as Real>::PRECISION, Precision::Single);
        assert_eq!(<f64 as Real>::PRECISION, Precision::Double);
        assert_eq!(<f32 as Real>::from_f64_lossy(0.5).as_f64(), 0.5);
    }
}
