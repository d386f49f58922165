#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use core::fmt;

pub mod field;

mod curve;
mod point;

pub use curve::Curve;
pub use point::Point;

pub use num_bigint;
pub use rand_core;

#[cfg(feature = "proptest")]
#[cfg_attr(docsrs, doc(cfg(feature = "proptest")))]
pub mod proptest_impls;

/// Error returned by curve construction and group operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A modular inverse of zero was requested.
    ///
    /// Surfaces when doubling a 2-torsion point (`y = 0`), where the
    /// tangent line is vertical and the group law has no finite slope.
    DivisionByZero,
    /// The supplied parameters do not describe a usable curve: the
    /// discriminant `4a³ + 27b²` vanishes mod `p`, or the generator is
    /// the identity or does not lie on the curve.
    InvalidCurveParameters,
    /// A point failed on-curve validation.
    PointNotOnCurve,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;
        match self {
            DivisionByZero => write!(f, "modular inverse of zero"),
            InvalidCurveParameters => write!(f, "parameters describe a singular curve or an invalid generator"),
            PointNotOnCurve => write!(f, "point does not satisfy the curve equation"),
        }
    }
}

impl std::error::Error for Error {}
