use core::fmt;
use num_bigint::BigUint;

/// A point in the group of a short Weierstrass curve.
///
/// Either the distinguished identity element (the "point at infinity",
/// the neutral element of the group law) or an affine coordinate pair
/// `(x, y)` with both coordinates in `[0, p)` for the curve's prime
/// `p`. There is exactly one representation of the identity; finite
/// coordinates and the neutral element can never be confused.
///
/// A `Point` is a plain value with no curve attached. Group
/// operations live on [`Curve`], which knows the modulus and
/// coefficients; [`Curve::is_on_curve`] tells you whether a point
/// satisfies a particular curve's equation.
///
/// [`Curve`]: crate::Curve
/// [`Curve::is_on_curve`]: crate::Curve::is_on_curve
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Point {
    /// The identity element of the group.
    Identity,
    /// A finite point with affine coordinates `(x, y)`.
    Affine {
        /// x-coordinate, in `[0, p)`.
        x: BigUint,
        /// y-coordinate, in `[0, p)`.
        y: BigUint,
    },
}

impl Point {
    /// Construct a finite point from its affine coordinates.
    pub fn affine(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    /// Whether this is the identity element.
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// The x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// The y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Point::Identity => write!(f, "infinity"),
            Point::Affine { x, y } => write!(f, "({x:x}, {y:x})"),
        }
    }
}
