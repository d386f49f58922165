use crate::{field, Error, Point};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{Signed, Zero};
use rand_core::RngCore;

/// The domain parameters of a short Weierstrass curve
/// `y² = x³ + ax + b (mod p)` together with a generator.
///
/// A `Curve` is immutable once constructed and every group operation
/// takes it by reference, so any number of curves can coexist and a
/// curve shared between threads needs no locking. [`Curve::new`]
/// validates the parameters up front; a value you hold is always a
/// non-singular curve whose generator lies on it.
///
/// ```
/// use num_bigint::{BigInt, BigUint};
/// use weierstrass_fun::{Curve, Point};
///
/// // the toy curve y² = x³ + 2x + 2 over F₁₇, subgroup order 19
/// let curve = Curve::new(
///     BigUint::from(17u8),
///     BigInt::from(2),
///     BigInt::from(2),
///     Point::affine(BigUint::from(5u8), BigUint::from(1u8)),
///     BigUint::from(19u8),
///     BigUint::from(1u8),
/// )
/// .unwrap();
/// let two_g = curve.add(curve.generator(), curve.generator()).unwrap();
/// assert_eq!(
///     two_g,
///     Point::affine(BigUint::from(6u8), BigUint::from(3u8))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "UncheckedCurve")
)]
pub struct Curve {
    p: BigUint,
    a: BigUint,
    b: BigUint,
    g: Point,
    n: BigUint,
    h: BigUint,
}

/// Deserialization target for [`Curve`]. Deserialized parameters are
/// untrusted input and go through [`Curve::new`] like any others, so a
/// `Curve` value always satisfies the construction-time checks no
/// matter where it came from.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedCurve {
    p: BigUint,
    a: BigUint,
    b: BigUint,
    g: Point,
    n: BigUint,
    h: BigUint,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedCurve> for Curve {
    type Error = Error;

    fn try_from(raw: UncheckedCurve) -> Result<Self, Error> {
        Curve::new(
            raw.p,
            BigInt::from(raw.a),
            BigInt::from(raw.b),
            raw.g,
            raw.n,
            raw.h,
        )
    }
}

impl Curve {
    /// Construct a curve from its domain parameters, validating them.
    ///
    /// `p` must be an odd prime (not checked, a precondition). The
    /// coefficients may be negative; they are reduced into `[0, p)`,
    /// so the textbook curve `y² = x³ − 7x + 10` is written with
    /// `a = -7` directly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCurveParameters`] when the discriminant
    /// `4a³ + 27b²` vanishes mod `p` (a singular curve with no group
    /// law) or when `g` is the identity or misses the curve. Nothing
    /// downstream ever sees such parameters.
    pub fn new(
        p: BigUint,
        a: BigInt,
        b: BigInt,
        g: Point,
        n: BigUint,
        h: BigUint,
    ) -> Result<Self, Error> {
        let a = field::normalize(&a, &p);
        let b = field::normalize(&b, &p);
        let discriminant =
            (BigUint::from(4u8) * &a * &a * &a + BigUint::from(27u8) * &b * &b) % &p;
        if discriminant.is_zero() {
            return Err(Error::InvalidCurveParameters);
        }
        let curve = Curve { p, a, b, g, n, h };
        if curve.g.is_identity() || !curve.is_on_curve(&curve.g) {
            return Err(Error::InvalidCurveParameters);
        }
        Ok(curve)
    }

    /// The secp256k1 curve as specified in [_SEC 2: Recommended
    /// Elliptic Curve Domain Parameters_] and used in Bitcoin.
    ///
    /// [_SEC 2: Recommended Elliptic Curve Domain Parameters_]: https://www.secg.org/sec2-v2.pdf
    pub fn secp256k1() -> Self {
        let p = hex_uint("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");
        let gx = hex_uint("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");
        let gy = hex_uint("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8");
        let n = hex_uint("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");
        Curve::new(
            p,
            BigInt::zero(),
            BigInt::from(7),
            Point::affine(gx, gy),
            n,
            BigUint::from(1u8),
        )
        .expect("SEC 2 constants are valid")
    }

    /// The field prime `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// The coefficient `a`, reduced into `[0, p)`.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// The coefficient `b`, reduced into `[0, p)`.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// The generator point `g`.
    pub fn generator(&self) -> &Point {
        &self.g
    }

    /// The order `n` of the subgroup generated by `g`.
    pub fn order(&self) -> &BigUint {
        &self.n
    }

    /// The cofactor `h` (the ratio between the curve's order and `n`).
    pub fn cofactor(&self) -> &BigUint {
        &self.h
    }

    /// Whether `point` satisfies the curve equation.
    ///
    /// The identity is on every curve. Finite points must have both
    /// coordinates in `[0, p)` and satisfy `y² ≡ x³ + ax + b (mod p)`.
    ///
    /// Group operations never produce an off-curve point from on-curve
    /// inputs, so this is not called on the hot path; it is for
    /// checking externally supplied points at trust boundaries.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Identity => true,
            Point::Affine { x, y } => {
                if x >= &self.p || y >= &self.p {
                    return false;
                }
                let lhs = (y * y) % &self.p;
                let rhs = (x * x * x + &self.a * x + &self.b) % &self.p;
                lhs == rhs
            }
        }
    }

    /// Validate that `point` is on the curve, as a `Result` for use
    /// with `?` at trust boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PointNotOnCurve`] when [`Curve::is_on_curve`]
    /// is false.
    pub fn ensure_on_curve(&self, point: &Point) -> Result<(), Error> {
        if self.is_on_curve(point) {
            Ok(())
        } else {
            Err(Error::PointNotOnCurve)
        }
    }

    /// The additive inverse of `point`: `(x, y) ↦ (x, -y mod p)`.
    ///
    /// The identity is its own negation, as is any 2-torsion point
    /// (`y = 0`).
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => {
                let y = if y.is_zero() {
                    BigUint::zero()
                } else {
                    &self.p - y
                };
                Point::affine(x.clone(), y)
            }
        }
    }

    /// Add two points under the chord-and-tangent group law.
    ///
    /// The identity is neutral on both sides. Two finite points
    /// sharing an x-coordinate but not a y-coordinate are mutual
    /// inverses and sum to the identity (the chord is vertical).
    /// Otherwise the slope is the tangent at `p` when the points
    /// coincide and the chord through them when they differ, and the
    /// result is the third intersection of that line with the curve,
    /// reflected across the x-axis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] when doubling a 2-torsion
    /// point (`y = 0`): the tangent there is vertical and there is no
    /// finite slope. The failure is surfaced rather than masked with a
    /// wrong point.
    pub fn add(&self, p: &Point, q: &Point) -> Result<Point, Error> {
        let (x1, y1) = match p {
            Point::Identity => return Ok(q.clone()),
            Point::Affine { x, y } => (BigInt::from(x.clone()), BigInt::from(y.clone())),
        };
        let (x2, y2) = match q {
            Point::Identity => return Ok(p.clone()),
            Point::Affine { x, y } => (BigInt::from(x.clone()), BigInt::from(y.clone())),
        };

        if x1 == x2 && y1 != y2 {
            return Ok(Point::Identity);
        }

        let m = if x1 == x2 {
            // tangent slope, by implicit differentiation of the curve
            // equation; y1 = 0 makes the tangent vertical
            let numerator = BigInt::from(3) * &x1 * &x1 + BigInt::from(self.a.clone());
            numerator * BigInt::from(field::inverse(&(BigInt::from(2) * &y1), &self.p)?)
        } else {
            (&y1 - &y2) * BigInt::from(field::inverse(&(&x1 - &x2), &self.p)?)
        };

        let x3 = &m * &m - &x1 - &x2;
        // the third intersection, reflected across the x-axis
        let y3 = -(&y1 + &m * (&x3 - &x1));
        Ok(Point::affine(
            field::normalize(&x3, &self.p),
            field::normalize(&y3, &self.p),
        ))
    }

    /// Compute `k · point` by double-and-add.
    ///
    /// The scalar is first reduced modulo the subgroup order `n` (not
    /// the field prime, a different modulus entirely), so
    /// `mul(n, g) == Identity`. A negative scalar multiplies the
    /// negated point: `mul(-k, P) == mul(k, negate(P))`. The bits of
    /// the reduced scalar are consumed least-significant first,
    /// accumulating the running addend wherever a bit is set, which
    /// takes O(log k) point additions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] when a required doubling
    /// lands on a 2-torsion point, as in [`Curve::add`]. This cannot
    /// happen in an odd-order subgroup.
    pub fn mul(&self, k: &BigInt, point: &Point) -> Result<Point, Error> {
        if point.is_identity() {
            return Ok(Point::Identity);
        }
        if k.is_negative() {
            return self.mul(&-k, &self.negate(point));
        }

        let mut k = field::normalize(k, &self.n);
        let mut acc = Point::Identity;
        let mut addend = point.clone();
        while !k.is_zero() {
            if k.is_odd() {
                acc = self.add(&acc, &addend)?;
            }
            k >>= 1usize;
            if !k.is_zero() {
                addend = self.add(&addend, &addend)?;
            }
        }
        Ok(acc)
    }

    /// Draw a scalar uniformly from `[1, n-1]` using the supplied
    /// random number generator.
    ///
    /// Rejection sampling: fill the minimal number of bytes, mask the
    /// bits above `n - 1`'s bit length and retry until the draw lands
    /// in range, so there is no modulo bias. The expected number of
    /// draws is below two.
    ///
    /// The generator is injected by the caller; nothing here decides
    /// whether it is cryptographically secure. Key material needs a
    /// CSPRNG such as `rand::rngs::OsRng`, while tests can pass a
    /// seeded generator for reproducibility.
    pub fn random_scalar<R: RngCore>(&self, rng: &mut R) -> BigUint {
        let upper = &self.n - 1u8;
        let top_mask = match upper.bits() % 8 {
            0 => 0xff,
            rem => (1u8 << rem) - 1,
        };
        let mut bytes = vec![0u8; upper.to_bytes_be().len()];
        loop {
            rng.fill_bytes(&mut bytes);
            bytes[0] &= top_mask;
            let candidate = BigUint::from_bytes_be(&bytes);
            if !candidate.is_zero() && candidate <= upper {
                return candidate;
            }
        }
    }
}

fn hex_uint(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).expect("hardcoded hex constant")
}
