#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use core::fmt;

pub use weierstrass_fun as fun;

use weierstrass_fun::num_bigint::{BigInt, BigUint};
use weierstrass_fun::{Curve, Point};

mod keypair;
pub use keypair::KeyPair;

/// Error returned by keypair generation and shared-secret computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyExchangeError {
    /// Scalar multiplication landed on the identity, which has no
    /// x-coordinate to agree on. Cannot happen between honestly
    /// generated keypairs on a prime-order subgroup.
    DegeneratePoint,
    /// The underlying curve arithmetic failed, or the peer's point was
    /// not on the curve.
    Curve(fun::Error),
}

impl fmt::Display for KeyExchangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KeyExchangeError::DegeneratePoint => {
                write!(f, "scalar multiplication landed on the identity")
            }
            KeyExchangeError::Curve(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for KeyExchangeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KeyExchangeError::Curve(e) => Some(e),
            KeyExchangeError::DegeneratePoint => None,
        }
    }
}

impl From<fun::Error> for KeyExchangeError {
    fn from(e: fun::Error) -> Self {
        KeyExchangeError::Curve(e)
    }
}

/// Compute the shared secret from our secret scalar and the peer's
/// public point: the x-coordinate of `own_secret · peer_public`.
///
/// The peer's point is the untrusted input of the exchange, so it is
/// validated against the curve equation before any arithmetic; a peer
/// cannot feed us a point from some other (weaker) curve.
///
/// Both parties arrive at the same point because scalar
/// multiplication commutes through the group structure:
/// `a · (b · g) = b · (a · g)`.
///
/// # Errors
///
/// [`KeyExchangeError::Curve`] when the peer's point is off-curve or
/// the arithmetic hits a degenerate doubling, and
/// [`KeyExchangeError::DegeneratePoint`] when the shared point is the
/// identity (e.g. the peer sent the negation of our own public point).
pub fn shared_secret(
    curve: &Curve,
    own_secret: &BigUint,
    peer_public: &Point,
) -> Result<BigUint, KeyExchangeError> {
    curve.ensure_on_curve(peer_public)?;
    let shared = curve.mul(&BigInt::from(own_secret.clone()), peer_public)?;
    match shared {
        Point::Identity => Err(KeyExchangeError::DegeneratePoint),
        Point::Affine { x, .. } => Ok(x),
    }
}
