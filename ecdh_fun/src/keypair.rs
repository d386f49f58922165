use crate::KeyExchangeError;
use crate::fun::num_bigint::{BigInt, BigUint};
use crate::fun::rand_core::RngCore;
use crate::fun::{Curve, Point};

/// A secret and public key pair on a particular curve.
///
/// The secret key is a scalar drawn uniformly from `[1, n-1]` and the
/// public key is the point obtained by multiplying the curve's
/// generator by it. The secret stays with the generating party; the
/// public point is meant to be shared.
///
/// A `KeyPair` can only be created through [`KeyPair::random`] or
/// [`KeyPair::from_secret`], which derive the public point from the
/// secret, so the two halves can never disagree. It deliberately does
/// not deserialize: share [`public_key`] (a [`Point`]) and keep the
/// secret where it was generated.
///
/// ```
/// use ecdh_fun::KeyPair;
/// use ecdh_fun::fun::Curve;
/// let curve = Curve::secp256k1();
/// let my_keypair = KeyPair::random(&curve, &mut rand::thread_rng()).unwrap();
/// ```
///
/// [`public_key`]: KeyPair::public_key
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    sk: BigUint,
    pk: Point,
}

impl KeyPair {
    /// Generate a keypair on `curve` from the supplied random number
    /// generator.
    ///
    /// The generator is injected rather than hardcoded: key material
    /// needs a cryptographically secure source (`rand::rngs::OsRng`),
    /// while tests can pass a seeded `ChaCha20Rng` and get
    /// reproducible keypairs. Nothing here can tell the difference.
    ///
    /// # Errors
    ///
    /// Propagates [`fun::Error`] as [`KeyExchangeError::Curve`] if the
    /// derivation hits degenerate arithmetic, which cannot happen on a
    /// prime-order subgroup such as secp256k1's.
    ///
    /// [`fun::Error`]: crate::fun::Error
    pub fn random<R: RngCore>(curve: &Curve, rng: &mut R) -> Result<Self, KeyExchangeError> {
        let sk = curve.random_scalar(rng);
        Self::from_secret(curve, sk)
    }

    /// Build the keypair for a known secret scalar.
    ///
    /// # Errors
    ///
    /// [`KeyExchangeError::DegeneratePoint`] when `secret · g` is the
    /// identity (the scalar is a multiple of the subgroup order), and
    /// [`KeyExchangeError::Curve`] for degenerate arithmetic.
    pub fn from_secret(curve: &Curve, secret: BigUint) -> Result<Self, KeyExchangeError> {
        let pk = curve.mul(&BigInt::from(secret.clone()), curve.generator())?;
        if pk.is_identity() {
            return Err(KeyExchangeError::DegeneratePoint);
        }
        Ok(KeyPair { sk: secret, pk })
    }

    /// Returns a reference to the secret key.
    pub fn secret_key(&self) -> &BigUint {
        &self.sk
    }

    /// The public key.
    pub fn public_key(&self) -> &Point {
        &self.pk
    }

    /// Gets a reference to the keypair as a tuple.
    ///
    /// # Example
    /// ```
    /// use ecdh_fun::KeyPair;
    /// use ecdh_fun::fun::Curve;
    /// let curve = Curve::secp256k1();
    /// let keypair = KeyPair::random(&curve, &mut rand::thread_rng()).unwrap();
    /// let (secret_key, public_key) = keypair.as_tuple();
    /// ```
    pub fn as_tuple(&self) -> (&BigUint, &Point) {
        (&self.sk, &self.pk)
    }
}
