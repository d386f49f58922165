//! Arithmetic in the prime field ℤ/pℤ.
//!
//! Everything a curve operation needs from the field is addition,
//! subtraction, multiplication and reduction, which `num_bigint`
//! already provides. The two things it does not are collected here:
//! normalizing a signed value into `[0, p)` and computing a modular
//! inverse, the only place division happens in this crate.

use crate::Error;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Reduce a signed value into the canonical range `[0, p)`.
///
/// Uses floor division so negative inputs wrap around rather than
/// truncate towards zero: `normalize(-1, p) == p - 1`.
pub fn normalize(v: &BigInt, p: &BigUint) -> BigUint {
    let p = BigInt::from(p.clone());
    v.mod_floor(&p).magnitude().clone()
}

/// Compute the multiplicative inverse of `k` modulo the odd prime `p`.
///
/// Runs the extended Euclidean algorithm on `(k mod p, p)` tracking
/// Bézout coefficients, so that the returned `x` satisfies
/// `(k * x) mod p == 1`. The result is always in `[0, p)`; a negative
/// `k` inverts as `p - inverse(-k, p)`.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] when `k ≡ 0 (mod p)`, which has
/// no inverse.
///
/// # Example
///
/// ```
/// use num_bigint::BigInt;
/// use num_bigint::BigUint;
/// use weierstrass_fun::field;
///
/// let p = BigUint::from(17u8);
/// let inv = field::inverse(&BigInt::from(5), &p).unwrap();
/// assert_eq!((BigUint::from(5u8) * inv) % p, BigUint::from(1u8));
/// ```
pub fn inverse(k: &BigInt, p: &BigUint) -> Result<BigUint, Error> {
    if k.is_negative() {
        return Ok(p - inverse(&-k, p)?);
    }

    let k = normalize(k, p);
    if k.is_zero() {
        return Err(Error::DivisionByZero);
    }

    // Invariant: old_r = old_s * k (mod p) and r = s * k (mod p).
    // When r hits zero, old_r = gcd(k, p) = 1 and old_s is the inverse
    // up to sign.
    let mut old_r = BigInt::from(k);
    let mut r = BigInt::from(p.clone());
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();

    while !r.is_zero() {
        let quotient = &old_r / &r;
        let next_r = &old_r - &quotient * &r;
        let next_s = &old_s - &quotient * &s;
        old_r = core::mem::replace(&mut r, next_r);
        old_s = core::mem::replace(&mut s, next_s);
    }

    Ok(normalize(&old_s, p))
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    fn check_inverse(k: i64, p: u64) {
        let p = BigUint::from(p);
        let inv = inverse(&BigInt::from(k), &p).unwrap();
        assert!(inv < p);
        let product = normalize(&(BigInt::from(k) * BigInt::from(inv)), &p);
        assert_eq!(product, BigUint::one());
    }

    #[test]
    fn small_primes() {
        for p in [3u64, 5, 17, 97, 65537] {
            for k in 1..core::cmp::min(p, 50) {
                check_inverse(k as i64, p);
            }
        }
    }

    #[test]
    fn negative_input_normalizes() {
        check_inverse(-7, 17);
        let p = BigUint::from(17u8);
        let pos = inverse(&BigInt::from(7), &p).unwrap();
        let neg = inverse(&BigInt::from(-7), &p).unwrap();
        assert_eq!(neg, &p - pos);
    }

    #[test]
    fn zero_has_no_inverse() {
        for p in [3u64, 17, 65537] {
            let p = BigUint::from(p);
            assert_eq!(inverse(&BigInt::zero(), &p), Err(Error::DivisionByZero));
            // multiples of p are zero in the field too
            let kp = BigInt::from(p.clone()) * 3;
            assert_eq!(inverse(&kp, &p), Err(Error::DivisionByZero));
        }
    }

    proptest! {
        #[test]
        fn inverse_roundtrips(k in 1u64..u64::MAX) {
            // the Mersenne prime 2^61 - 1
            let p = (BigUint::one() << 61u32) - 1u8;
            let k = BigInt::from(k) % BigInt::from(p.clone());
            prop_assume!(!k.is_zero());
            let inv = inverse(&k, &p).unwrap();
            let product = normalize(&(k * BigInt::from(inv)), &p);
            prop_assert_eq!(product, BigUint::one());
        }
    }
}
