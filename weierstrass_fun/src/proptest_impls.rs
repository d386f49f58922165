//! Proptest strategies for curve values.
//!
//! Points only exist relative to a curve, so these are free functions
//! taking a [`Curve`] rather than [`Arbitrary`] impls.
//!
//! [`Arbitrary`]: proptest::arbitrary::Arbitrary

use crate::{Curve, Point};
use ::proptest::prelude::*;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

/// Strategy over scalars in `[0, n)`, with the boundary values zero,
/// one and `n - 1` weighted in as pathological cases.
pub fn scalar(curve: &Curve) -> BoxedStrategy<BigUint> {
    let n = curve.order().clone();
    let reduced = {
        let n = n.clone();
        any::<u128>().prop_map(move |k| BigUint::from(k) % &n)
    };
    prop_oneof![
        1 => Just(BigUint::zero()),
        1 => Just(BigUint::one()),
        1 => Just(&n - 1u8),
        27 => reduced,
    ]
    .boxed()
}

/// Strategy over non-zero scalars in `[1, n)`.
pub fn nonzero_scalar(curve: &Curve) -> BoxedStrategy<BigUint> {
    let one = BigUint::one();
    scalar(curve)
        .prop_map(move |k| if k.is_zero() { one.clone() } else { k })
        .boxed()
}

/// Strategy over points in the subgroup generated by the curve's
/// generator, including the identity.
pub fn point(curve: &Curve) -> BoxedStrategy<Point> {
    let strategy_curve = curve.clone();
    scalar(curve)
        .prop_map(move |k| {
            strategy_curve
                .mul(&BigInt::from(k), strategy_curve.generator())
                .expect("generator multiples stay in the subgroup")
        })
        .boxed()
}
