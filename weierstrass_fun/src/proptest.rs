//! Functions used to generate test data for property-based testing with [`proptest`].
//!
//! [`proptest`]: https://github.com/proptest-rs/proptest
use crate::{Curve, FieldElement, Point, Secp256k1, secp256k1};
use ::proptest::prelude::*;
use num_bigint::BigUint;
use num_traits::One;

prop_compose! {
    /// Generate a random element of the field modulo `modulus`.
    pub fn field_element(modulus: BigUint)(
        bytes in any::<[u8; 32]>(),
    ) -> FieldElement {
        FieldElement::reduce(BigUint::from_bytes_be(&bytes), modulus.clone()).unwrap()
    }
}

prop_compose! {
    /// Generate a random multiple `k * base` for `k` in `[0, 2¹⁶)`.
    ///
    /// On a small curve this covers the whole subgroup `base` generates, point at infinity
    /// included.
    pub fn point_multiple(base: Point)(
        k in any::<u16>(),
    ) -> Point {
        base.scalar_mul(&BigUint::from(k)).unwrap()
    }
}

prop_compose! {
    /// Generate a random secp256k1 scalar in `[1, n)`.
    pub fn secp256k1_scalar()(
        bytes in any::<[u8; 32]>(),
    ) -> BigUint {
        let n = BigUint::from_bytes_be(&secp256k1::N);
        BigUint::from_bytes_be(&bytes) % (n - BigUint::one()) + BigUint::one()
    }
}

prop_compose! {
    /// Generate a random secp256k1 point other than the point at infinity.
    pub fn secp256k1_point()(
        k in secp256k1_scalar(),
    ) -> Point {
        let secp = Secp256k1::new();
        secp.scalar_mul(&secp.generator(), &k).unwrap()
    }
}
