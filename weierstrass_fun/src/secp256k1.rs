//! The secp256k1 curve as specified in [_SEC 2: Recommended Elliptic Curve Domain Parameters_].
//!
//! [_SEC 2: Recommended Elliptic Curve Domain Parameters_]: https://www.secg.org/sec2-v2.pdf
use crate::{Curve, FieldElement, Point};
use hex_literal::hex;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_core::RngCore;

/// The field prime `p = 2²⁵⁶ - 2³² - 977` (big-endian).
pub const P: [u8; 32] = hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F");

/// The group order `n` (big-endian).
pub const N: [u8; 32] = hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");

/// The x-coordinate of the generator `G` (big-endian).
pub const G_X: [u8; 32] = hex!("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");

/// The y-coordinate of the generator `G` (big-endian).
pub const G_Y: [u8; 32] = hex!("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8");

/// The secp256k1 curve `y² = x³ + 7` over the field of integers modulo
/// `p = 2²⁵⁶ - 2³² - 977` with a group of prime order
///
/// `n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141`.
///
/// The parameters are computed once in [`new`](Secp256k1::new) and never change. Build one and
/// share it.
///
/// # Example
///
/// Deriving a public key from a secret scalar:
/// ```
/// use weierstrass_fun::{Curve, Secp256k1, num_bigint::BigUint};
/// let secp = Secp256k1::new();
/// let secret_key = BigUint::from(42u32);
/// let public_key = secp.scalar_mul(&secp.generator(), &secret_key)?;
/// assert!(secp.contains(&public_key));
/// # Ok::<(), weierstrass_fun::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Secp256k1 {
    p: BigUint,
    n: BigUint,
    a: FieldElement,
    b: FieldElement,
}

impl Secp256k1 {
    /// Computes the curve parameters.
    pub fn new() -> Self {
        let p = (BigUint::one() << 256u32) - (BigUint::one() << 32u32) - BigUint::from(977u32);
        let n = BigUint::from_bytes_be(&N);
        let a = FieldElement::from_parts(BigUint::zero(), p.clone());
        let b = FieldElement::from_parts(BigUint::from(7u32), p.clone());
        Secp256k1 { p, n, a, b }
    }

    /// The standard generator point `G`.
    pub fn generator(&self) -> Point {
        Point::from_affine(
            self.a.clone(),
            self.b.clone(),
            FieldElement::from_parts(BigUint::from_bytes_be(&G_X), self.p.clone()),
            FieldElement::from_parts(BigUint::from_bytes_be(&G_Y), self.p.clone()),
        )
    }

    /// Samples a scalar uniformly from `[1, n)` using a caller provided random number generator.
    pub fn random_scalar(&self, rng: &mut impl RngCore) -> BigUint {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        let scalar = BigUint::from_bytes_be(&bytes) % &self.n;
        if scalar.is_zero() {
            return self.random_scalar(rng);
        }
        scalar
    }

    /// Samples a point other than the point at infinity by multiplying `G` by a random scalar.
    ///
    /// ```
    /// use weierstrass_fun::{Curve, Secp256k1};
    /// let secp = Secp256k1::new();
    /// let point = secp.random_point(&mut rand::thread_rng());
    /// assert!(secp.contains(&point) && !point.is_identity());
    /// ```
    pub fn random_point(&self, rng: &mut impl RngCore) -> Point {
        let scalar = self.random_scalar(rng);
        self.generator()
            .scalar_mul(&scalar)
            .expect("G is on the curve and every point it produces shares its coefficients")
    }
}

impl Default for Secp256k1 {
    fn default() -> Self {
        Self::new()
    }
}

impl Curve for Secp256k1 {
    fn prime(&self) -> &BigUint {
        &self.p
    }

    fn order(&self) -> &BigUint {
        &self.n
    }

    fn coefficient_a(&self) -> &FieldElement {
        &self.a
    }

    fn coefficient_b(&self) -> &FieldElement {
        &self.b
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;
    use ::proptest::prelude::*;

    fn be(bytes: [u8; 32]) -> BigUint {
        BigUint::from_bytes_be(&bytes)
    }

    #[test]
    fn parameters() {
        let secp = Secp256k1::new();
        assert_eq!(secp.prime(), &be(P));
        assert_eq!(secp.order(), &be(N));
        assert!(secp.coefficient_a().is_zero());
        assert_eq!(secp.coefficient_b().value(), &BigUint::from(7u32));
        assert_eq!(secp.coefficient_b().modulus(), &be(P));
    }

    #[test]
    fn generator_is_on_the_curve() {
        let secp = Secp256k1::new();
        assert_eq!(
            secp.make_point(Some(be(G_X)), Some(be(G_Y))),
            Ok(secp.generator())
        );
    }

    #[test]
    fn order_times_generator_is_identity() {
        let secp = Secp256k1::new();
        let G = secp.generator();
        // the curve reduces n to 0 so go through the point directly as well
        assert!(secp.scalar_mul(&G, secp.order()).unwrap().is_identity());
        assert!(G.scalar_mul(secp.order()).unwrap().is_identity());
    }

    #[test]
    fn order_minus_one_times_generator_is_negation() {
        let secp = Secp256k1::new();
        let G = secp.generator();
        let n_minus_one = secp.order() - BigUint::one();
        assert_eq!(G.scalar_mul(&n_minus_one).unwrap(), G.neg());
    }

    #[test]
    fn make_field_element() {
        let secp = Secp256k1::new();
        assert_eq!(secp.make_field_element(be(P)), Err(Error::OutOfRange));
        assert!(secp.make_field_element(be(P) - BigUint::one()).is_ok());
    }

    #[test]
    fn random_point() {
        let secp = Secp256k1::new();
        let point = secp.random_point(&mut rand::thread_rng());
        let (x, y) = point.coordinates().unwrap();
        assert_eq!(
            secp.make_point(Some(x.value().clone()), Some(y.value().clone())),
            Ok(point)
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn scalar_is_reduced_by_order(k in crate::proptest::secp256k1_scalar()) {
            let secp = Secp256k1::new();
            let G = secp.generator();
            prop_assert_eq!(
                secp.scalar_mul(&G, &(&k + secp.order())).unwrap(),
                secp.scalar_mul(&G, &k).unwrap()
            );
        }

        #[test]
        fn point_plus_negation_is_identity(point in crate::proptest::secp256k1_point()) {
            let secp = Secp256k1::new();
            let identity = secp.make_point(None, None).unwrap();
            prop_assert!(secp.add(&point, &point.neg()).unwrap().is_identity());
            prop_assert_eq!(secp.add(&point, &identity).unwrap(), point);
        }
    }
}
