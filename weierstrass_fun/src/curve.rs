//! The [`Curve`] trait and a curve with caller supplied parameters.
use crate::{Error, FieldElement, Point};
use num_bigint::BigUint;
use num_traits::Zero;

/// A short Weierstrass curve `y² = x³ + ax + b` over the prime field modulo [`prime`] whose
/// points form a group of order [`order`].
///
/// Implementors only need to supply the parameters. The provided methods build field elements
/// and points bound to the curve and check that points handed to [`add`] and [`scalar_mul`] are
/// on this curve (have its coefficients) before doing the group operation.
///
/// The trait is object safe so code can work with a `&dyn Curve` without knowing which curve it
/// has.
///
/// ```
/// use weierstrass_fun::{Curve, Secp256k1, WeierstrassCurve, num_bigint::BigUint};
/// let toy = WeierstrassCurve::new(
///     BigUint::from(223u32),
///     BigUint::from(21u32),
///     BigUint::from(0u32),
///     BigUint::from(7u32),
/// )?;
/// let curves: [&dyn Curve; 2] = [&toy, &Secp256k1::new()];
/// for curve in curves {
///     let identity = curve.make_point(None, None)?;
///     assert!(curve.contains(&identity));
/// }
/// # Ok::<(), weierstrass_fun::Error>(())
/// ```
///
/// [`prime`]: Curve::prime
/// [`order`]: Curve::order
/// [`add`]: Curve::add
/// [`scalar_mul`]: Curve::scalar_mul
pub trait Curve {
    /// The prime modulus of the field the coordinates are in.
    fn prime(&self) -> &BigUint;

    /// The order of the group of points (or of the subgroup scalars are reduced by).
    fn order(&self) -> &BigUint;

    /// The `a` coefficient.
    fn coefficient_a(&self) -> &FieldElement;

    /// The `b` coefficient.
    fn coefficient_b(&self) -> &FieldElement;

    /// Creates a field element modulo [`prime`](Curve::prime).
    fn make_field_element(&self, value: BigUint) -> Result<FieldElement, Error> {
        FieldElement::new(value, self.prime().clone())
    }

    /// Creates a point on the curve from integer coordinates.
    ///
    /// If `x` is `None` this is the point at infinity. Otherwise both coordinates must be less
    /// than the prime and satisfy the curve equation.
    fn make_point(&self, x: Option<BigUint>, y: Option<BigUint>) -> Result<Point, Error> {
        let a = self.coefficient_a().clone();
        let b = self.coefficient_b().clone();
        match x {
            None => Point::new(a, b, None, None),
            Some(x) => {
                let x = self.make_field_element(x)?;
                let y = y.map(|y| self.make_field_element(y)).transpose()?;
                Point::new(a, b, Some(x), y)
            }
        }
    }

    /// Returns true if `point` has this curve's coefficients.
    fn contains(&self, point: &Point) -> bool {
        point.a() == self.coefficient_a() && point.b() == self.coefficient_b()
    }

    /// Multiplies `point` by `scalar` reduced modulo the [`order`](Curve::order).
    ///
    /// Returns [`Error::PointNotOnCurve`] if the point belongs to a different curve.
    fn scalar_mul(&self, point: &Point, scalar: &BigUint) -> Result<Point, Error> {
        if !self.contains(point) {
            tracing::debug!(point = %point, "scalar multiplication rejected: point is on another curve");
            return Err(Error::PointNotOnCurve);
        }
        point.scalar_mul(&(scalar % self.order()))
    }

    /// Adds two points on this curve.
    ///
    /// Returns [`Error::PointNotOnCurve`] if either point belongs to a different curve.
    fn add(&self, p: &Point, q: &Point) -> Result<Point, Error> {
        if !self.contains(p) || !self.contains(q) {
            tracing::debug!(p = %p, q = %q, "addition rejected: point is on another curve");
            return Err(Error::PointNotOnCurve);
        }
        p.add(q)
    }
}

/// A short Weierstrass curve with parameters chosen at runtime.
///
/// Useful for the small curves in textbooks and tests. For secp256k1 use
/// [`Secp256k1`](crate::Secp256k1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeierstrassCurve {
    prime: BigUint,
    order: BigUint,
    a: FieldElement,
    b: FieldElement,
}

impl WeierstrassCurve {
    /// Describes the curve `y² = x³ + ax + b` modulo `prime` where scalars are reduced modulo
    /// `order`.
    ///
    /// `a` and `b` must already be reduced ([`Error::OutOfRange`]), `order` must be non-zero
    /// ([`Error::InvalidOrder`]) and the curve must not be singular ([`Error::SingularCurve`]).
    /// Neither the primality of `prime` nor the correctness of `order` is checked.
    pub fn new(prime: BigUint, order: BigUint, a: BigUint, b: BigUint) -> Result<Self, Error> {
        let a = FieldElement::new(a, prime.clone())?;
        let b = FieldElement::new(b, prime.clone())?;
        if order.is_zero() {
            return Err(Error::InvalidOrder);
        }

        let discriminant = a
            .mul(&a)?
            .mul(&a)?
            .scalar_mul(4)
            .add(&b.mul(&b)?.scalar_mul(27))?;
        if discriminant.is_zero() {
            return Err(Error::SingularCurve);
        }

        Ok(WeierstrassCurve { prime, order, a, b })
    }
}

impl Curve for WeierstrassCurve {
    fn prime(&self) -> &BigUint {
        &self.prime
    }

    fn order(&self) -> &BigUint {
        &self.order
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

    fn n(value: u32) -> BigUint {
        BigUint::from(value)
    }

    fn toy_curve() -> WeierstrassCurve {
        WeierstrassCurve::new(n(223), n(21), n(0), n(7)).unwrap()
    }

    #[test]
    fn construction_checks() {
        assert_eq!(
            WeierstrassCurve::new(n(223), n(21), n(223), n(7)),
            Err(Error::OutOfRange)
        );
        assert_eq!(
            WeierstrassCurve::new(n(223), n(0), n(0), n(7)),
            Err(Error::InvalidOrder)
        );
        assert_eq!(
            WeierstrassCurve::new(n(223), n(21), n(0), n(0)),
            Err(Error::SingularCurve)
        );
        // y² = x³ - 3x + 2 = (x - 1)²(x + 2)
        assert_eq!(
            WeierstrassCurve::new(n(223), n(21), n(220), n(2)),
            Err(Error::SingularCurve)
        );
        assert_eq!(
            WeierstrassCurve::new(n(1), n(21), n(0), n(0)),
            Err(Error::InvalidModulus)
        );
    }

    #[test]
    fn make_point() {
        let curve = toy_curve();
        let p = curve.make_point(Some(n(47)), Some(n(71))).unwrap();
        assert_eq!(p.x().map(FieldElement::value), Some(&n(47)));
        assert!(curve.make_point(None, None).unwrap().is_identity());
        // y is ignored when there is no x
        assert!(curve.make_point(None, Some(n(71))).unwrap().is_identity());
        assert_eq!(
            curve.make_point(Some(n(47)), None),
            Err(Error::InvalidPoint)
        );
        assert_eq!(
            curve.make_point(Some(n(47)), Some(n(72))),
            Err(Error::InvalidPoint)
        );
        assert_eq!(
            curve.make_point(Some(n(223)), Some(n(71))),
            Err(Error::OutOfRange)
        );
    }

    #[test]
    fn scalar_mul_reduces_by_order() {
        let curve = toy_curve();
        let p = curve.make_point(Some(n(47)), Some(n(71))).unwrap();
        assert_eq!(
            curve.scalar_mul(&p, &n(26)).unwrap(),
            curve.make_point(Some(n(126)), Some(n(96))).unwrap()
        );
        assert!(curve.scalar_mul(&p, &n(21)).unwrap().is_identity());
        // the point itself doesn't reduce
        assert_eq!(p.scalar_mul(&n(26)), curve.scalar_mul(&p, &n(5)));
    }

    #[test]
    fn rejects_foreign_points() {
        let curve = toy_curve();
        let other = WeierstrassCurve::new(n(223), n(21), n(5), n(7)).unwrap();
        let ours = curve.make_point(Some(n(47)), Some(n(71))).unwrap();
        let theirs = other.make_point(Some(n(2)), Some(n(5))).unwrap();

        assert_eq!(curve.add(&ours, &theirs), Err(Error::PointNotOnCurve));
        assert_eq!(curve.add(&theirs, &ours), Err(Error::PointNotOnCurve));
        assert_eq!(curve.scalar_mul(&theirs, &n(2)), Err(Error::PointNotOnCurve));
        let their_identity = other.make_point(None, None).unwrap();
        assert_eq!(
            curve.add(&ours, &their_identity),
            Err(Error::PointNotOnCurve)
        );
        assert!(other.add(&theirs, &their_identity).is_ok());
    }

    #[test]
    fn add() {
        let curve = WeierstrassCurve::new(n(223), n(21), n(5), n(7)).unwrap();
        let p = curve.make_point(Some(n(2)), Some(n(5))).unwrap();
        let q = curve.make_point(Some(n(222)), Some(n(222))).unwrap();
        assert_eq!(
            curve.add(&p, &q).unwrap(),
            curve.make_point(Some(n(3)), Some(n(216))).unwrap()
        );
    }
}
