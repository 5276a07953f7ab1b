use crate::{Error, FieldElement};
use core::fmt;
use num_bigint::BigUint;

/// A point on a short Weierstrass curve `y² = x³ + ax + b` over a prime field.
///
/// A point is either the _point at infinity_ (the [_identity element_] of the group) or an
/// affine point `(x, y)` satisfying the curve equation. Either way it carries the curve
/// coefficients `a` and `b` it belongs to, and only points with the same coefficients can be
/// added together.
///
/// Points are only created through constructors that check the curve equation so every `Point`
/// you hold is on its curve. Operations never modify their operands.
///
/// ```
/// use weierstrass_fun::{FieldElement, Point, num_bigint::BigUint};
/// let fe = |v: u32| FieldElement::new(BigUint::from(v), BigUint::from(223u32));
/// let P = Point::new(fe(0)?, fe(7)?, Some(fe(47)?), Some(fe(71)?))?;
/// let Q = P.scalar_mul(&BigUint::from(5u32))?;
/// assert_eq!(Q.x(), Some(&fe(126)?));
/// assert_eq!(Q.y(), Some(&fe(96)?));
/// # Ok::<(), weierstrass_fun::Error>(())
/// ```
///
/// This is a straightforward variable time affine implementation. Nothing about it is
/// constant-time so it leaks information about the scalars it multiplies by.
///
/// [_identity element_]: https://en.wikipedia.org/wiki/Identity_element
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Point {
    a: FieldElement,
    b: FieldElement,
    coordinates: Coordinates,
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
enum Coordinates {
    Infinity,
    Affine { x: FieldElement, y: FieldElement },
}

impl Point {
    /// Creates a point on the curve with coefficients `a` and `b`.
    ///
    /// If `x` and `y` are both `None` the result is the point at infinity. Otherwise both must be
    /// given, all four field elements must be in the same field and `y² = x³ + ax + b` must hold.
    /// If not, it returns [`Error::InvalidPoint`].
    pub fn new(
        a: FieldElement,
        b: FieldElement,
        x: Option<FieldElement>,
        y: Option<FieldElement>,
    ) -> Result<Self, Error> {
        let (x, y) = match (x, y) {
            (None, None) => return Self::identity(a, b),
            (Some(x), Some(y)) => (x, y),
            _ => {
                tracing::debug!("point rejected: only one coordinate was given");
                return Err(Error::InvalidPoint);
            }
        };

        if !(a.same_field(&b) && a.same_field(&x) && a.same_field(&y)) {
            tracing::debug!("point rejected: coordinates and coefficients are in different fields");
            return Err(Error::InvalidPoint);
        }

        if !satisfies_curve_equation(&a, &b, &x, &y)? {
            tracing::debug!(x = %x, y = %y, "point rejected: not on the curve");
            return Err(Error::InvalidPoint);
        }

        Ok(Self::from_affine(a, b, x, y))
    }

    /// Returns the point at infinity of the curve with coefficients `a` and `b`.
    ///
    /// The coefficients must be in the same field.
    pub fn identity(a: FieldElement, b: FieldElement) -> Result<Self, Error> {
        if !a.same_field(&b) {
            return Err(Error::InvalidPoint);
        }
        Ok(Point {
            a,
            b,
            coordinates: Coordinates::Infinity,
        })
    }

    /// Assembles an affine point without checking the curve equation.
    pub(crate) fn from_affine(
        a: FieldElement,
        b: FieldElement,
        x: FieldElement,
        y: FieldElement,
    ) -> Self {
        Point {
            a,
            b,
            coordinates: Coordinates::Affine { x, y },
        }
    }

    fn to_identity(&self) -> Self {
        Point {
            a: self.a.clone(),
            b: self.b.clone(),
            coordinates: Coordinates::Infinity,
        }
    }

    /// The `a` coefficient of the curve this point is on.
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// The `b` coefficient of the curve this point is on.
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// Returns true if this point is the point at infinity.
    pub fn is_identity(&self) -> bool {
        matches!(self.coordinates, Coordinates::Infinity)
    }

    /// The affine coordinates `(x, y)` or `None` for the point at infinity.
    pub fn coordinates(&self) -> Option<(&FieldElement, &FieldElement)> {
        match &self.coordinates {
            Coordinates::Infinity => None,
            Coordinates::Affine { x, y } => Some((x, y)),
        }
    }

    /// The x-coordinate or `None` for the point at infinity.
    pub fn x(&self) -> Option<&FieldElement> {
        self.coordinates().map(|(x, _)| x)
    }

    /// The y-coordinate or `None` for the point at infinity.
    pub fn y(&self) -> Option<&FieldElement> {
        self.coordinates().map(|(_, y)| y)
    }

    /// Returns true if `other` is on the same curve as `self`.
    pub fn same_curve(&self, other: &Point) -> bool {
        self.a == other.a && self.b == other.b
    }

    /// Adds two points on the same curve.
    ///
    /// Returns [`Error::CurveMismatch`] if `other` has different curve coefficients.
    pub fn add(&self, other: &Point) -> Result<Point, Error> {
        if !self.same_curve(other) {
            return Err(Error::CurveMismatch);
        }

        let ((x1, y1), (x2, y2)) = match (self.coordinates(), other.coordinates()) {
            (None, _) => return Ok(other.clone()),
            (_, None) => return Ok(self.clone()),
            (Some(p), Some(q)) => (p, q),
        };

        let slope = if x1 != x2 {
            // chord through two distinct points
            y2.sub(y1)?.div(&x2.sub(x1)?)?
        } else if y1 != y2 || y1.is_zero() {
            // P + (-P), or doubling a point whose tangent is vertical
            return Ok(self.to_identity());
        } else {
            // tangent
            let numerator = x1.mul(x1)?.scalar_mul(3).add(&self.a)?;
            numerator.div(&y1.scalar_mul(2))?
        };

        let x3 = slope.mul(&slope)?.sub(x1)?.sub(x2)?;
        let y3 = slope.mul(&x1.sub(&x3)?)?.sub(y1)?;

        Ok(Self::from_affine(self.a.clone(), self.b.clone(), x3, y3))
    }

    /// Returns the negation of the point, `(x, -y)`. The point at infinity is its own negation.
    pub fn neg(&self) -> Point {
        match &self.coordinates {
            Coordinates::Infinity => self.clone(),
            Coordinates::Affine { x, y } => {
                Self::from_affine(self.a.clone(), self.b.clone(), x.clone(), y.neg())
            }
        }
    }

    /// Computes `self - other`.
    pub fn sub(&self, other: &Point) -> Result<Point, Error> {
        self.add(&other.neg())
    }

    /// Multiplies the point by `scalar` using double-and-add over its bits from the least
    /// significant upwards.
    ///
    /// The scalar is used as is. If you want it reduced by the group order do it first or go
    /// through [`Curve::scalar_mul`].
    ///
    /// [`Curve::scalar_mul`]: crate::Curve::scalar_mul
    pub fn scalar_mul(&self, scalar: &BigUint) -> Result<Point, Error> {
        let bits = scalar.bits();
        tracing::trace!(bits, "scalar multiplication");
        let mut result = self.to_identity();
        let mut current = self.clone();

        for i in 0..bits {
            if scalar.bit(i) {
                result = result.add(&current)?;
            }
            // the doubling after the top bit would never be used
            if i + 1 < bits {
                current = current.add(&current)?;
            }
        }

        Ok(result)
    }

    /// Multiplies the point by a scalar given as big-endian bytes.
    ///
    /// Returns [`Error::MissingScalar`] if `bytes` is empty.
    ///
    /// ```
    /// use weierstrass_fun::{Error, FieldElement, Point, num_bigint::BigUint};
    /// let fe = |v: u32| FieldElement::new(BigUint::from(v), BigUint::from(223u32));
    /// let P = Point::new(fe(0)?, fe(7)?, Some(fe(47)?), Some(fe(71)?))?;
    /// assert_eq!(P.scalar_mul_be_bytes(&[0x0a])?, P.scalar_mul(&BigUint::from(10u32))?);
    /// assert_eq!(P.scalar_mul_be_bytes(&[]), Err(Error::MissingScalar));
    /// # Ok::<(), weierstrass_fun::Error>(())
    /// ```
    pub fn scalar_mul_be_bytes(&self, bytes: &[u8]) -> Result<Point, Error> {
        if bytes.is_empty() {
            return Err(Error::MissingScalar);
        }
        self.scalar_mul(&BigUint::from_bytes_be(bytes))
    }
}

fn satisfies_curve_equation(
    a: &FieldElement,
    b: &FieldElement,
    x: &FieldElement,
    y: &FieldElement,
) -> Result<bool, Error> {
    let lhs = y.mul(y)?;
    let rhs = x.mul(x)?.mul(x)?.add(&a.mul(x)?)?.add(b)?;
    Ok(lhs == rhs)
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coordinates {
            Coordinates::Infinity => write!(f, "Point(infinity)"),
            Coordinates::Affine { x, y } => write!(f, "Point({}, {})", x.value(), y.value()),
        }
    }
}
