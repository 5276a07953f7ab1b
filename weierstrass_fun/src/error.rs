//! The error type shared by field, point and curve operations.
use core::fmt;

/// Error returned when an operation is given inputs it cannot compute a
/// meaningful result for.
///
/// None of these are transient: calling the same operation again with the same
/// inputs always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A field element value was not in `[0, modulus)`.
    OutOfRange,
    /// The modulus cannot define a field (it was `0` or `1`).
    InvalidModulus,
    /// Arithmetic between field elements with different moduli.
    FieldMismatch,
    /// Division by (or inversion of) the zero element.
    DivisionByZero,
    /// The coordinates do not satisfy the curve equation or the point's
    /// components are not all in the same field.
    InvalidPoint,
    /// Two points bound to different curve coefficients were combined.
    CurveMismatch,
    /// A curve was asked to operate on a point that belongs to another curve.
    PointNotOnCurve,
    /// Scalar multiplication was requested without a scalar.
    MissingScalar,
    /// A curve was described with a group order of zero.
    InvalidOrder,
    /// The curve coefficients give `4a³ + 27b² = 0` so the curve has a singular point.
    SingularCurve,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;
        match self {
            OutOfRange => write!(f, "field element value is not less than its modulus"),
            InvalidModulus => write!(f, "modulus must be at least 2"),
            FieldMismatch => write!(f, "cannot operate on field elements with different moduli"),
            DivisionByZero => write!(f, "division by zero"),
            InvalidPoint => write!(f, "point is not on the curve"),
            CurveMismatch => write!(f, "points are on different curves"),
            PointNotOnCurve => write!(f, "point does not belong to this curve"),
            MissingScalar => write!(f, "no scalar was given for scalar multiplication"),
            InvalidOrder => write!(f, "curve group order must be non-zero"),
            SingularCurve => write!(f, "curve is singular (4a^3 + 27b^2 = 0)"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
