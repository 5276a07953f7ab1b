//! Arithmetic in prime fields (integers modulo a prime `p`).
use crate::Error;
use alloc::vec;
use core::fmt;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand_core::RngCore;

/// An integer modulo a prime `p` together with `p` itself.
///
/// The value is always fully reduced: `0 <= value < modulus`. Every operation
/// returns a freshly allocated element and leaves its operands untouched.
///
/// Binary operations are only defined between elements of the same field. Mixing
/// moduli is an [`Error::FieldMismatch`] rather than an answer in one field or the
/// other.
///
/// ```
/// use weierstrass_fun::{FieldElement, num_bigint::BigUint};
/// let p = BigUint::from(19u32);
/// let a = FieldElement::new(BigUint::from(2u32), p.clone())?;
/// let b = FieldElement::new(BigUint::from(7u32), p.clone())?;
/// assert_eq!(a.div(&b)?, FieldElement::new(BigUint::from(3u32), p)?);
/// # Ok::<(), weierstrass_fun::Error>(())
/// ```
///
/// The modulus is assumed to be prime. Nothing checks this; [`div`], [`invert`]
/// and [`pow`] with negative exponents are only correct when it is.
///
/// [`div`]: Self::div
/// [`invert`]: Self::invert
/// [`pow`]: Self::pow
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FieldElement {
    value: BigUint,
    modulus: BigUint,
}

fn check_modulus(modulus: &BigUint) -> Result<(), Error> {
    if *modulus < BigUint::from(2u32) {
        return Err(Error::InvalidModulus);
    }
    Ok(())
}

impl FieldElement {
    /// Creates the element `value` of the field modulo `modulus`.
    ///
    /// Returns [`Error::OutOfRange`] unless `value < modulus`. Note that `value ==
    /// modulus` is rejected as well; use [`reduce`] if the value is not already
    /// reduced.
    ///
    /// [`reduce`]: Self::reduce
    pub fn new(value: BigUint, modulus: BigUint) -> Result<Self, Error> {
        check_modulus(&modulus)?;
        if value >= modulus {
            return Err(Error::OutOfRange);
        }
        Ok(Self::from_parts(value, modulus))
    }

    /// Creates the element `value mod modulus`.
    pub fn reduce(value: BigUint, modulus: BigUint) -> Result<Self, Error> {
        check_modulus(&modulus)?;
        Ok(Self::from_parts(value % &modulus, modulus))
    }

    /// The additive identity of the field modulo `modulus`.
    pub fn zero(modulus: BigUint) -> Result<Self, Error> {
        Self::new(BigUint::zero(), modulus)
    }

    /// The multiplicative identity of the field modulo `modulus`.
    pub fn one(modulus: BigUint) -> Result<Self, Error> {
        Self::new(BigUint::one(), modulus)
    }

    /// Samples an element of the field modulo `modulus` from a caller provided random number
    /// generator.
    ///
    /// # Example
    /// ```
    /// use weierstrass_fun::{FieldElement, num_bigint::BigUint};
    /// let p = BigUint::from(223u32);
    /// let x = FieldElement::random(&mut rand::thread_rng(), p.clone()).unwrap();
    /// assert_eq!(x.modulus(), &p);
    /// ```
    pub fn random(rng: &mut impl RngCore, modulus: BigUint) -> Result<Self, Error> {
        check_modulus(&modulus)?;
        // sixteen extra bytes make the bias from reducing negligible
        let mut bytes = vec![0u8; (modulus.bits() as usize).div_ceil(8) + 16];
        rng.fill_bytes(&mut bytes);
        Self::reduce(BigUint::from_bytes_be(&bytes), modulus)
    }

    /// Assembles an element without checking `value < modulus`.
    pub(crate) fn from_parts(value: BigUint, modulus: BigUint) -> Self {
        FieldElement { value, modulus }
    }

    fn with_value(&self, value: BigUint) -> Self {
        Self::from_parts(value, self.modulus.clone())
    }

    fn check_same_field(&self, other: &Self) -> Result<(), Error> {
        if self.modulus != other.modulus {
            return Err(Error::FieldMismatch);
        }
        Ok(())
    }

    /// The canonical representative of this element, in `[0, modulus)`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// The modulus of the field this element belongs to.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Returns true if this is the zero element.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Returns true if `other` is in the same field as `self`.
    pub fn same_field(&self, other: &Self) -> bool {
        self.modulus == other.modulus
    }

    /// Computes `self + rhs`.
    pub fn add(&self, rhs: &Self) -> Result<Self, Error> {
        self.check_same_field(rhs)?;
        Ok(self.with_value((&self.value + &rhs.value) % &self.modulus))
    }

    /// Computes `self - rhs`.
    pub fn sub(&self, rhs: &Self) -> Result<Self, Error> {
        self.check_same_field(rhs)?;
        // rhs.value < modulus so this never underflows
        Ok(self.with_value((&self.value + &self.modulus - &rhs.value) % &self.modulus))
    }

    /// Computes `self * rhs`.
    pub fn mul(&self, rhs: &Self) -> Result<Self, Error> {
        self.check_same_field(rhs)?;
        Ok(self.with_value((&self.value * &rhs.value) % &self.modulus))
    }

    /// Computes `self / rhs`, i.e. `self * rhs^(p-2)`.
    ///
    /// Returns [`Error::DivisionByZero`] if `rhs` is zero.
    pub fn div(&self, rhs: &Self) -> Result<Self, Error> {
        self.check_same_field(rhs)?;
        self.mul(&rhs.invert()?)
    }

    /// Computes the additive inverse `-self`.
    pub fn neg(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        self.with_value(&self.modulus - &self.value)
    }

    /// Computes the multiplicative inverse `self^(p-2)` using Fermat's little theorem.
    ///
    /// Returns [`Error::DivisionByZero`] if `self` is zero.
    pub fn invert(&self) -> Result<Self, Error> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let exponent = &self.modulus - BigUint::from(2u32);
        Ok(self.with_value(self.value.modpow(&exponent, &self.modulus)))
    }

    /// Multiplies the element by an ordinary integer `k` which need not be reduced and may be
    /// negative.
    ///
    /// ```
    /// use weierstrass_fun::{FieldElement, num_bigint::BigUint};
    /// let p = BigUint::from(13u32);
    /// let x = FieldElement::new(BigUint::from(5u32), p.clone())?;
    /// assert_eq!(x.scalar_mul(3), FieldElement::new(BigUint::from(2u32), p.clone())?);
    /// assert_eq!(x.scalar_mul(-1), x.neg());
    /// # Ok::<(), weierstrass_fun::Error>(())
    /// ```
    pub fn scalar_mul(&self, k: impl Into<BigInt>) -> Self {
        let modulus = BigInt::from(self.modulus.clone());
        let k = k.into().mod_floor(&modulus);
        self.with_value((&self.value * k.magnitude()) % &self.modulus)
    }

    /// Raises the element to the power `exponent` which may be negative.
    ///
    /// For a non-zero element the exponent is first reduced modulo `p - 1`, the order of the
    /// multiplicative group, so `x.pow(-1)` is the inverse of `x`. The zero element raised to a
    /// negative power is [`Error::DivisionByZero`]; to a positive power it is zero and to the
    /// zeroth power it is one.
    ///
    /// ```
    /// use weierstrass_fun::{FieldElement, num_bigint::BigUint};
    /// let p = BigUint::from(13u32);
    /// let x = FieldElement::new(BigUint::from(3u32), p.clone())?;
    /// assert_eq!(x.pow(3)?, FieldElement::one(p.clone())?);
    /// assert_eq!(x.pow(-16)?, FieldElement::new(BigUint::from(9u32), p)?);
    /// # Ok::<(), weierstrass_fun::Error>(())
    /// ```
    pub fn pow(&self, exponent: impl Into<BigInt>) -> Result<Self, Error> {
        let exponent = exponent.into();
        if self.is_zero() {
            return match exponent.sign() {
                Sign::Minus => Err(Error::DivisionByZero),
                Sign::NoSign => Ok(self.with_value(BigUint::one())),
                Sign::Plus => Ok(self.clone()),
            };
        }
        let group_order = BigInt::from(&self.modulus - BigUint::one());
        let exponent = exponent.mod_floor(&group_order);
        Ok(self.with_value(self.value.modpow(exponent.magnitude(), &self.modulus)))
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.value, self.modulus)
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({} mod {})", self.value, self.modulus)
    }
}
