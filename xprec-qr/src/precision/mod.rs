//! Precision type definitions and implementations
//!
//! The decomposition is written once against [`Precision`] and instantiated for
//! `f32`, `f64` and the double-double [`TwoFloatPrecision`].

use approx::AbsDiffEq;
use std::fmt::Debug;

/// Runtime tag for the element type of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    F32,
    F64,
    /// Double-double precision backed by `twofloat`
    TwoFloat,
    I32,
    I64,
}

impl ElementType {
    /// Whether a matrix of this element type can be decomposed
    pub fn is_floating_point(self) -> bool {
        matches!(self, ElementType::F32 | ElementType::F64 | ElementType::TwoFloat)
    }
}

/// Trait for floating-point types the QR decomposition runs in
pub trait Precision:
    Copy
    + Debug
    + Send
    + Sync
    + 'static
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Div<Output = Self>
    + std::ops::Neg<Output = Self>
    + std::cmp::PartialEq
    + std::cmp::PartialOrd
    + num_traits::Zero
    + num_traits::One
{
    /// Tag used by the runtime dispatch layer and in log output
    const ELEMENT_TYPE: ElementType;

    /// Machine epsilon for this precision type
    fn epsilon() -> Self;
    /// Smallest positive normal value
    fn min_positive() -> Self;

    fn from_f64(x: f64) -> Self;
    fn to_f64(self) -> f64;

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;

    #[inline]
    fn max(self, other: Self) -> Self {
        if self >= other { self } else { other }
    }
}

impl Precision for f64 {
    const ELEMENT_TYPE: ElementType = ElementType::F64;

    fn epsilon() -> f64 { f64::EPSILON }
    fn min_positive() -> f64 { f64::MIN_POSITIVE }

    #[inline]
    fn from_f64(x: f64) -> f64 { x }

    #[inline]
    fn to_f64(self) -> f64 { self }

    #[inline]
    fn sqrt(self) -> f64 {
        self.sqrt()
    }

    #[inline]
    fn abs(self) -> f64 {
        self.abs()
    }
}

impl Precision for f32 {
    const ELEMENT_TYPE: ElementType = ElementType::F32;

    fn epsilon() -> f32 { f32::EPSILON }
    fn min_positive() -> f32 { f32::MIN_POSITIVE }

    #[inline]
    fn from_f64(x: f64) -> f32 { x as f32 }

    #[inline]
    fn to_f64(self) -> f64 { self as f64 }

    #[inline]
    fn sqrt(self) -> f32 {
        self.sqrt()
    }

    #[inline]
    fn abs(self) -> f32 {
        self.abs()
    }
}

// TwoFloat wrapper to avoid orphan rule issues
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TwoFloatPrecision(twofloat::TwoFloat);

impl TwoFloatPrecision {
    pub fn new(hi: f64, lo: f64) -> Self {
        Self(twofloat::TwoFloat::new_add(hi, lo))
    }

    pub fn from_f64(x: f64) -> Self {
        Self(twofloat::TwoFloat::from(x))
    }

    pub fn to_f64(self) -> f64 {
        self.0.into()
    }
}

impl Precision for TwoFloatPrecision {
    const ELEMENT_TYPE: ElementType = ElementType::TwoFloat;

    // 2^-104: the unit roundoff of a double-double is roughly the square of f64's
    fn epsilon() -> Self { Self::from_f64(f64::EPSILON * f64::EPSILON) }
    fn min_positive() -> Self { Self::from_f64(f64::MIN_POSITIVE) }

    #[inline]
    fn from_f64(x: f64) -> Self {
        TwoFloatPrecision::from_f64(x)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        TwoFloatPrecision::to_f64(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        Self(self.0.sqrt())
    }

    #[inline]
    fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

impl From<f64> for TwoFloatPrecision {
    fn from(x: f64) -> Self {
        Self::from_f64(x)
    }
}

impl std::ops::Add for TwoFloatPrecision {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl std::ops::Sub for TwoFloatPrecision {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl std::ops::Mul for TwoFloatPrecision {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl std::ops::Div for TwoFloatPrecision {
    type Output = Self;
    fn div(self, other: Self) -> Self {
        Self(self.0 / other.0)
    }
}

impl std::ops::Neg for TwoFloatPrecision {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl num_traits::Zero for TwoFloatPrecision {
    fn zero() -> Self {
        Self(twofloat::TwoFloat::from(0.0))
    }

    fn is_zero(&self) -> bool {
        self.0 == twofloat::TwoFloat::from(0.0)
    }
}

impl num_traits::One for TwoFloatPrecision {
    fn one() -> Self {
        Self(twofloat::TwoFloat::from(1.0))
    }
}

impl AbsDiffEq for TwoFloatPrecision {
    type Epsilon = TwoFloatPrecision;

    fn default_epsilon() -> Self::Epsilon {
        <Self as Precision>::epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        Precision::abs(*self - *other) <= epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_epsilons_are_ordered() {
        assert!(<TwoFloatPrecision as Precision>::epsilon().to_f64() < <f64 as Precision>::epsilon());
        assert!(<f64 as Precision>::epsilon() < <f32 as Precision>::epsilon() as f64);
    }

    #[test]
    fn test_twofloat_sqrt_beyond_f64() {
        let two = TwoFloatPrecision::from_f64(2.0);
        let root = Precision::sqrt(two);
        let residual = root * root - two;
        assert!(Precision::abs(residual).to_f64() < 1e-28);
        assert_abs_diff_eq!(root.to_f64(), std::f64::consts::SQRT_2, epsilon = 1e-15);
    }

    #[test]
    fn test_floating_point_tags() {
        assert!(<f32 as Precision>::ELEMENT_TYPE.is_floating_point());
        assert!(ElementType::TwoFloat.is_floating_point());
        assert!(!ElementType::I32.is_floating_point());
        assert!(!ElementType::I64.is_floating_point());
    }
}
