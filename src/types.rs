//! Strongly-typed numeric primitives for varicon (zero-cost newtypes).
//!
//! Design goals:
//! - No raw `f64` in geometry logic
//! - Viewbox lengths and unitless ratios never mix silently
//! - Division that could hit zero goes through `checked_div`

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Length in viewbox units (the 32×32 authoring space)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Units(pub f64);

impl Units {
    pub const ZERO: Units = Units(0.0);

    /// Create a length (const-friendly, unchecked).
    /// Use `try_new` / `try_positive` for caller-provided values.
    #[inline]
    pub(crate) const fn units(val: f64) -> Units {
        Units(val)
    }

    /// Create a length with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Units, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Units(val))
        }
    }

    /// Create a strictly positive length with validation
    #[inline]
    pub fn try_positive(val: f64) -> Result<Units, NumericError> {
        let len = Units::try_new(val)?;
        if val == 0.0 {
            Err(NumericError::Zero)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(len)
        }
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Checked division returning None if divisor is zero
    #[inline]
    pub fn checked_div(self, rhs: Units) -> Option<Scalar> {
        if rhs.0 == 0.0 {
            None
        } else {
            Some(Scalar(self.0 / rhs.0))
        }
    }

    /// Divide by a ratio, returning None if the ratio is zero
    #[inline]
    pub fn checked_div_scalar(self, rhs: Scalar) -> Option<Units> {
        if rhs.0 == 0.0 {
            None
        } else {
            Some(Units(self.0 / rhs.0))
        }
    }
}

impl Add for Units {
    type Output = Units;
    fn add(self, rhs: Units) -> Units { Units(self.0 + rhs.0) }
}
impl Sub for Units {
    type Output = Units;
    fn sub(self, rhs: Units) -> Units { Units(self.0 - rhs.0) }
}
impl Mul<f64> for Units {
    type Output = Units;
    fn mul(self, rhs: f64) -> Units { Units(self.0 * rhs) }
}
impl Mul<Scalar> for Units {
    type Output = Units;
    fn mul(self, rhs: Scalar) -> Units { Units(self.0 * rhs.0) }
}
impl Div<f64> for Units {
    type Output = Units;
    fn div(self, rhs: f64) -> Units { Units(self.0 / rhs) }
}

// NOTE: Units / Units is intentionally NOT implemented as a trait.
// Use Units::checked_div() which returns Option<Scalar> and handles zero divisor.

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unitless scalar (scale factors, ratios)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Scalar(pub f64);

impl Scalar {
    pub const ZERO: Scalar = Scalar(0.0);
    pub const ONE: Scalar = Scalar(1.0);

    /// Get the raw value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Get the maximum of two scalars
    #[inline]
    pub fn max(self, other: Scalar) -> Scalar {
        Scalar(self.0.max(other.0))
    }
}

impl Mul for Scalar {
    type Output = Scalar;
    fn mul(self, rhs: Scalar) -> Scalar { Scalar(self.0 * rhs.0) }
}
impl Sub for Scalar {
    type Output = Scalar;
    fn sub(self, rhs: Scalar) -> Scalar { Scalar(self.0 - rhs.0) }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A font-weight-like value on the 100–900 axis.
///
/// Any value can be stored; `clamped` brings it into range.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Weight(pub f64);

impl Weight {
    pub const MIN: Weight = Weight(100.0);
    pub const MAX: Weight = Weight(900.0);
    pub const REGULAR: Weight = Weight(400.0);

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Clamp into [MIN, MAX]. NaN becomes REGULAR.
    pub fn clamped(self) -> Weight {
        if self.0.is_nan() {
            Weight::REGULAR
        } else {
            Weight(self.0.clamp(Weight::MIN.0, Weight::MAX.0))
        }
    }
}

impl Default for Weight {
    fn default() -> Self {
        Weight::REGULAR
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        Weight(value)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
