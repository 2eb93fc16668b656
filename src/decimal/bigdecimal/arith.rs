//! Exact decimal arithmetic: addition, subtraction, multiplication.
//!
//! Addition aligns both operands to the larger scale by scaling the
//! other coefficient up by the matching power of ten; with base-10⁹
//! words that is a word shift plus at most one small multiply. The
//! aligned scale is kept on the result even when trailing zeros appear,
//! and multiplication adds the scales without any rounding. Rounding is
//! something the caller asks for explicitly.

use super::core::BigDecimal;
use crate::integer::{BigInt, BigUint};

/// Scales a coefficient up by `10^exp`.
pub(crate) fn scale_coefficient(c: &BigInt, exp: usize) -> BigInt {
    if exp == 0 || c.is_zero() {
        return c.clone();
    }
    BigInt::new(
        c.magnitude() * &BigUint::power_of_ten(exp),
        c.is_negative(),
    )
}

impl BigDecimal {
    /// Aligned coefficients of `self` and `rhs` at their common scale.
    pub(crate) fn aligned(&self, rhs: &Self) -> (BigInt, BigInt, u32) {
        let scale = self.scale.max(rhs.scale);
        let a = scale_coefficient(&self.coefficient, (scale - self.scale) as usize);
        let b = scale_coefficient(&rhs.coefficient, (scale - rhs.scale) as usize);
        (a, b, scale)
    }

    /// Exact sum at the larger of the two scales.
    pub fn add(&self, rhs: &Self) -> Self {
        let (a, b, scale) = self.aligned(rhs);
        BigDecimal {
            coefficient: &a + &b,
            scale,
        }
    }

    /// Exact difference at the larger of the two scales.
    pub fn sub(&self, rhs: &Self) -> Self {
        let (a, b, scale) = self.aligned(rhs);
        BigDecimal {
            coefficient: &a - &b,
            scale,
        }
    }

    /// Exact product; the scales add.
    pub fn mul(&self, rhs: &Self) -> Self {
        BigDecimal {
            coefficient: &self.coefficient * &rhs.coefficient,
            scale: self.scale + rhs.scale,
        }
    }

    /// Negation.
    pub fn negate(&self) -> Self {
        BigDecimal {
            coefficient: -&self.coefficient,
            scale: self.scale,
        }
    }
}
