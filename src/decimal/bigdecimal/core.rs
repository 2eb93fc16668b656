//! The decimal value type: a signed coefficient and a scale.
//!
//! A `BigDecimal` is `coefficient * 10^(-scale)` with a non-negative
//! scale, so `1.23` is coefficient 123 at scale 2. Trailing zeros in the
//! coefficient are significant and survive arithmetic: `1.50 + 0.25` is
//! `1.75` at scale 2, and `2.0 * 3.0` is `6.00` at scale 2. Working
//! precision is a per-operation argument, never part of the value.

use crate::integer::{BigInt, BigUint};

/// Largest representable scale. Parsing rejects exponents that would
/// push past it; coefficients large enough to matter here would not fit
/// in memory anyway.
pub const MAX_SCALE: u32 = i32::MAX as u32;

/// Arbitrary-precision decimal number.
///
/// Immutable once built; operations return fresh values. Equality and
/// ordering are numeric, so `1.0 == 1.00` even though the two render
/// differently.
#[derive(Clone, Debug)]
pub struct BigDecimal {
    pub(crate) coefficient: BigInt,
    pub(crate) scale: u32,
}

impl BigDecimal {
    /// The value zero, at scale zero.
    pub fn zero() -> Self {
        BigDecimal {
            coefficient: BigInt::zero(),
            scale: 0,
        }
    }

    /// The value one, at scale zero.
    pub fn one() -> Self {
        BigDecimal {
            coefficient: BigInt::one(),
            scale: 0,
        }
    }

    /// Builds a value from a signed coefficient and a scale.
    pub fn new(coefficient: BigInt, scale: u32) -> Self {
        assert!(scale <= MAX_SCALE, "scale out of range");
        BigDecimal { coefficient, scale }
    }

    /// Borrow of the signed coefficient.
    pub fn coefficient(&self) -> &BigInt {
        &self.coefficient
    }

    /// Number of fractional digits.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.coefficient.is_negative()
    }

    /// -1, 0, or 1.
    pub fn signum(&self) -> i32 {
        self.coefficient.signum()
    }

    /// Whether the value has no fractional part. `1.00` is an integer;
    /// `1.05` is not.
    pub fn is_integer(&self) -> bool {
        if self.scale == 0 || self.is_zero() {
            return true;
        }
        self.coefficient.magnitude().trailing_zero_digits() >= self.scale as usize
    }

    /// Number of significant decimal digits of the coefficient.
    pub fn digit_count(&self) -> usize {
        self.coefficient.digit_count()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        BigDecimal {
            coefficient: self.coefficient.abs(),
            scale: self.scale,
        }
    }

    /// Exponent of the leading digit: 0 for values in [1, 10), -1 for
    /// [0.1, 1), and so on. Meaningless for zero, which reports the
    /// scale's exponent.
    pub(crate) fn adjusted_exponent(&self) -> i64 {
        self.digit_count() as i64 - 1 - self.scale as i64
    }

    /// Drops trailing zero digits of the coefficient, but never below
    /// `min_scale` fractional digits.
    pub(crate) fn trim_trailing_zeros(&mut self, min_scale: u32) {
        if self.scale <= min_scale {
            return;
        }
        if self.is_zero() {
            self.scale = min_scale;
            return;
        }
        let zeros = self.coefficient.magnitude().trailing_zero_digits();
        let strip = zeros.min((self.scale - min_scale) as usize);
        if strip == 0 {
            return;
        }
        let (q, _) = self
            .coefficient
            .magnitude()
            .divmod(&BigUint::power_of_ten(strip))
            .unwrap_or_else(|_| unreachable!("power of ten is non-zero"));
        self.coefficient = BigInt::new(q, self.coefficient.is_negative());
        self.scale -= strip as u32;
    }
}
