//! Conversions between `BigDecimal` and native numeric types.
//!
//! `From` impls for the primitive integers build integral values at
//! scale zero. The float constructor is deliberately lossy: it goes
//! through the shortest decimal form of the `f64`, which is also the
//! form `Display` would print. Narrowing back to fixed-width integers
//! refuses fractional parts and overflow separately, so the caller can
//! tell the two failures apart.

use super::core::BigDecimal;
use crate::error::Error;
use crate::integer::{BigInt, BigUint};

impl From<i32> for BigDecimal {
    fn from(value: i32) -> Self {
        BigDecimal::new(BigInt::from(value), 0)
    }
}

impl From<i64> for BigDecimal {
    fn from(value: i64) -> Self {
        BigDecimal::new(BigInt::from(value), 0)
    }
}

impl From<i128> for BigDecimal {
    fn from(value: i128) -> Self {
        BigDecimal::new(BigInt::from(value), 0)
    }
}

impl From<u64> for BigDecimal {
    fn from(value: u64) -> Self {
        BigDecimal::new(BigInt::from(value), 0)
    }
}

impl From<BigInt> for BigDecimal {
    fn from(value: BigInt) -> Self {
        BigDecimal::new(value, 0)
    }
}

impl BigDecimal {
    /// Builds a value from an `f64` through its shortest decimal form.
    /// Lossy by design; NaN and infinities are rejected.
    pub fn from_float(value: f64) -> Result<Self, Error> {
        if !value.is_finite() {
            return Err(Error::InvalidString {
                input: value.to_string(),
                reason: "not a finite number",
            });
        }
        format!("{value:e}").parse()
    }

    /// Exact conversion to a `BigInt`; errors when a fractional part
    /// would be lost.
    pub fn to_bigint(&self) -> Result<BigInt, Error> {
        if !self.is_integer() {
            return Err(Error::PrecisionExceeded {
                operation: "to_bigint",
            });
        }
        if self.scale == 0 {
            return Ok(self.coefficient.clone());
        }
        let (q, _) = self
            .coefficient
            .magnitude()
            .divmod(&BigUint::power_of_ten(self.scale as usize))
            .unwrap_or_else(|_| unreachable!("power of ten is non-zero"));
        Ok(BigInt::new(q, self.is_negative()))
    }
}

/// Narrowing to `i64`: errors on fractional values and on overflow.
impl TryFrom<&BigDecimal> for i64 {
    type Error = Error;

    fn try_from(value: &BigDecimal) -> Result<Self, Self::Error> {
        let int = value.to_bigint()?;
        i64::try_from(&int)
    }
}

/// Narrowing to `i128`: errors on fractional values and on overflow.
impl TryFrom<&BigDecimal> for i128 {
    type Error = Error;

    fn try_from(value: &BigDecimal) -> Result<Self, Self::Error> {
        let int = value.to_bigint()?;
        i128::try_from(&int)
    }
}
