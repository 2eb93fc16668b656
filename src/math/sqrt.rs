//! Decimal square root over the bit-level integer kernel.
//!
//! The coefficient is scaled to an even power of ten carrying a few
//! guard digits past the requested precision, pushed through the binary
//! integer square root, and the result's scale is half the shift. One
//! half-even rounding at the end brings it back to the caller's
//! precision.

use super::GUARD_DIGITS;
use crate::decimal::BigDecimal;
use crate::error::Error;
use crate::integer::{BigInt, BigUint, BinInt};

impl BigDecimal {
    /// Square root to `precision` significant digits. Errors on negative
    /// input.
    pub fn sqrt(&self, precision: u32) -> Result<BigDecimal, Error> {
        if self.is_negative() {
            return Err(Error::NegativeSqrt);
        }
        if self.is_zero() {
            return Ok(BigDecimal::zero());
        }
        let p = precision.max(1);
        let s = self.scale() as i64;
        // result scale: enough room for the precision, a guard band, and
        // half the operand's own scale (the shift below must stay even)
        let m = p as i64 + (GUARD_DIGITS / 2) as i64 + (s + 1) / 2;
        let shift = 2 * m - s;

        let n = self.coefficient().magnitude() * &BigUint::power_of_ten(shift as usize);
        let nb = BinInt::from(&n);
        let root = nb.isqrt()?;
        let mag = BigUint::try_from(&root)?;

        Ok(BigDecimal::new(BigInt::new(mag, false), m as u32).round_sig(p))
    }
}
