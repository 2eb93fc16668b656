//! The exponential function.
//!
//! Argument splitting `d = q*ln2 + r` keeps the Taylor series on a
//! residue below ln 2, where the factorial denominators take over after
//! a handful of terms; the power of two is reapplied exactly (or by one
//! widened division for negative `q`). Arguments so large that the
//! result's exponent could not be represented are rejected up front.

use tracing::trace;

use super::consts::ln2_raw;
use super::GUARD_DIGITS;
use crate::decimal::{BigDecimal, RoundingMode};
use crate::error::Error;
use crate::integer::BigInt;

impl BigDecimal {
    /// e^self to `precision` significant digits.
    pub fn exp(&self, precision: u32) -> Result<BigDecimal, Error> {
        let p = precision.max(1);
        if self.is_zero() {
            return Ok(BigDecimal::one());
        }
        // the result exponent grows like |self| / ln 10; past this bound
        // it cannot fit the scale type, let alone memory
        if self.adjusted_exponent() >= 10 {
            return Err(Error::Overflow { target: "exp" });
        }

        let int_digits = (self.adjusted_exponent().max(0) + 1) as u32;
        let wp = p + GUARD_DIGITS + int_digits + 5;

        let l2 = ln2_raw(wp + 5)?;
        let q_dec = self
            .divide(&l2, int_digits + 5, RoundingMode::Down)?
            .round(0, RoundingMode::Floor);
        let q = i64::try_from(&q_dec.to_bigint()?).map_err(|_| Error::Overflow {
            target: "exp",
        })?;
        if q.unsigned_abs() > (1u64 << 31) {
            return Err(Error::Overflow { target: "exp" });
        }
        let r = self - &(&q_dec * &l2);

        // Taylor series on the residue
        let mut term = BigDecimal::one();
        let mut sum = BigDecimal::one();
        let mut n = 1i64;
        loop {
            term = (&term * &r).round_sig(wp);
            term = term.divide(&BigDecimal::from(n), wp, RoundingMode::HalfEven)?;
            if term.is_zero() || term.adjusted_exponent() < -(wp as i64) {
                break;
            }
            sum = &sum + &term;
            n += 1;
        }
        trace!(terms = n, q, "exp series evaluated");

        let result = if q >= 0 {
            let f = BigInt::from(2i64).pow(q)?;
            (&sum * &BigDecimal::from(f)).round_sig(p)
        } else {
            let f = BigInt::from(2i64).pow(-q)?;
            sum.divide(&BigDecimal::from(f), wp, RoundingMode::HalfEven)?
                .round_sig(p)
        };
        Ok(result)
    }
}
