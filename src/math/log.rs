//! Natural and common logarithms.
//!
//! `ln` splits the argument as `d = m * 10^k` with `1 <= m < 10`, takes
//! `ln m` from the series core, and adds `k * ln 10`. The core reduces
//! its argument toward 1 by repeated square roots (each halves the
//! logarithm), then sums the atanh series
//!
//! ```text
//! ln v = 2 * (t + t^3/3 + t^5/5 + ...),   t = (v - 1) / (v + 1)
//! ```
//!
//! whose terms shrink by at least t^2 <= 0.0025 per step after the
//! reduction, and scales back up by the power of two.

use tracing::trace;

use super::consts::ln10_raw;
use super::GUARD_DIGITS;
use crate::decimal::{BigDecimal, RoundingMode};
use crate::error::Error;
use crate::integer::bigint::core::decimal_len_i64;
use crate::integer::BigInt;

/// Series core for `ln x` with `x >= 1`, at working precision `wp`.
pub(crate) fn ln_reduced(x: &BigDecimal, wp: u32) -> Result<BigDecimal, Error> {
    let one = BigDecimal::one();
    let mut v = x.clone();
    let mut doublings = 0u32;
    loop {
        let w = &v - &one;
        if w.is_zero() {
            return Ok(BigDecimal::zero());
        }
        if w.adjusted_exponent() <= -2 {
            break;
        }
        v = v.sqrt(wp + 5)?;
        doublings += 1;
    }

    let w = &v - &one;
    let t = w.divide(&(&v + &one), wp + 5, RoundingMode::HalfEven)?;
    let t2 = (&t * &t).round_sig(wp + 5);

    let mut term = t.clone();
    let mut sum = t;
    let mut n = 1i64;
    loop {
        term = (&term * &t2).round_sig(wp + 5);
        n += 2;
        let contrib = term.divide(&BigDecimal::from(n), wp + 5, RoundingMode::HalfEven)?;
        if contrib.is_zero()
            || contrib.adjusted_exponent() < sum.adjusted_exponent() - wp as i64 - 2
        {
            break;
        }
        sum = &sum + &contrib;
    }
    trace!(terms = (n - 1) / 2, doublings, "ln series evaluated");

    let factor = BigInt::from(2i64).pow(doublings as i64 + 1)?;
    Ok((&sum * &BigDecimal::from(factor)).round_sig(wp))
}

impl BigDecimal {
    /// Natural logarithm to `precision` significant digits. Errors on
    /// non-positive input.
    pub fn ln(&self, precision: u32) -> Result<BigDecimal, Error> {
        if self.signum() <= 0 {
            return Err(Error::InvalidDomain {
                operation: "ln",
                reason: "argument must be positive",
            });
        }
        let p = precision.max(1);
        let one = BigDecimal::one();
        if *self == one {
            return Ok(BigDecimal::zero());
        }

        let k = self.adjusted_exponent();
        let wp = p + GUARD_DIGITS + decimal_len_i64(k) as u32;

        // m = coefficient scaled into [1, 10)
        let m = BigDecimal::new(
            self.coefficient().clone(),
            (self.digit_count() - 1) as u32,
        );
        let lm = ln_reduced(&m, wp)?;
        let total = if k == 0 {
            lm
        } else {
            let l10 = ln10_raw(wp)?;
            &lm + &(&BigDecimal::from(k) * &l10)
        };
        Ok(total.round_sig(p))
    }

    /// Base-10 logarithm to `precision` significant digits.
    pub fn log10(&self, precision: u32) -> Result<BigDecimal, Error> {
        let p = precision.max(1);
        let wp = p + GUARD_DIGITS;
        let l = self.ln(wp)?;
        if l.is_zero() {
            return Ok(BigDecimal::zero());
        }
        let l10 = ln10_raw(wp + 5)?;
        l.divide(&l10, p, RoundingMode::HalfEven)
    }

    /// Logarithm in an arbitrary positive base (not 1), to `precision`
    /// significant digits.
    pub fn log(&self, base: &BigDecimal, precision: u32) -> Result<BigDecimal, Error> {
        let p = precision.max(1);
        let wp = p + GUARD_DIGITS;
        let lb = base.ln(wp + 5).map_err(|_| Error::InvalidDomain {
            operation: "log",
            reason: "base must be positive",
        })?;
        if lb.is_zero() {
            return Err(Error::InvalidDomain {
                operation: "log",
                reason: "base must not be 1",
            });
        }
        let l = self.ln(wp + 5)?;
        if l.is_zero() {
            return Ok(BigDecimal::zero());
        }
        l.divide(&lb, p, RoundingMode::HalfEven)
    }
}
