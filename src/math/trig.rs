//! Trigonometric functions.
//!
//! Arguments are reduced into [-π, π] against π carried at the working
//! precision plus the argument's own magnitude, then sin and cos run
//! their alternating Taylor series. arctan uses Euler's transformed
//! series, which converges for every argument once |x| > 1 is folded
//! through arctan(1/x).
//!
//! A result that comes out tiny (the argument sat next to a zero of the
//! function) has lost leading digits to cancellation, so the driver
//! retries with a doubled guard until enough trustworthy digits remain;
//! the quotient functions give up after a few retries and report the
//! singularity instead.

use tracing::trace;

use super::consts::pi_raw;
use super::GUARD_DIGITS;
use crate::decimal::{BigDecimal, RoundingMode};
use crate::error::Error;

/// Retries before a quotient function declares the argument singular.
const MAX_RETRIES: u32 = 4;

/// Reduces `x` into [-π, π] at working precision `wp`.
fn range_reduce(x: &BigDecimal, wp: u32) -> Result<BigDecimal, Error> {
    let extra = (x.adjusted_exponent().max(0) as u32) + 5;
    let pw = wp + extra;
    let two_pi = &pi_raw(pw + 5) * &BigDecimal::from(2i64);
    let q = x
        .divide(&two_pi, extra + 5, RoundingMode::HalfEven)?
        .round(0, RoundingMode::HalfEven);
    if q.is_zero() {
        return Ok(x.round_sig(pw));
    }
    let r = x - &(&q * &two_pi);
    Ok(r.round_sig(pw))
}

/// sin by Taylor series; |r| is expected to be at most about π.
fn sin_series(r: &BigDecimal, wp: u32) -> Result<BigDecimal, Error> {
    let mut term = r.round_sig(wp);
    let mut sum = term.clone();
    let r2 = (&term * &term).round_sig(wp);
    let mut n = 1i64;
    loop {
        term = (&term * &r2).round_sig(wp);
        term = term
            .divide(&BigDecimal::from((n + 1) * (n + 2)), wp, RoundingMode::HalfEven)?
            .negate();
        n += 2;
        if term.is_zero() || term.adjusted_exponent() < -(wp as i64) {
            break;
        }
        sum = &sum + &term;
    }
    Ok(sum)
}

/// cos by Taylor series; |r| is expected to be at most about π.
fn cos_series(r: &BigDecimal, wp: u32) -> Result<BigDecimal, Error> {
    let mut term = BigDecimal::one();
    let mut sum = BigDecimal::one();
    let r2 = (&r.round_sig(wp) * &r.round_sig(wp)).round_sig(wp);
    let mut n = 0i64;
    loop {
        term = (&term * &r2).round_sig(wp);
        term = term
            .divide(&BigDecimal::from((n + 1) * (n + 2)), wp, RoundingMode::HalfEven)?
            .negate();
        n += 2;
        if term.is_zero() || term.adjusted_exponent() < -(wp as i64) {
            break;
        }
        sum = &sum + &term;
    }
    Ok(sum)
}

/// Whether `v` kept at least `p + 2` digits clear of the absolute error
/// floor at working precision `wp`.
fn precise_enough(v: &BigDecimal, wp: u32, p: u32) -> bool {
    !v.is_zero() && v.adjusted_exponent() >= -(wp as i64 - p as i64 - 2)
}

/// Euler's transformed arctan series for 0 < |x| <= 1.
fn arctan_series(x: &BigDecimal, wp: u32) -> Result<BigDecimal, Error> {
    let one = BigDecimal::one();
    let x2 = x * x;
    let w = &one + &x2;
    let t0 = x.divide(&w, wp, RoundingMode::HalfEven)?;
    let y = x2.divide(&w, wp, RoundingMode::HalfEven)?;

    let mut term = t0.clone();
    let mut sum = t0;
    let mut n = 1i64;
    loop {
        term = (&term * &y).round_sig(wp);
        term = (&term * &BigDecimal::from(2 * n)).divide(
            &BigDecimal::from(2 * n + 1),
            wp,
            RoundingMode::HalfEven,
        )?;
        if term.is_zero() || term.adjusted_exponent() < sum.adjusted_exponent() - wp as i64 - 2 {
            break;
        }
        sum = &sum + &term;
        n += 1;
    }
    trace!(terms = n, "arctan series evaluated");
    Ok(sum)
}

impl BigDecimal {
    /// Sine to `precision` significant digits.
    pub fn sin(&self, precision: u32) -> Result<BigDecimal, Error> {
        let p = precision.max(1);
        if self.is_zero() {
            return Ok(BigDecimal::zero());
        }
        let mut wp = p + GUARD_DIGITS;
        for attempt in 0..=MAX_RETRIES {
            let r = range_reduce(self, wp)?;
            if r.is_zero() {
                wp *= 2;
                continue;
            }
            let s = sin_series(&r, wp)?;
            if precise_enough(&s, wp, p) || attempt == MAX_RETRIES {
                return Ok(s.round_sig(p));
            }
            wp *= 2;
        }
        Err(Error::InvalidDomain {
            operation: "sin",
            reason: "argument indistinguishable from a multiple of pi",
        })
    }

    /// Cosine to `precision` significant digits.
    pub fn cos(&self, precision: u32) -> Result<BigDecimal, Error> {
        let p = precision.max(1);
        if self.is_zero() {
            return Ok(BigDecimal::one());
        }
        let mut wp = p + GUARD_DIGITS;
        for attempt in 0..=MAX_RETRIES {
            let r = range_reduce(self, wp)?;
            let c = cos_series(&r, wp)?;
            if precise_enough(&c, wp, p) || attempt == MAX_RETRIES {
                return Ok(c.round_sig(p));
            }
            wp *= 2;
        }
        Err(Error::InvalidDomain {
            operation: "cos",
            reason: "argument indistinguishable from a half-odd multiple of pi",
        })
    }

    /// Tangent to `precision` significant digits. Errors when the
    /// argument is indistinguishable from an odd multiple of π/2.
    pub fn tan(&self, precision: u32) -> Result<BigDecimal, Error> {
        let p = precision.max(1);
        if self.is_zero() {
            return Ok(BigDecimal::zero());
        }
        let mut wp = p + GUARD_DIGITS;
        for _ in 0..=MAX_RETRIES {
            let r = range_reduce(self, wp)?;
            if r.is_zero() {
                return Ok(BigDecimal::zero());
            }
            let s = sin_series(&r, wp)?;
            let c = cos_series(&r, wp)?;
            if precise_enough(&s, wp, p) && precise_enough(&c, wp, p) {
                return s.divide(&c, p, RoundingMode::HalfEven);
            }
            wp *= 2;
        }
        Err(Error::InvalidDomain {
            operation: "tan",
            reason: "argument too close to an odd multiple of pi/2",
        })
    }

    /// Cotangent to `precision` significant digits. Errors at (or
    /// indistinguishably near) multiples of π.
    pub fn cot(&self, precision: u32) -> Result<BigDecimal, Error> {
        let p = precision.max(1);
        if self.is_zero() {
            return Err(Error::InvalidDomain {
                operation: "cot",
                reason: "argument is a multiple of pi",
            });
        }
        let mut wp = p + GUARD_DIGITS;
        for _ in 0..=MAX_RETRIES {
            let r = range_reduce(self, wp)?;
            let s = sin_series(&r, wp)?;
            let c = cos_series(&r, wp)?;
            if precise_enough(&s, wp, p) && precise_enough(&c, wp, p) {
                return c.divide(&s, p, RoundingMode::HalfEven);
            }
            wp *= 2;
        }
        Err(Error::InvalidDomain {
            operation: "cot",
            reason: "argument too close to a multiple of pi",
        })
    }

    /// Cosecant to `precision` significant digits. Errors at (or
    /// indistinguishably near) multiples of π.
    pub fn csc(&self, precision: u32) -> Result<BigDecimal, Error> {
        let p = precision.max(1);
        if self.is_zero() {
            return Err(Error::InvalidDomain {
                operation: "csc",
                reason: "argument is a multiple of pi",
            });
        }
        let mut wp = p + GUARD_DIGITS;
        for _ in 0..=MAX_RETRIES {
            let r = range_reduce(self, wp)?;
            let s = sin_series(&r, wp)?;
            if precise_enough(&s, wp, p) {
                return BigDecimal::one().divide(&s, p, RoundingMode::HalfEven);
            }
            wp *= 2;
        }
        Err(Error::InvalidDomain {
            operation: "csc",
            reason: "argument too close to a multiple of pi",
        })
    }

    /// Arctangent to `precision` significant digits.
    pub fn arctan(&self, precision: u32) -> Result<BigDecimal, Error> {
        let p = precision.max(1);
        if self.is_zero() {
            return Ok(BigDecimal::zero());
        }
        let wp = p + GUARD_DIGITS + 5;
        let one = BigDecimal::one();
        let ax = self.abs();

        let result = if ax > one {
            let half_pi = pi_raw(wp + 5).divide(
                &BigDecimal::from(2i64),
                wp + 5,
                RoundingMode::HalfEven,
            )?;
            let inv = one.divide(&ax, wp, RoundingMode::HalfEven)?;
            &half_pi - &arctan_series(&inv, wp)?
        } else {
            arctan_series(&ax, wp)?
        };

        let signed = if self.is_negative() {
            result.negate()
        } else {
            result
        };
        Ok(signed.round_sig(p))
    }
}
