//! Mathematical constants at caller-chosen precision.
//!
//! π comes from Machin's formula over two integer-scaled arctangent
//! series, which keeps the whole computation in word-vector division by
//! small constants. The logarithm constants ride the sqrt-reduction
//! series core, and e is exp(1). Nothing is cached: values are pure
//! functions of the requested precision, computed per call.

use super::log::ln_reduced;
use super::GUARD_DIGITS;
use crate::decimal::BigDecimal;
use crate::error::Error;
use crate::integer::{BigInt, BigUint};

/// π to `precision` significant digits.
pub fn pi(precision: u32) -> BigDecimal {
    let p = precision.max(1);
    pi_raw(p + GUARD_DIGITS).round_sig(p)
}

/// π as a value with `scale` fractional digits, for internal use at
/// working precision.
pub(crate) fn pi_raw(scale: u32) -> BigDecimal {
    // Machin: pi = 16*arctan(1/5) - 4*arctan(1/239)
    let s = scale as usize;
    let a5 = arctan_inv_scaled(5, s);
    let a239 = arctan_inv_scaled(239, s);
    let v = &(&a5 * &BigInt::from(16i64)) - &(&a239 * &BigInt::from(4i64));
    BigDecimal::new(v, scale)
}

/// `arctan(1/k) * 10^s`, truncated, via the alternating Taylor series
/// evaluated entirely in scaled integers.
fn arctan_inv_scaled(k: u32, s: usize) -> BigInt {
    let k2 = k * k;
    let mut x = BigUint::power_of_ten(s).div_small(k);
    let mut acc = BigInt::zero();
    let mut n = 0u32;
    while !x.is_zero() {
        let t = BigInt::from(x.div_small(2 * n + 1));
        if n % 2 == 0 {
            acc = &acc + &t;
        } else {
            acc = &acc - &t;
        }
        x = x.div_small(k2);
        n += 1;
    }
    acc
}

/// Euler's number to `precision` significant digits.
pub fn e(precision: u32) -> Result<BigDecimal, Error> {
    BigDecimal::one().exp(precision)
}

/// ln 2 to `precision` significant digits.
pub fn ln2(precision: u32) -> Result<BigDecimal, Error> {
    let p = precision.max(1);
    Ok(ln2_raw(p + GUARD_DIGITS)?.round_sig(p))
}

/// ln 10 to `precision` significant digits.
pub fn ln10(precision: u32) -> Result<BigDecimal, Error> {
    let p = precision.max(1);
    Ok(ln10_raw(p + GUARD_DIGITS)?.round_sig(p))
}

pub(crate) fn ln2_raw(wp: u32) -> Result<BigDecimal, Error> {
    ln_reduced(&BigDecimal::from(2i64), wp)
}

pub(crate) fn ln10_raw(wp: u32) -> Result<BigDecimal, Error> {
    ln_reduced(&BigDecimal::from(10i64), wp)
}
