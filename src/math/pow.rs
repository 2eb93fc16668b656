//! Powers and roots.
//!
//! Integer exponents run exact binary exponentiation with intermediate
//! results rounded at working precision; everything else is
//! `exp(e * ln d)` with the usual domain fences: a negative base needs an
//! integer exponent, and zero cannot be raised to a non-positive power.
//! Odd roots of negative values are defined through the magnitude.

use super::GUARD_DIGITS;
use crate::decimal::{BigDecimal, RoundingMode};
use crate::error::Error;
use crate::integer::bigint::core::decimal_len_i64;

impl BigDecimal {
    /// self^exponent to `precision` significant digits.
    pub fn power(&self, exponent: &BigDecimal, precision: u32) -> Result<BigDecimal, Error> {
        let p = precision.max(1);
        if exponent.is_integer() {
            let n = exponent.to_bigint()?;
            return match i64::try_from(&n) {
                Ok(v) => self.pow_int(v, p),
                Err(_) => {
                    // exponents beyond i64 only make sense for bases of
                    // magnitude one
                    let one = BigDecimal::one();
                    if *self == one {
                        Ok(BigDecimal::one())
                    } else if *self == one.negate() {
                        Ok(if n.is_even() {
                            BigDecimal::one()
                        } else {
                            BigDecimal::one().negate()
                        })
                    } else if self.is_zero() {
                        if n.is_negative() {
                            Err(Error::InvalidDomain {
                                operation: "power",
                                reason: "zero base with non-positive exponent",
                            })
                        } else {
                            Ok(BigDecimal::zero())
                        }
                    } else {
                        Err(Error::Overflow {
                            target: "power exponent",
                        })
                    }
                }
            };
        }

        if self.is_negative() {
            return Err(Error::InvalidDomain {
                operation: "power",
                reason: "negative base with a fractional exponent",
            });
        }
        if self.is_zero() {
            if exponent.is_negative() {
                return Err(Error::InvalidDomain {
                    operation: "power",
                    reason: "zero base with non-positive exponent",
                });
            }
            return Ok(BigDecimal::zero());
        }

        let wp = p + GUARD_DIGITS + (exponent.adjusted_exponent().max(0) as u32) + 5;
        let l = self.ln(wp)?;
        let prod = (&l * exponent).round_sig(wp);
        prod.exp(p)
    }

    /// Integer power by binary exponentiation at working precision.
    fn pow_int(&self, n: i64, p: u32) -> Result<BigDecimal, Error> {
        if n == 0 {
            if self.is_zero() {
                return Err(Error::InvalidDomain {
                    operation: "power",
                    reason: "zero base with non-positive exponent",
                });
            }
            return Ok(BigDecimal::one());
        }
        if self.is_zero() {
            if n < 0 {
                return Err(Error::InvalidDomain {
                    operation: "power",
                    reason: "zero base with non-positive exponent",
                });
            }
            return Ok(BigDecimal::zero());
        }

        let wp = p + GUARD_DIGITS + decimal_len_i64(n) as u32 + 5;
        let mut base = if self.digit_count() > wp as usize {
            self.round_sig(wp)
        } else {
            self.clone()
        };
        let mut acc = BigDecimal::one();
        let mut e = n.unsigned_abs();
        while e > 0 {
            if e & 1 == 1 {
                acc = (&acc * &base).round_sig(wp);
            }
            e >>= 1;
            if e > 0 {
                base = (&base * &base).round_sig(wp);
            }
        }
        if n < 0 {
            acc = BigDecimal::one().divide(&acc, wp, RoundingMode::HalfEven)?;
        }
        Ok(acc.round_sig(p))
    }

    /// n-th root to `precision` significant digits. Negative bases are
    /// allowed for odd `n` only.
    pub fn root(&self, n: i64, precision: u32) -> Result<BigDecimal, Error> {
        let p = precision.max(1);
        if n == 0 {
            return Err(Error::InvalidDomain {
                operation: "root",
                reason: "zeroth root is undefined",
            });
        }
        if self.is_zero() {
            if n < 0 {
                return Err(Error::InvalidDomain {
                    operation: "root",
                    reason: "zero base with a negative root order",
                });
            }
            return Ok(BigDecimal::zero());
        }
        if n < 0 {
            let r = self.root(-n, p + GUARD_DIGITS)?;
            return BigDecimal::one().divide(&r, p, RoundingMode::HalfEven);
        }
        if self.is_negative() && n % 2 == 0 {
            return Err(Error::InvalidDomain {
                operation: "root",
                reason: "even root of a negative value",
            });
        }

        let magnitude = self.abs();
        let result = if n == 1 {
            magnitude.round_sig(p)
        } else if n == 2 {
            magnitude.sqrt(p)?
        } else {
            let wp = p + GUARD_DIGITS + 5;
            let l = magnitude.ln(wp)?;
            let l_over = l.divide(&BigDecimal::from(n), wp, RoundingMode::HalfEven)?;
            l_over.exp(p)?
        };
        Ok(if self.is_negative() {
            result.negate()
        } else {
            result
        })
    }

    /// Cube root to `precision` significant digits.
    pub fn cbrt(&self, precision: u32) -> Result<BigDecimal, Error> {
        self.root(3, precision)
    }
}
