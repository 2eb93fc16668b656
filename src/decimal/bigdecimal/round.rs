//! Rounding of decimal values to a fractional-digit count or to a number
//! of significant digits.
//!
//! The digit-level decision lives in [`RoundingMode`]; this module splits
//! the coefficient at the cut, feeds the mode the digits it wants, and
//! propagates the increment.

use super::super::rounding::RoundingMode;
use super::arith::scale_coefficient;
use super::core::BigDecimal;
use crate::integer::{BigInt, BigUint};

/// Rounds a magnitude after dropping its `drop` low digits.
///
/// `extra_sticky` folds an inexact remainder (from division) into the
/// "rest of the dropped digits" signal.
pub(crate) fn round_magnitude(
    mag: &BigUint,
    drop: usize,
    mode: RoundingMode,
    negative: bool,
    extra_sticky: bool,
) -> BigUint {
    if drop == 0 {
        let last_kept = (mag.words()[0] % 10) as u8;
        if mode.rounds_up(negative, last_kept, 0, extra_sticky) {
            return mag + &BigUint::one();
        }
        return mag.clone();
    }

    let (kept, dropped) = mag
        .divmod(&BigUint::power_of_ten(drop))
        .unwrap_or_else(|_| unreachable!("power of ten is non-zero"));

    let (first_dropped, rest_nonzero) = if drop == 1 {
        (dropped.words()[0] as u8, extra_sticky)
    } else {
        let (fd, rest) = dropped
            .divmod(&BigUint::power_of_ten(drop - 1))
            .unwrap_or_else(|_| unreachable!("power of ten is non-zero"));
        (fd.words()[0] as u8, !rest.is_zero() || extra_sticky)
    };

    let last_kept = (kept.words()[0] % 10) as u8;
    if mode.rounds_up(negative, last_kept, first_dropped, rest_nonzero) {
        &kept + &BigUint::one()
    } else {
        kept
    }
}

impl BigDecimal {
    /// Rounds to `decimal_places` fractional digits.
    ///
    /// Asking for more places than the current scale pads with zeros (the
    /// value is unchanged, the scale grows); asking for fewer drops
    /// digits under `mode`.
    pub fn round(&self, decimal_places: u32, mode: RoundingMode) -> BigDecimal {
        if decimal_places >= self.scale {
            let coefficient = scale_coefficient(
                &self.coefficient,
                (decimal_places - self.scale) as usize,
            );
            return BigDecimal {
                coefficient,
                scale: decimal_places,
            };
        }
        let drop = (self.scale - decimal_places) as usize;
        let negative = self.is_negative();
        let mag = round_magnitude(self.coefficient.magnitude(), drop, mode, negative, false);
        BigDecimal {
            coefficient: BigInt::new(mag, negative),
            scale: decimal_places,
        }
    }

    /// Rounds to at most `precision` significant digits under `mode`,
    /// folding `sticky` into the dropped-digits signal.
    pub(crate) fn round_sig_sticky(
        &self,
        precision: u32,
        mode: RoundingMode,
        sticky: bool,
    ) -> BigDecimal {
        let p = precision.max(1) as i64;
        let dc = self.digit_count() as i64;
        if dc <= p && !sticky {
            return self.clone();
        }
        let drop = (dc - p).max(0);
        let negative = self.is_negative();
        let mag = round_magnitude(
            self.coefficient.magnitude(),
            drop as usize,
            mode,
            negative,
            sticky,
        );
        let new_scale = self.scale as i64 - drop;
        if new_scale < 0 {
            BigDecimal {
                coefficient: BigInt::new(
                    &mag * &BigUint::power_of_ten((-new_scale) as usize),
                    negative,
                ),
                scale: 0,
            }
        } else {
            BigDecimal {
                coefficient: BigInt::new(mag, negative),
                scale: new_scale as u32,
            }
        }
    }

    /// Rounds to at most `precision` significant digits, half to even.
    pub(crate) fn round_sig(&self, precision: u32) -> BigDecimal {
        self.round_sig_sticky(precision, RoundingMode::HalfEven, false)
    }
}
