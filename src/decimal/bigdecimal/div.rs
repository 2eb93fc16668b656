//! Correctly rounded decimal division.
//!
//! The quotient is produced with one guard digit (P+1 significant
//! digits), then rounded to P under the caller's mode with the integer
//! remainder as the sticky signal, so every mode sees an exact picture of
//! the discarded tail. The result is trimmed of trailing zeros down to
//! the ideal scale `max(s1 - s2, 0)`, which is how an exact `10 / 2`
//! comes back as plain `5`.
//!
//! For very large divisors the integer divmod is replaced by a
//! Newton-reciprocal kernel: a reciprocal refined at doubling precision
//! (quadratic convergence, one multiply tree per level), followed by an
//! exact correction loop, so the returned quotient and remainder are
//! identical to the schoolbook path's.

use tracing::trace;

use super::super::rounding::RoundingMode;
use super::core::{BigDecimal, MAX_SCALE};
use super::round::round_magnitude;
use crate::error::Error;
use crate::integer::biguint::div::divmod_words;
use crate::integer::{BigInt, BigUint};

/// Divisor word count above which the Newton-reciprocal kernel runs.
pub(crate) const NEWTON_WORDS: usize = 250;

/// Reciprocal of `b` scaled to `BASE^(k+m)` where `k = b.word_len()`,
/// accurate to within a few units in the last word.
fn recip(b: &BigUint, m: usize) -> BigUint {
    if m <= 2 {
        let mut w = vec![0u32; b.word_len() + m];
        w.push(1);
        let (q, _) = divmod_words(&w, b.words());
        return BigUint::from_words(q);
    }
    let h = m.div_ceil(2);
    let rh = recip(b, h);
    let two_r = rh.mul_word(2).shift_words_up(m - h);
    let t = (&(&rh * &rh) * b).shift_words_down(b.word_len() + 2 * h - m);
    &two_r - &t
}

/// Exact quotient and remainder through the Newton reciprocal.
pub(crate) fn divmod_newton(a: &BigUint, b: &BigUint) -> (BigUint, BigUint) {
    trace!(
        dividend_words = a.word_len(),
        divisor_words = b.word_len(),
        "newton-reciprocal division"
    );
    let k = b.word_len();
    let m = a.word_len() - k + 2;
    let rec = recip(b, m);

    let mut q = (a * &rec).shift_words_down(k + m);
    let mut prod = &q * b;
    while prod > *a {
        q = &q - &BigUint::one();
        prod = &prod - b;
    }
    let mut r = a - &prod;
    while r >= *b {
        q = &q + &BigUint::one();
        r = &r - b;
    }
    (q, r)
}

impl BigDecimal {
    /// Quotient rounded to `precision` significant digits under `mode`.
    pub fn divide(
        &self,
        rhs: &Self,
        precision: u32,
        mode: RoundingMode,
    ) -> Result<BigDecimal, Error> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero {
                operation: "divide",
            });
        }
        let ideal = (self.scale as i64 - rhs.scale as i64).max(0) as u32;
        if self.is_zero() {
            return Ok(BigDecimal::new(BigInt::zero(), ideal));
        }

        let p = precision.max(1) as i64;
        let da = self.digit_count() as i64;
        let db = rhs.digit_count() as i64;

        // scale the dividend (or the divisor, when the dividend is already
        // long enough) so the integer quotient carries P+1 significant
        // digits
        let shift = p + 1 + db - da;
        let (na, nb) = if shift >= 0 {
            (
                self.coefficient.magnitude() * &BigUint::power_of_ten(shift as usize),
                rhs.coefficient.magnitude().clone(),
            )
        } else {
            (
                self.coefficient.magnitude().clone(),
                rhs.coefficient.magnitude() * &BigUint::power_of_ten((-shift) as usize),
            )
        };

        let (q0, r) = if nb.word_len() > NEWTON_WORDS && na.word_len() > nb.word_len() {
            divmod_newton(&na, &nb)
        } else {
            let (q, rem) = divmod_words(na.words(), nb.words());
            (BigUint::from_words(q), BigUint::from_words(rem))
        };

        let negative = self.is_negative() != rhs.is_negative();
        let k = q0.digit_count() as i64 - p;
        let sticky = !r.is_zero();
        let kept = round_magnitude(&q0, k.max(0) as usize, mode, negative, sticky);

        let scale0 = shift + self.scale as i64 - rhs.scale as i64;
        let final_scale = scale0 - k.max(0);
        let mut out = if final_scale < 0 {
            BigDecimal {
                coefficient: BigInt::new(
                    &kept * &BigUint::power_of_ten((-final_scale) as usize),
                    negative,
                ),
                scale: 0,
            }
        } else {
            if final_scale > MAX_SCALE as i64 {
                return Err(Error::Overflow { target: "scale" });
            }
            BigDecimal {
                coefficient: BigInt::new(kept, negative),
                scale: final_scale as u32,
            }
        };
        out.trim_trailing_zeros(ideal);
        Ok(out)
    }
}
