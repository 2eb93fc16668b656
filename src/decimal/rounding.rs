//! Rounding modes over decimal coefficients.
//!
//! Every mode is a total decision function from the digits at the cut to
//! "keep" or "increment the magnitude". The inputs are the last kept
//! digit, the first dropped digit, a sticky flag for the rest of the
//! dropped digits, and the sign; carry propagation after an increment is
//! the caller's business.

/// How to resolve digits dropped by a rounding step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundingMode {
    /// Truncate toward zero.
    Down,
    /// Round away from zero whenever anything non-zero is dropped.
    Up,
    /// Round half cases toward zero.
    HalfDown,
    /// Round half cases away from zero.
    HalfUp,
    /// Round half cases toward an even last kept digit. The default, and
    /// the tie-break used internally for correctly rounded results.
    #[default]
    HalfEven,
    /// Toward positive infinity.
    Ceiling,
    /// Toward negative infinity.
    Floor,
    /// Away from zero only when the last kept digit is 0 or 5.
    ZeroFiveUp,
    /// Round half cases toward an odd last kept digit.
    HalfOdd,
}

impl RoundingMode {
    /// Whether the kept magnitude must be incremented.
    ///
    /// `rest_nonzero` is true when any dropped digit past the first is
    /// non-zero (including an inexact remainder from division).
    pub(crate) fn rounds_up(
        self,
        negative: bool,
        last_kept: u8,
        first_dropped: u8,
        rest_nonzero: bool,
    ) -> bool {
        let dropped_nonzero = first_dropped != 0 || rest_nonzero;
        match self {
            RoundingMode::Down => false,
            RoundingMode::Up => dropped_nonzero,
            RoundingMode::HalfUp => first_dropped >= 5,
            RoundingMode::HalfDown => {
                first_dropped > 5 || (first_dropped == 5 && rest_nonzero)
            }
            RoundingMode::HalfEven => {
                if first_dropped != 5 {
                    first_dropped > 5
                } else if rest_nonzero {
                    true
                } else {
                    last_kept % 2 == 1
                }
            }
            RoundingMode::HalfOdd => {
                if first_dropped != 5 {
                    first_dropped > 5
                } else if rest_nonzero {
                    true
                } else {
                    last_kept % 2 == 0
                }
            }
            RoundingMode::Ceiling => !negative && dropped_nonzero,
            RoundingMode::Floor => negative && dropped_nonzero,
            RoundingMode::ZeroFiveUp => {
                (last_kept == 0 || last_kept == 5) && dropped_nonzero
            }
        }
    }

    /// The mode that produces the negated result when the operand is
    /// negated: Ceiling and Floor swap, everything else is symmetric.
    pub fn negation_dual(self) -> Self {
        match self {
            RoundingMode::Ceiling => RoundingMode::Floor,
            RoundingMode::Floor => RoundingMode::Ceiling,
            other => other,
        }
    }
}
