//! Error taxonomy shared by every operation in the crate.
//!
//! Arithmetic here is all-or-nothing: an operation either returns the
//! exact (or correctly rounded) result, or it fails fast with one of the
//! variants below. There are no partial results and no retries.

use thiserror::Error;

/// Errors reported by parsing, arithmetic, and conversion operations.
///
/// Variants carry the name of the failing operation where that helps a
/// caller tell apart otherwise identical failures (several operations can
/// hit a zero divisor or an empty domain).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input does not match the accepted numeric grammar.
    #[error("invalid numeric string {input:?}: {reason}")]
    InvalidString {
        /// The offending input, as received.
        input: String,
        /// What the scanner objected to.
        reason: &'static str,
    },

    /// A divisor or modulus of zero was supplied.
    #[error("division by zero in `{operation}`")]
    DivisionByZero {
        /// Operation that received the zero divisor.
        operation: &'static str,
    },

    /// Square root of a negative value.
    #[error("square root of a negative value")]
    NegativeSqrt,

    /// The argument lies outside the domain of the function.
    #[error("domain error in `{operation}`: {reason}")]
    InvalidDomain {
        /// Operation whose domain was violated.
        operation: &'static str,
        /// Which precondition failed.
        reason: &'static str,
    },

    /// The value does not fit the requested fixed-width type, or a result
    /// exponent left the representable range.
    #[error("overflow converting to `{target}`")]
    Overflow {
        /// Target type or bound that was exceeded.
        target: &'static str,
    },

    /// An exact integer was requested from a value with a non-zero
    /// fractional part.
    #[error("fractional part would be lost in `{operation}`")]
    PrecisionExceeded {
        /// Operation that required an integral value.
        operation: &'static str,
    },

    /// Integer-only exponentiation was called with a negative exponent.
    #[error("negative exponent {exponent} in integer exponentiation")]
    NegativeExponent {
        /// The rejected exponent.
        exponent: i64,
    },
}
