//! The arbitrary-precision decimal value.
//!
//! Exact add/sub/mul, correctly rounded division at a caller-chosen
//! working precision, rounding to fractional places, the full numeric
//! string grammar, and plain/scientific formatting.

pub(crate) mod core;
pub(crate) mod round;

mod arith;
mod conv;
mod div;
mod fmt;
mod ops;
mod parse;

/// Arbitrary-precision decimal number.
pub use self::core::{BigDecimal, MAX_SCALE};
