//! Exponential and transcendental functions over `BigDecimal`.
//!
//! Every function takes a decimal precision `P` and returns a value
//! accurate to at least `P` significant digits. Internally everything
//! runs at a widened working precision and rounds once at the end;
//! functions whose results can cancel (the trigonometric family) retry
//! with a wider guard until enough trustworthy digits remain.

pub mod consts;

mod exp;
mod log;
mod pow;
mod sqrt;
mod trig;

/// Default guard digits added to the caller's precision for internal
/// computation.
pub(crate) const GUARD_DIGITS: u32 = 10;
