//! Decimal arithmetic: the `BigDecimal` value type and the rounding
//! engine it shares with the rest of the crate.

pub mod bigdecimal;
pub mod rounding;

pub use bigdecimal::{BigDecimal, MAX_SCALE};
pub use rounding::RoundingMode;
