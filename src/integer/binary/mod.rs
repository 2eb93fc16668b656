//! Base-2³² signed integer.
//!
//! The binary-oriented kernel: bit shifts, bitwise operators, the
//! precision-doubling integer square root, and the divide-and-conquer
//! radix conversions against the decimal-side types.

pub(crate) mod core;
pub(crate) mod div;
pub(crate) mod mul;
pub(crate) mod radix;

mod conv;
mod ops;
mod sqrt;

/// Signed arbitrary-precision integer in base 2³².
pub use self::core::BinInt;
