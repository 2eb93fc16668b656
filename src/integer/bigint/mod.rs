//! Signed base-10⁹ integer.
//!
//! Sign-and-magnitude on top of [`super::biguint::BigUint`], with both
//! truncating and flooring division, gcd/lcm, and modular arithmetic.

pub(crate) mod core;

mod conv;
mod ops;

/// Signed arbitrary-precision integer carried in base 10⁹.
pub use self::core::BigInt;
