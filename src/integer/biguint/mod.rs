//! Base-10⁹ unsigned magnitude kernel.
//!
//! This module carries the word-vector arithmetic everything decimal in
//! the crate stands on: carry/borrow addition and subtraction, schoolbook
//! and Karatsuba multiplication, and the three division regimes up to the
//! Burnikel-Ziegler block recursion. Words hold nine decimal digits each,
//! so powers of ten are word shifts and digit extraction never crosses a
//! binary boundary.

pub(crate) mod core;
pub(crate) mod div;
pub(crate) mod mul;

mod conv;
mod ops;

/// Arbitrary-precision unsigned integer in base 10⁹.
pub use self::core::BigUint;
