//! Arbitrary-precision integer kernels.
//!
//! Three types share this family:
//!
//! - `BigUint`, the base-10⁹ unsigned magnitude every decimal value is
//!   carried in;
//! - `BigInt`, the signed integer over that magnitude;
//! - `BinInt`, the base-2³² signed integer used for bit-level work
//!   (shifts, integer square root) and as the far side of the
//!   divide-and-conquer radix conversions.

pub mod bigint;
pub mod biguint;
pub mod binary;

pub use bigint::BigInt;
pub use biguint::BigUint;
pub use binary::BinInt;
