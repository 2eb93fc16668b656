//! Correctly-rounded arbitrary-precision decimal arithmetic.
//!
//! This crate provides the numeric kernels for exact decimal computation:
//! parse a number of any length, divide it at a chosen working precision,
//! and get back the correctly rounded quotient under a configurable
//! rounding policy.
//!
//! # Module overview
//!
//! - `integer`
//!   The arbitrary-precision integer kernels. `BigUint` is an unsigned
//!   magnitude in base 10⁹ whose words align with decimal digits;
//!   `BigInt` is the signed integer over it; `BinInt` is a base-2³²
//!   signed integer for bit-oriented work. The heavy algorithms live
//!   here: Karatsuba multiplication, Knuth and Burnikel-Ziegler
//!   division, divide-and-conquer radix conversion between the two
//!   bases, and a precision-doubling integer square root.
//!
//! - `decimal`
//!   The `BigDecimal` value (signed coefficient plus scale) with exact
//!   addition, subtraction, and multiplication, correctly rounded
//!   division at caller-chosen precision, rounding to fractional places
//!   under nine rounding modes, the numeric string grammar, and
//!   plain/scientific formatting.
//!
//! - `math`
//!   Exponential and transcendental functions over `BigDecimal`: sqrt,
//!   ln/log, exp, powers and roots, the trigonometric family, and the
//!   constants π, e, ln 2, ln 10 at any precision.
//!
//! - `error`
//!   The crate-wide error taxonomy. Operations either return the exact
//!   (or correctly rounded) result or fail fast; there are no partial
//!   results.
//!
//! # Design notes
//!
//! Values are immutable once constructed and operations return fresh
//! values, so anything built here can be shared across threads freely.
//! Working precision is an argument to the operations that round, never
//! part of a value. The library holds no global state and performs no
//! I/O; `tracing` events at trace level mark the entry points of the
//! expensive kernels for callers who want to watch them.

pub mod decimal;
pub mod error;
pub mod integer;
pub mod math;

pub use decimal::{BigDecimal, RoundingMode};
pub use error::Error;
pub use integer::{BigInt, BigUint, BinInt};
