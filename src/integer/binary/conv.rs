//! Conversions between `BinInt`, the native integers, the decimal-side
//! types, and strings.
//!
//! Conversions against `BigInt`/`BigUint` route through the radix module
//! and therefore pick up its divide-and-conquer regime for large values.

use std::str::FromStr;

use super::super::bigint::BigInt;
use super::super::biguint::BigUint;
use super::core::BinInt;
use super::radix::{biguint_to_binary, binary_to_biguint};
use crate::error::Error;

impl From<u32> for BinInt {
    fn from(value: u32) -> Self {
        BinInt::new(vec![value], false)
    }
}

impl From<u64> for BinInt {
    fn from(value: u64) -> Self {
        BinInt::new(vec![value as u32, (value >> 32) as u32], false)
    }
}

impl From<u128> for BinInt {
    fn from(value: u128) -> Self {
        BinInt::new(
            vec![
                value as u32,
                (value >> 32) as u32,
                (value >> 64) as u32,
                (value >> 96) as u32,
            ],
            false,
        )
    }
}

impl From<i64> for BinInt {
    fn from(value: i64) -> Self {
        let mag = value.unsigned_abs();
        BinInt::new(vec![mag as u32, (mag >> 32) as u32], value < 0)
    }
}

/// Decimal magnitude to binary words.
impl From<&BigUint> for BinInt {
    fn from(value: &BigUint) -> Self {
        BinInt::new(biguint_to_binary(value), false)
    }
}

/// Signed decimal carrier to binary.
impl From<&BigInt> for BinInt {
    fn from(value: &BigInt) -> Self {
        BinInt::new(biguint_to_binary(value.magnitude()), value.is_negative())
    }
}

/// Binary back to the decimal magnitude. Fails on negative input.
impl TryFrom<&BinInt> for BigUint {
    type Error = Error;

    fn try_from(value: &BinInt) -> Result<Self, Self::Error> {
        if value.is_negative() {
            return Err(Error::InvalidDomain {
                operation: "to_biguint",
                reason: "value is negative",
            });
        }
        Ok(BigUint::from_words(binary_to_biguint(
            value.magnitude_words(),
        )))
    }
}

/// Binary back to the signed decimal carrier.
impl From<&BinInt> for BigInt {
    fn from(value: &BinInt) -> Self {
        BigInt::new(
            BigUint::from_words(binary_to_biguint(value.magnitude_words())),
            value.is_negative(),
        )
    }
}

/// Attempts to narrow the value into a `u64`.
impl TryFrom<&BinInt> for u64 {
    type Error = Error;

    fn try_from(value: &BinInt) -> Result<Self, Self::Error> {
        if value.is_negative() || value.bit_length() > 64 {
            return Err(Error::Overflow { target: "u64" });
        }
        Ok(value.bits_window128(0, 64) as u64)
    }
}

impl FromStr for BinInt {
    type Err = Error;

    /// Parses an optional sign followed by decimal digits, converting
    /// through the decimal carrier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dec: BigInt = s.parse()?;
        Ok(BinInt::from(&dec))
    }
}
