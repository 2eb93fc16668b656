//! Conversions between `BigUint` and native integer or string forms.
//!
//! `From` impls for the unsigned primitives split the value into base-10⁹
//! words; `TryFrom` back to the primitives fails when the magnitude does
//! not fit. String parsing here accepts plain digit runs only; the rich
//! numeric grammar (signs, exponents, separators) lives at the decimal
//! layer.

use std::str::FromStr;

use super::core::{BigUint, BASE};
use crate::error::Error;

impl From<u32> for BigUint {
    fn from(value: u32) -> Self {
        BigUint::from(value as u64)
    }
}

impl From<u64> for BigUint {
    fn from(mut value: u64) -> Self {
        let mut words = Vec::with_capacity(3);
        loop {
            words.push((value % BASE) as u32);
            value /= BASE;
            if value == 0 {
                break;
            }
        }
        BigUint(words)
    }
}

impl From<u128> for BigUint {
    fn from(mut value: u128) -> Self {
        let mut words = Vec::with_capacity(5);
        loop {
            words.push((value % BASE as u128) as u32);
            value /= BASE as u128;
            if value == 0 {
                break;
            }
        }
        BigUint(words)
    }
}

impl From<usize> for BigUint {
    fn from(value: usize) -> Self {
        BigUint::from(value as u64)
    }
}

/// Attempts to narrow the magnitude into a `u64`.
impl TryFrom<&BigUint> for u64 {
    type Error = Error;

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        let mut out: u64 = 0;
        for &w in value.0.iter().rev() {
            out = out
                .checked_mul(BASE)
                .and_then(|v| v.checked_add(w as u64))
                .ok_or(Error::Overflow { target: "u64" })?;
        }
        Ok(out)
    }
}

/// Attempts to narrow the magnitude into a `u128`.
impl TryFrom<&BigUint> for u128 {
    type Error = Error;

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        let mut out: u128 = 0;
        for &w in value.0.iter().rev() {
            out = out
                .checked_mul(BASE as u128)
                .and_then(|v| v.checked_add(w as u128))
                .ok_or(Error::Overflow { target: "u128" })?;
        }
        Ok(out)
    }
}

impl FromStr for BigUint {
    type Err = Error;

    /// Parses an unsigned run of decimal digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Error::InvalidString {
                input: s.to_string(),
                reason: "empty string",
            });
        }
        let mut digits = Vec::with_capacity(s.len());
        for c in s.chars() {
            match c.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None => {
                    return Err(Error::InvalidString {
                        input: s.to_string(),
                        reason: "expected a decimal digit",
                    })
                }
            }
        }
        Ok(BigUint::from_digits(&digits))
    }
}
