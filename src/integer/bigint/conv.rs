//! Conversions between `BigInt` and native integer or string forms.

use std::str::FromStr;

use super::super::biguint::BigUint;
use super::core::BigInt;
use crate::error::Error;

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        BigInt::from(value as i64)
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        BigInt::new(BigUint::from(value.unsigned_abs()), value < 0)
    }
}

impl From<i128> for BigInt {
    fn from(value: i128) -> Self {
        BigInt::new(BigUint::from(value.unsigned_abs()), value < 0)
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        BigInt::new(BigUint::from(value), false)
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        BigInt::new(BigUint::from(value), false)
    }
}

impl From<u128> for BigInt {
    fn from(value: u128) -> Self {
        BigInt::new(BigUint::from(value), false)
    }
}

impl From<BigUint> for BigInt {
    fn from(value: BigUint) -> Self {
        BigInt::new(value, false)
    }
}

/// Attempts to narrow the value into an `i64`.
impl TryFrom<&BigInt> for i64 {
    type Error = Error;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        let mag = u64::try_from(&value.magnitude).map_err(|_| Error::Overflow {
            target: "i64",
        })?;
        if value.negative {
            if mag > i64::MAX as u64 + 1 {
                return Err(Error::Overflow { target: "i64" });
            }
            Ok((mag as i64).wrapping_neg())
        } else {
            if mag > i64::MAX as u64 {
                return Err(Error::Overflow { target: "i64" });
            }
            Ok(mag as i64)
        }
    }
}

/// Attempts to narrow the value into an `i128`.
impl TryFrom<&BigInt> for i128 {
    type Error = Error;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        let mag = u128::try_from(&value.magnitude).map_err(|_| Error::Overflow {
            target: "i128",
        })?;
        if value.negative {
            if mag > i128::MAX as u128 + 1 {
                return Err(Error::Overflow { target: "i128" });
            }
            Ok((mag as i128).wrapping_neg())
        } else {
            if mag > i128::MAX as u128 {
                return Err(Error::Overflow { target: "i128" });
            }
            Ok(mag as i128)
        }
    }
}

impl FromStr for BigInt {
    type Err = Error;

    /// Parses an optional sign followed by decimal digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let magnitude: BigUint = rest.parse().map_err(|e| match e {
            Error::InvalidString { reason, .. } => Error::InvalidString {
                input: s.to_string(),
                reason,
            },
            other => other,
        })?;
        Ok(BigInt::new(magnitude, negative))
    }
}
