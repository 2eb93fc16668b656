//! Operator impls and numeric comparison for `BigDecimal`.
//!
//! Comparison aligns scales first, so `1.0 == 1.00` and `0.5 < 0.75`
//! regardless of representation. Only the exact operations get operator
//! sugar; division needs a precision and a mode, so it stays a named
//! method.

use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

use super::core::BigDecimal;

impl PartialEq for BigDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigDecimal {}

impl PartialOrd for BigDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.scale == other.scale {
            return self.coefficient.cmp(&other.coefficient);
        }
        let (a, b, _) = self.aligned(other);
        a.cmp(&b)
    }
}

impl Neg for &BigDecimal {
    type Output = BigDecimal;

    fn neg(self) -> BigDecimal {
        self.negate()
    }
}

impl Neg for BigDecimal {
    type Output = BigDecimal;

    fn neg(self) -> BigDecimal {
        self.negate()
    }
}

impl Add for &BigDecimal {
    type Output = BigDecimal;

    fn add(self, rhs: &BigDecimal) -> BigDecimal {
        BigDecimal::add(self, rhs)
    }
}

impl Sub for &BigDecimal {
    type Output = BigDecimal;

    fn sub(self, rhs: &BigDecimal) -> BigDecimal {
        BigDecimal::sub(self, rhs)
    }
}

impl Mul for &BigDecimal {
    type Output = BigDecimal;

    fn mul(self, rhs: &BigDecimal) -> BigDecimal {
        BigDecimal::mul(self, rhs)
    }
}

impl Add for BigDecimal {
    type Output = BigDecimal;

    fn add(self, rhs: BigDecimal) -> BigDecimal {
        BigDecimal::add(&self, &rhs)
    }
}

impl Sub for BigDecimal {
    type Output = BigDecimal;

    fn sub(self, rhs: BigDecimal) -> BigDecimal {
        BigDecimal::sub(&self, &rhs)
    }
}

impl Mul for BigDecimal {
    type Output = BigDecimal;

    fn mul(self, rhs: BigDecimal) -> BigDecimal {
        BigDecimal::mul(&self, &rhs)
    }
}
