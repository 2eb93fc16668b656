use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Rem, Sub};

use super::core::{add_words, cmp_words, sub_words, BigUint};
use super::div::divmod_words;
use super::mul::mul_words;

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_words(&self.0, &other.0)
    }
}

impl Add for &BigUint {
    type Output = BigUint;

    fn add(self, rhs: &BigUint) -> BigUint {
        BigUint(add_words(&self.0, &rhs.0))
    }
}

impl Sub for &BigUint {
    type Output = BigUint;

    fn sub(self, rhs: &BigUint) -> BigUint {
        assert!(self >= rhs, "subtraction underflow");
        BigUint(sub_words(&self.0, &rhs.0))
    }
}

impl Mul for &BigUint {
    type Output = BigUint;

    fn mul(self, rhs: &BigUint) -> BigUint {
        BigUint(mul_words(&self.0, &rhs.0))
    }
}

impl Div for &BigUint {
    type Output = BigUint;

    fn div(self, rhs: &BigUint) -> BigUint {
        assert!(!rhs.is_zero(), "division by zero");
        BigUint(divmod_words(&self.0, &rhs.0).0)
    }
}

impl Rem for &BigUint {
    type Output = BigUint;

    fn rem(self, rhs: &BigUint) -> BigUint {
        assert!(!rhs.is_zero(), "division by zero");
        BigUint(divmod_words(&self.0, &rhs.0).1)
    }
}

impl Add for BigUint {
    type Output = BigUint;

    fn add(self, rhs: BigUint) -> BigUint {
        &self + &rhs
    }
}

impl Sub for BigUint {
    type Output = BigUint;

    fn sub(self, rhs: BigUint) -> BigUint {
        &self - &rhs
    }
}

impl Mul for BigUint {
    type Output = BigUint;

    fn mul(self, rhs: BigUint) -> BigUint {
        &self * &rhs
    }
}

impl Div for BigUint {
    type Output = BigUint;

    fn div(self, rhs: BigUint) -> BigUint {
        &self / &rhs
    }
}

impl Rem for BigUint {
    type Output = BigUint;

    fn rem(self, rhs: BigUint) -> BigUint {
        &self % &rhs
    }
}
