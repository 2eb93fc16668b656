use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use super::core::BigInt;

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::new(self.magnitude.clone(), !self.negative)
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        let negative = !self.negative;
        BigInt::new(self.magnitude, negative)
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        self.add_ref(rhs)
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        self.sub_ref(rhs)
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        self.mul_ref(rhs)
    }
}

/// Truncating quotient; panics on a zero divisor like the primitive
/// integer types do.
impl Div for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> BigInt {
        assert!(!rhs.is_zero(), "division by zero");
        self.divmod_nonzero(rhs).0
    }
}

/// Truncating remainder; panics on a zero divisor.
impl Rem for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &BigInt) -> BigInt {
        assert!(!rhs.is_zero(), "division by zero");
        self.divmod_nonzero(rhs).1
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: BigInt) -> BigInt {
        &self + &rhs
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: BigInt) -> BigInt {
        &self - &rhs
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: BigInt) -> BigInt {
        &self * &rhs
    }
}

impl Div for BigInt {
    type Output = BigInt;

    fn div(self, rhs: BigInt) -> BigInt {
        &self / &rhs
    }
}

impl Rem for BigInt {
    type Output = BigInt;

    fn rem(self, rhs: BigInt) -> BigInt {
        &self % &rhs
    }
}
