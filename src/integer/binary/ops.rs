//! Operator impls for `BinInt`.
//!
//! The bitwise operators are defined over magnitudes and always return a
//! non-negative value; there is no two's-complement view of negative
//! numbers here, they exist for the bit-oriented algorithms.

use std::cmp::Ordering;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Rem, Shl, Shr, Sub};

use super::core::BinInt;

impl PartialOrd for BinInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BinInt {
    fn cmp(&self, other: &Self) -> Ordering {
        use crate::integer::biguint::core::cmp_words;
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => cmp_words(&self.words, &other.words),
            (true, true) => cmp_words(&other.words, &self.words),
        }
    }
}

impl Neg for &BinInt {
    type Output = BinInt;

    fn neg(self) -> BinInt {
        BinInt::new(self.words.clone(), !self.negative)
    }
}

impl Add for &BinInt {
    type Output = BinInt;

    fn add(self, rhs: &BinInt) -> BinInt {
        self.add_ref(rhs)
    }
}

impl Sub for &BinInt {
    type Output = BinInt;

    fn sub(self, rhs: &BinInt) -> BinInt {
        self.sub_ref(rhs)
    }
}

impl Mul for &BinInt {
    type Output = BinInt;

    fn mul(self, rhs: &BinInt) -> BinInt {
        self.mul_ref(rhs)
    }
}

/// Truncating quotient; panics on a zero divisor.
impl Div for &BinInt {
    type Output = BinInt;

    fn div(self, rhs: &BinInt) -> BinInt {
        assert!(!rhs.is_zero(), "division by zero");
        let (q, _) = super::div::divmod_bin(&self.words, &rhs.words);
        BinInt::new(q, self.negative != rhs.negative)
    }
}

/// Truncating remainder; panics on a zero divisor.
impl Rem for &BinInt {
    type Output = BinInt;

    fn rem(self, rhs: &BinInt) -> BinInt {
        assert!(!rhs.is_zero(), "division by zero");
        let (_, r) = super::div::divmod_bin(&self.words, &rhs.words);
        BinInt::new(r, self.negative)
    }
}

impl Shl<usize> for &BinInt {
    type Output = BinInt;

    fn shl(self, rhs: usize) -> BinInt {
        self.shl_bits(rhs)
    }
}

impl Shr<usize> for &BinInt {
    type Output = BinInt;

    fn shr(self, rhs: usize) -> BinInt {
        self.shr_bits(rhs)
    }
}

impl BitAnd for &BinInt {
    type Output = BinInt;

    fn bitand(self, rhs: &BinInt) -> BinInt {
        let n = self.words.len().min(rhs.words.len());
        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            out.push(self.words[i] & rhs.words[i]);
        }
        BinInt::new(out, false)
    }
}

impl BitOr for &BinInt {
    type Output = BinInt;

    fn bitor(self, rhs: &BinInt) -> BinInt {
        let (long, short) = if self.words.len() >= rhs.words.len() {
            (&self.words, &rhs.words)
        } else {
            (&rhs.words, &self.words)
        };
        let mut out = long.clone();
        for i in 0..short.len() {
            out[i] |= short[i];
        }
        BinInt::new(out, false)
    }
}

impl BitXor for &BinInt {
    type Output = BinInt;

    fn bitxor(self, rhs: &BinInt) -> BinInt {
        let (long, short) = if self.words.len() >= rhs.words.len() {
            (&self.words, &rhs.words)
        } else {
            (&rhs.words, &self.words)
        };
        let mut out = long.clone();
        for i in 0..short.len() {
            out[i] ^= short[i];
        }
        BinInt::new(out, false)
    }
}

impl Add for BinInt {
    type Output = BinInt;

    fn add(self, rhs: BinInt) -> BinInt {
        &self + &rhs
    }
}

impl Sub for BinInt {
    type Output = BinInt;

    fn sub(self, rhs: BinInt) -> BinInt {
        &self - &rhs
    }
}

impl Mul for BinInt {
    type Output = BinInt;

    fn mul(self, rhs: BinInt) -> BinInt {
        &self * &rhs
    }
}

impl Div for BinInt {
    type Output = BinInt;

    fn div(self, rhs: BinInt) -> BinInt {
        &self / &rhs
    }
}

impl Rem for BinInt {
    type Output = BinInt;

    fn rem(self, rhs: BinInt) -> BinInt {
        &self % &rhs
    }
}

impl Neg for BinInt {
    type Output = BinInt;

    fn neg(self) -> BinInt {
        let negative = !self.negative;
        BinInt::new(self.words, negative)
    }
}

impl Shl<usize> for BinInt {
    type Output = BinInt;

    fn shl(self, rhs: usize) -> BinInt {
        &self << rhs
    }
}

impl Shr<usize> for BinInt {
    type Output = BinInt;

    fn shr(self, rhs: usize) -> BinInt {
        &self >> rhs
    }
}
