//! Unsigned magnitude in base 10⁹.
//!
//! `BigUint` is the word vector every decimal-side type in the crate is
//! built on. Words are `u32` values below 10⁹ stored little-endian, so a
//! word boundary is also a boundary between groups of nine decimal digits.
//! That alignment is what makes decimal scaling (multiplying by powers of
//! ten) a word shift plus at most one small multiply, and it is the reason
//! this type exists next to the base-2³² `BinInt`.
//!
//! Invariants, maintained by every constructor and operation:
//! - the word vector is never empty;
//! - the most significant word is non-zero unless the value is zero;
//! - zero is exactly the single word `0`.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use crate::error::Error;

/// The word base, 10⁹.
pub(crate) const BASE: u64 = 1_000_000_000;

/// Decimal digits carried by one word.
pub(crate) const WORD_DIGITS: usize = 9;

/// Small powers of ten, up to 10¹⁸.
pub(crate) const POW10: [u64; 19] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
];

/// Number of decimal digits of `v`, with `decimal_len(0) == 1`.
pub(crate) fn decimal_len(mut v: u64) -> usize {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}

/// Strips leading zero words, leaving at least one word.
pub(crate) fn trim_words(words: &mut Vec<u32>) {
    while words.len() > 1 && words[words.len() - 1] == 0 {
        words.pop();
    }
    if words.is_empty() {
        words.push(0);
    }
}

/// Compares two trimmed little-endian word slices.
pub(crate) fn cmp_words(a: &[u32], b: &[u32]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for i in (0..a.len()).rev() {
        if a[i] != b[i] {
            return a[i].cmp(&b[i]);
        }
    }
    Ordering::Equal
}

/// Word-wise sum of two magnitudes.
pub(crate) fn add_words(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u64;

    for (i, &w) in long.iter().enumerate() {
        let mut cur = w as u64 + carry;
        if i < short.len() {
            cur += short[i] as u64;
        }
        if cur >= BASE {
            out.push((cur - BASE) as u32);
            carry = 1;
        } else {
            out.push(cur as u32);
            carry = 0;
        }
    }
    if carry > 0 {
        out.push(1);
    }
    if out.is_empty() {
        out.push(0);
    }
    out
}

/// Word-wise difference. Requires `a >= b`.
pub(crate) fn sub_words(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0i64;

    for (i, &w) in a.iter().enumerate() {
        let mut cur = w as i64 - borrow;
        if i < b.len() {
            cur -= b[i] as i64;
        }
        if cur < 0 {
            cur += BASE as i64;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(cur as u32);
    }
    trim_words(&mut out);
    out
}

/// Subtracts `src * BASE^offset` from `acc` in place. Requires the
/// difference to be non-negative.
pub(crate) fn sub_at(acc: &mut [u32], src: &[u32], offset: usize) {
    let mut borrow = 0i64;
    let mut i = 0;
    while i < src.len() || borrow != 0 {
        let mut cur = acc[offset + i] as i64 - borrow;
        if i < src.len() {
            cur -= src[i] as i64;
        }
        if cur < 0 {
            cur += BASE as i64;
            borrow = 1;
        } else {
            borrow = 0;
        }
        acc[offset + i] = cur as u32;
        i += 1;
    }
}

/// Adds `src * BASE^offset` into `acc` in place. `acc` must be long
/// enough to absorb the carry.
pub(crate) fn add_at(acc: &mut [u32], src: &[u32], offset: usize) {
    let mut carry = 0u64;
    let mut i = 0;
    while i < src.len() || carry != 0 {
        let mut cur = acc[offset + i] as u64 + carry;
        if i < src.len() {
            cur += src[i] as u64;
        }
        if cur >= BASE {
            acc[offset + i] = (cur - BASE) as u32;
            carry = 1;
        } else {
            acc[offset + i] = cur as u32;
            carry = 0;
        }
        i += 1;
    }
}

/// Arbitrary-precision unsigned integer in base 10⁹.
///
/// Little-endian word vector; see the module docs for the normalization
/// invariants. Cloning deep-copies the words, and every operation returns
/// a fresh value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigUint(pub(crate) Vec<u32>);

impl BigUint {
    /// The value zero.
    pub fn zero() -> Self {
        BigUint(vec![0])
    }

    /// The value one.
    pub fn one() -> Self {
        BigUint(vec![1])
    }

    /// Builds a magnitude from little-endian base-10⁹ words, normalizing
    /// leading zeros away.
    pub fn from_words(mut words: Vec<u32>) -> Self {
        trim_words(&mut words);
        BigUint(words)
    }

    /// 10^`exp` as a magnitude.
    pub fn power_of_ten(exp: usize) -> Self {
        let words = exp / WORD_DIGITS;
        let rem = exp % WORD_DIGITS;
        let mut w = vec![0u32; words + 1];
        w[words] = POW10[rem] as u32;
        BigUint(w)
    }

    pub fn is_zero(&self) -> bool {
        self.0.len() == 1 && self.0[0] == 0
    }

    pub fn is_one(&self) -> bool {
        self.0.len() == 1 && self.0[0] == 1
    }

    /// Number of base-10⁹ words.
    pub fn word_len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn words(&self) -> &[u32] {
        &self.0
    }

    /// Number of decimal digits; `0` counts as one digit.
    pub fn digit_count(&self) -> usize {
        if self.is_zero() {
            return 1;
        }
        (self.0.len() - 1) * WORD_DIGITS + decimal_len(self.0[self.0.len() - 1] as u64)
    }

    /// Number of trailing zero decimal digits (zero for the value zero).
    pub(crate) fn trailing_zero_digits(&self) -> usize {
        if self.is_zero() {
            return 0;
        }
        let mut count = 0;
        for &w in &self.0 {
            if w == 0 {
                count += WORD_DIGITS;
            } else {
                let mut v = w;
                while v % 10 == 0 {
                    count += 1;
                    v /= 10;
                }
                break;
            }
        }
        count
    }

    /// Multiplies by BASE^`k`, appending `k` low zero words.
    pub fn shift_words_up(&self, k: usize) -> Self {
        if self.is_zero() || k == 0 {
            return self.clone();
        }
        let mut w = vec![0u32; k];
        w.extend_from_slice(&self.0);
        BigUint(w)
    }

    /// Divides by BASE^`k`, discarding the `k` low words.
    pub fn shift_words_down(&self, k: usize) -> Self {
        if k >= self.0.len() {
            return BigUint::zero();
        }
        BigUint(self.0[k..].to_vec())
    }

    /// Multiplies by a single word. `m` must be below the base.
    pub fn mul_word(&self, m: u32) -> Self {
        if m == 0 || self.is_zero() {
            return BigUint::zero();
        }
        let mut out = Vec::with_capacity(self.0.len() + 1);
        let mut carry = 0u64;
        for &w in &self.0 {
            let cur = w as u64 * m as u64 + carry;
            out.push((cur % BASE) as u32);
            carry = cur / BASE;
        }
        if carry > 0 {
            out.push(carry as u32);
        }
        BigUint(out)
    }

    /// Streaming division by a single non-zero word, returning the
    /// quotient and the word-sized remainder.
    pub fn div_word(&self, d: u32) -> Result<(Self, u32), Error> {
        if d == 0 {
            return Err(Error::DivisionByZero {
                operation: "div_word",
            });
        }
        let mut q = vec![0u32; self.0.len()];
        let mut carry = 0u64;
        for i in (0..self.0.len()).rev() {
            let cur = carry * BASE + self.0[i] as u64;
            q[i] = (cur / d as u64) as u32;
            carry = cur % d as u64;
        }
        trim_words(&mut q);
        Ok((BigUint(q), carry as u32))
    }

    /// Quotient of division by a single word, for internal call sites
    /// that have already ruled out a zero divisor.
    pub(crate) fn div_small(&self, d: u32) -> Self {
        assert!(d != 0, "division by zero");
        let mut q = vec![0u32; self.0.len()];
        let mut carry = 0u64;
        for i in (0..self.0.len()).rev() {
            let cur = carry * BASE + self.0[i] as u64;
            q[i] = (cur / d as u64) as u32;
            carry = cur % d as u64;
        }
        trim_words(&mut q);
        BigUint(q)
    }

    /// Difference, or `None` when `rhs` exceeds `self`.
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        match cmp_words(&self.0, &rhs.0) {
            Ordering::Less => None,
            Ordering::Equal => Some(BigUint::zero()),
            Ordering::Greater => Some(BigUint(sub_words(&self.0, &rhs.0))),
        }
    }

    /// Builds a magnitude from decimal digits, most significant first.
    ///
    /// Digits are packed nine at a time into words starting from the low
    /// end, so no arithmetic beyond a small accumulator is involved.
    pub fn from_digits(digits: &[u8]) -> Self {
        if digits.is_empty() {
            return BigUint::zero();
        }
        let mut words = Vec::with_capacity(digits.len() / WORD_DIGITS + 1);
        let mut i = digits.len();
        while i > 0 {
            let start = i.saturating_sub(WORD_DIGITS);
            let mut w = 0u32;
            for &d in &digits[start..i] {
                w = w * 10 + d as u32;
            }
            words.push(w);
            i = start;
        }
        BigUint::from_words(words)
    }

    /// Decimal digits of the value, most significant first.
    pub fn to_digits(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.digit_count());
        let top = self.0[self.0.len() - 1];
        let top_len = decimal_len(top as u64);
        let mut buf = [0u8; WORD_DIGITS];
        let mut v = top;
        for i in (0..top_len).rev() {
            buf[i] = (v % 10) as u8;
            v /= 10;
        }
        out.extend_from_slice(&buf[..top_len]);
        for &w in self.0[..self.0.len() - 1].iter().rev() {
            let mut v = w;
            for i in (0..WORD_DIGITS).rev() {
                buf[i] = (v % 10) as u8;
                v /= 10;
            }
            out.extend_from_slice(&buf);
        }
        out
    }
}

impl Display for BigUint {
    /// Formats the magnitude as plain decimal digits.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0[self.0.len() - 1])?;
        for &w in self.0[..self.0.len() - 1].iter().rev() {
            write!(f, "{w:09}")?;
        }
        Ok(())
    }
}
