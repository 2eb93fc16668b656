//! Signed arbitrary-precision integer in base 2³².
//!
//! `BinInt` is the binary-side sibling of the decimal-aligned `BigInt`.
//! Word vectors are little-endian `u32`s with the same normalization
//! rules as the base-10⁹ kernel: never empty, no leading zero words, and
//! zero is non-negative. The binary base is what makes bit shifts, the
//! bit-level square root, and the divide-and-conquer radix conversions
//! cheap, so those all live on this type.

use std::fmt::{Display, Formatter};

use super::super::biguint::core::trim_words;

/// Sum of two base-2³² magnitudes.
pub(crate) fn add_bin(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u64;
    for (i, &w) in long.iter().enumerate() {
        let mut cur = w as u64 + carry;
        if i < short.len() {
            cur += short[i] as u64;
        }
        out.push(cur as u32);
        carry = cur >> 32;
    }
    if carry > 0 {
        out.push(carry as u32);
    }
    if out.is_empty() {
        out.push(0);
    }
    out
}

/// Difference of two base-2³² magnitudes. Requires `a >= b`.
pub(crate) fn sub_bin(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0i64;
    for (i, &w) in a.iter().enumerate() {
        let mut cur = w as i64 - borrow;
        if i < b.len() {
            cur -= b[i] as i64;
        }
        if cur < 0 {
            cur += 1i64 << 32;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(cur as u32);
    }
    trim_words(&mut out);
    out
}

/// Adds `src * 2^(32*offset)` into `acc` in place.
pub(crate) fn add_at_bin(acc: &mut [u32], src: &[u32], offset: usize) {
    let mut carry = 0u64;
    let mut i = 0;
    while i < src.len() || carry != 0 {
        let mut cur = acc[offset + i] as u64 + carry;
        if i < src.len() {
            cur += src[i] as u64;
        }
        acc[offset + i] = cur as u32;
        carry = cur >> 32;
        i += 1;
    }
}

/// Subtracts `src * 2^(32*offset)` from `acc` in place. The difference
/// must be non-negative.
pub(crate) fn sub_at_bin(acc: &mut [u32], src: &[u32], offset: usize) {
    let mut borrow = 0i64;
    let mut i = 0;
    while i < src.len() || borrow != 0 {
        let mut cur = acc[offset + i] as i64 - borrow;
        if i < src.len() {
            cur -= src[i] as i64;
        }
        if cur < 0 {
            cur += 1i64 << 32;
            borrow = 1;
        } else {
            borrow = 0;
        }
        acc[offset + i] = cur as u32;
        i += 1;
    }
}

/// Left-shifts a magnitude by an arbitrary bit count.
pub(crate) fn shl_raw(words: &[u32], bits: usize) -> Vec<u32> {
    if words.len() == 1 && words[0] == 0 {
        return vec![0];
    }
    let ws = bits / 32;
    let b = (bits % 32) as u32;
    let mut out = vec![0u32; ws];
    if b == 0 {
        out.extend_from_slice(words);
    } else {
        let mut carry = 0u32;
        for &w in words {
            out.push((w << b) | carry);
            carry = w >> (32 - b);
        }
        if carry > 0 {
            out.push(carry);
        }
    }
    out
}

/// Right-shifts a magnitude by an arbitrary bit count, truncating.
pub(crate) fn shr_raw(words: &[u32], bits: usize) -> Vec<u32> {
    let ws = bits / 32;
    let b = (bits % 32) as u32;
    if ws >= words.len() {
        return vec![0];
    }
    let slice = &words[ws..];
    let mut out = Vec::with_capacity(slice.len());
    if b == 0 {
        out.extend_from_slice(slice);
    } else {
        for i in 0..slice.len() {
            let mut v = slice[i] >> b;
            if i + 1 < slice.len() {
                v |= slice[i + 1] << (32 - b);
            }
            out.push(v);
        }
    }
    trim_words(&mut out);
    out
}

/// Bit length of a magnitude; zero for the value zero.
pub(crate) fn bit_len_words(words: &[u32]) -> usize {
    let top = words[words.len() - 1];
    if top == 0 {
        return 0;
    }
    (words.len() - 1) * 32 + (32 - top.leading_zeros() as usize)
}

/// Signed arbitrary-precision integer in base 2³².
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinInt {
    pub(crate) words: Vec<u32>,
    pub(crate) negative: bool,
}

impl BinInt {
    /// The value zero.
    pub fn zero() -> Self {
        BinInt {
            words: vec![0],
            negative: false,
        }
    }

    /// The value one.
    pub fn one() -> Self {
        BinInt {
            words: vec![1],
            negative: false,
        }
    }

    /// Builds a value from little-endian base-2³² words and a sign,
    /// normalizing leading zeros and `-0` away.
    pub fn new(mut words: Vec<u32>, negative: bool) -> Self {
        trim_words(&mut words);
        let negative = negative && !(words.len() == 1 && words[0] == 0);
        BinInt { words, negative }
    }

    pub fn is_zero(&self) -> bool {
        self.words.len() == 1 && self.words[0] == 0
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// -1, 0, or 1.
    pub fn signum(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        BinInt {
            words: self.words.clone(),
            negative: false,
        }
    }

    /// Number of base-2³² words.
    pub fn word_len(&self) -> usize {
        self.words.len()
    }

    pub(crate) fn magnitude_words(&self) -> &[u32] {
        &self.words
    }

    /// Number of significant bits of the magnitude; zero for zero.
    pub fn bit_length(&self) -> usize {
        bit_len_words(&self.words)
    }

    /// Whether magnitude bit `index` (counted from the least significant
    /// bit) is set.
    pub fn bit(&self, index: usize) -> bool {
        let w = index / 32;
        if w >= self.words.len() {
            return false;
        }
        (self.words[w] >> (index % 32)) & 1 == 1
    }

    /// Shifts the magnitude left by `bits`, keeping the sign.
    pub fn shl_bits(&self, bits: usize) -> Self {
        BinInt {
            words: shl_raw(&self.words, bits),
            negative: self.negative,
        }
    }

    /// Shifts the magnitude right by `bits`, truncating toward zero and
    /// keeping the sign of a non-zero result.
    pub fn shr_bits(&self, bits: usize) -> Self {
        BinInt::new(shr_raw(&self.words, bits), self.negative)
    }

    /// Low 128 bits of `self >> offset`, masked to `width` bits.
    ///
    /// The read never allocates: it gathers at most five words around the
    /// offset, which is what the native phases of the square root need.
    pub(crate) fn bits_window128(&self, offset: usize, width: u32) -> u128 {
        let ws = offset / 32;
        let b = (offset % 32) as u32;
        let get = |i: usize| -> u128 {
            if i < self.words.len() {
                self.words[i] as u128
            } else {
                0
            }
        };
        let mut out: u128 = 0;
        for i in 0..4 {
            out |= get(ws + i) << (32 * i);
        }
        if b > 0 {
            out >>= b;
            out |= get(ws + 4) << (128 - b);
        }
        if width < 128 {
            out &= (1u128 << width) - 1;
        }
        out
    }

    /// Signed addition by magnitude comparison.
    pub(crate) fn add_ref(&self, rhs: &Self) -> Self {
        use super::super::biguint::core::cmp_words;
        use std::cmp::Ordering;

        if self.negative == rhs.negative {
            return BinInt {
                words: add_bin(&self.words, &rhs.words),
                negative: self.negative,
            };
        }
        match cmp_words(&self.words, &rhs.words) {
            Ordering::Equal => BinInt::zero(),
            Ordering::Greater => BinInt {
                words: sub_bin(&self.words, &rhs.words),
                negative: self.negative,
            },
            Ordering::Less => BinInt {
                words: sub_bin(&rhs.words, &self.words),
                negative: rhs.negative,
            },
        }
    }

    pub(crate) fn sub_ref(&self, rhs: &Self) -> Self {
        self.add_ref(&BinInt {
            words: rhs.words.clone(),
            negative: !rhs.negative && !rhs.is_zero(),
        })
    }

    pub(crate) fn mul_ref(&self, rhs: &Self) -> Self {
        BinInt::new(
            super::mul::mul_bin(&self.words, &rhs.words),
            self.negative != rhs.negative,
        )
    }
}

impl Display for BinInt {
    /// Formats the value in decimal, converting through the base-10⁹
    /// magnitude.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        let dec = super::radix::binary_to_biguint(&self.words);
        write!(f, "{}", crate::integer::biguint::BigUint::from_words(dec))
    }
}
