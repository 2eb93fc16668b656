//! Bit-level integer square root.
//!
//! Precision-doubling scheme: maintain an approximation `a` of the high
//! `d+1` bits of the root, where `d` walks up the schedule `c >> s` for
//! `s` from `floor(log2 c)` down to zero (`c` being the bit index of the
//! root's top bit). Each step refines with
//!
//! ```text
//! a <- (a << (d - e - 1)) + (n >> (2c - e - d + 1)) / a
//! ```
//!
//! which doubles the number of correct bits, so the whole root costs
//! O(M(n)). The invariant `(a - 1)^2 < (n >> 2(c - d)) < (a + 1)^2`
//! leaves the final answer at most one too large, fixed by a single
//! squaring at the end.
//!
//! Three phases keep the early iterations off the allocator: while every
//! intermediate fits in 64 bits the loop runs on native `u64`s reading
//! bit windows straight out of the word vector, then one more stretch on
//! `u128`, and only the last iterations (where the operands are genuinely
//! wide) fall back to word-vector shifts and division.

use super::super::biguint::core::cmp_words;
use super::core::BinInt;
use super::div::divmod_bin;
use super::mul::mul_bin;
use crate::error::Error;

/// Floor square root of a `u64`, hardware-seeded and corrected by one.
fn isqrt_u64(v: u64) -> u64 {
    if v == 0 {
        return 0;
    }
    let mut x = (v as f64).sqrt() as u64;
    x = x.min(u32::MAX as u64);
    while (x as u128) * (x as u128) > v as u128 {
        x -= 1;
    }
    while ((x + 1) as u128) * ((x + 1) as u128) <= v as u128 {
        x += 1;
    }
    x
}

impl BinInt {
    /// Largest `y` with `y*y <= self`. Errors on negative input.
    pub fn isqrt(&self) -> Result<BinInt, Error> {
        if self.negative {
            return Err(Error::NegativeSqrt);
        }
        if self.is_zero() {
            return Ok(BinInt::zero());
        }
        let bits = self.bit_length();
        if bits <= 64 {
            let v = self.bits_window128(0, 64) as u64;
            return Ok(BinInt::from(isqrt_u64(v)));
        }

        let c = (bits - 1) / 2;
        let c_bits = usize::BITS as usize - c.leading_zeros() as usize;

        let mut d: usize = 0;
        let mut s_idx = c_bits;

        // phase 1: everything fits in u64
        let mut a64: u64 = 1;
        while s_idx > 0 {
            let s = s_idx - 1;
            let e = d;
            let nd = c >> s;
            if e + nd + 1 > 64 {
                break;
            }
            let shift = 2 * c - e - nd + 1;
            let num = self.bits_window128(shift, (e + nd + 1) as u32) as u64;
            a64 = (a64 << (nd - e - 1)) + num / a64;
            d = nd;
            s_idx = s;
        }

        // phase 2: one more stretch in u128
        let mut a128: u128 = a64 as u128;
        while s_idx > 0 {
            let s = s_idx - 1;
            let e = d;
            let nd = c >> s;
            if e + nd + 1 > 128 {
                break;
            }
            let shift = 2 * c - e - nd + 1;
            let num = self.bits_window128(shift, (e + nd + 1) as u32);
            a128 = (a128 << (nd - e - 1)) + num / a128;
            d = nd;
            s_idx = s;
        }

        // phase 3: word-vector tail
        let mut a = BinInt::from(a128);
        while s_idx > 0 {
            let s = s_idx - 1;
            let e = d;
            let nd = c >> s;
            let shifted = self.shr_bits(2 * c - e - nd + 1);
            let (q, _) = divmod_bin(&shifted.words, &a.words);
            let mut next = a.shl_bits(nd - e - 1);
            next = next.add_ref(&BinInt::new(q, false));
            a = next;
            d = nd;
            s_idx = s;
        }

        // the approximation is at most one too large
        let sq = mul_bin(&a.words, &a.words);
        if cmp_words(&sq, &self.words) == std::cmp::Ordering::Greater {
            a = a.sub_ref(&BinInt::one());
        }
        Ok(a)
    }
}
