//! Division kernels for base-2³² magnitudes.
//!
//! Mirrors the decimal-side kernels with binary normalization: Knuth's
//! Algorithm D shifts the divisor so its top bit is set, and the
//! Burnikel-Ziegler recursion pads with whole words (a shift by multiples
//! of 32), so both scalings are undone on the remainder with a single
//! right shift.

use std::cmp::Ordering;

use tracing::trace;

use super::super::biguint::core::{cmp_words, trim_words};
use super::super::biguint::div::BZ_THRESHOLD;
use super::core::{add_bin, shl_raw, shr_raw, sub_at_bin, sub_bin, BinInt};
use super::mul::mul_bin;
use crate::error::Error;

impl BinInt {
    /// Truncating division, quotient and remainder at once.
    pub fn divmod(&self, rhs: &Self) -> Result<(Self, Self), Error> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero {
                operation: "divmod",
            });
        }
        let (q, r) = divmod_bin(&self.words, &rhs.words);
        Ok((
            BinInt::new(q, self.negative != rhs.negative),
            BinInt::new(r, self.negative),
        ))
    }

    /// Flooring division, quotient and remainder at once. The remainder
    /// takes the divisor's sign whenever it is non-zero.
    pub fn divmod_floor(&self, rhs: &Self) -> Result<(Self, Self), Error> {
        let (q, r) = self.divmod(rhs)?;
        if self.negative != rhs.negative && !r.is_zero() {
            Ok((q.sub_ref(&BinInt::one()), r.add_ref(rhs)))
        } else {
            Ok((q, r))
        }
    }

    /// Flooring quotient.
    pub fn div_floor(&self, rhs: &Self) -> Result<Self, Error> {
        Ok(self.divmod_floor(rhs)?.0)
    }

    /// Flooring remainder.
    pub fn mod_floor(&self, rhs: &Self) -> Result<Self, Error> {
        Ok(self.divmod_floor(rhs)?.1)
    }
}

/// Dispatcher over trimmed base-2³² word slices. The divisor must be
/// non-zero.
pub(crate) fn divmod_bin(a: &[u32], b: &[u32]) -> (Vec<u32>, Vec<u32>) {
    if cmp_words(a, b) == Ordering::Less {
        return (vec![0], a.to_vec());
    }
    if b.len() == 1 {
        return div_by_word_bin(a, b[0]);
    }
    if b.len() > BZ_THRESHOLD && a.len() >= 2 * b.len() {
        burnikel_ziegler_bin(a, b)
    } else {
        knuth_bin(a, b)
    }
}

/// Streaming division by one word.
fn div_by_word_bin(a: &[u32], d: u32) -> (Vec<u32>, Vec<u32>) {
    let mut q = vec![0u32; a.len()];
    let mut carry = 0u64;
    for i in (0..a.len()).rev() {
        let cur = (carry << 32) | a[i] as u64;
        q[i] = (cur / d as u64) as u32;
        carry = cur % d as u64;
    }
    trim_words(&mut q);
    (q, vec![carry as u32])
}

/// Knuth Algorithm D with bit normalization. Requires `a >= b` and a
/// divisor of at least two words.
fn knuth_bin(a: &[u32], b: &[u32]) -> (Vec<u32>, Vec<u32>) {
    let n = b.len();
    let shift = b[n - 1].leading_zeros() as usize;

    let mut u = shl_raw(a, shift);
    u.resize(a.len() + 1, 0);
    let v = shl_raw(b, shift);
    let m = a.len() - n;

    let mut q = vec![0u32; m + 1];
    for j in (0..=m).rev() {
        let top = ((u[j + n] as u64) << 32) | u[j + n - 1] as u64;
        let mut qhat = top / v[n - 1] as u64;
        let mut rhat = top % v[n - 1] as u64;
        loop {
            if qhat > u32::MAX as u64
                || qhat * v[n - 2] as u64 > ((rhat << 32) | u[j + n - 2] as u64)
            {
                qhat -= 1;
                rhat += v[n - 1] as u64;
                if rhat <= u32::MAX as u64 {
                    continue;
                }
            }
            break;
        }

        // multiply-and-subtract qhat * v out of u[j..=j+n]
        let mut carry = 0u64;
        let mut borrow = 0i64;
        for i in 0..n {
            let p = qhat * v[i] as u64 + carry;
            carry = p >> 32;
            let mut t = u[j + i] as i64 - (p as u32) as i64 - borrow;
            if t < 0 {
                t += 1i64 << 32;
                borrow = 1;
            } else {
                borrow = 0;
            }
            u[j + i] = t as u32;
        }
        let t = u[j + n] as i64 - carry as i64 - borrow;
        if t < 0 {
            // estimate was one too large: add the divisor back
            u[j + n] = (t + (1i64 << 32)) as u32;
            qhat -= 1;
            let mut c = 0u64;
            for i in 0..n {
                let s = u[j + i] as u64 + v[i] as u64 + c;
                u[j + i] = s as u32;
                c = s >> 32;
            }
            u[j + n] = (u[j + n] as u64 + c) as u32;
        } else {
            u[j + n] = t as u32;
        }
        q[j] = qhat as u32;
    }

    trim_words(&mut q);
    let mut r = u[..n].to_vec();
    trim_words(&mut r);
    (q, shr_raw(&r, shift))
}

/// Value `hi * 2^(32*lo_width) + lo`.
fn concat_bin(lo: &[u32], lo_width: usize, hi: &[u32]) -> Vec<u32> {
    let mut w = lo.to_vec();
    w.resize(lo_width, 0);
    w.extend_from_slice(hi);
    trim_words(&mut w);
    w
}

/// Burnikel-Ziegler block division over base-2³² words.
fn burnikel_ziegler_bin(a: &[u32], b: &[u32]) -> (Vec<u32>, Vec<u32>) {
    trace!(
        dividend_words = a.len(),
        divisor_words = b.len(),
        "burnikel-ziegler binary division"
    );

    let mut blocks = 1usize;
    while b.len() > BZ_THRESHOLD * blocks {
        blocks *= 2;
    }
    let n = blocks * b.len().div_ceil(blocks);
    let s = n - b.len();
    // scale so the divisor occupies exactly n words with its top bit set
    let shift = s * 32 + b[b.len() - 1].leading_zeros() as usize;

    let bs = shl_raw(b, shift);
    let av = shl_raw(a, shift);

    let t = av.len().div_ceil(n);
    let mut z: Vec<u32> = vec![0];
    let mut qw = vec![0u32; t * n];
    for i in (0..t).rev() {
        let lo = i * n;
        let hi = ((i + 1) * n).min(av.len());
        let blk = concat_bin(&av[lo..hi], n, &z);
        let (qi, r) = bz_div2n1n_bin(&blk, &bs, n);
        qw[lo..lo + qi.len()].copy_from_slice(&qi);
        z = r;
    }
    trim_words(&mut qw);
    (qw, shr_raw(&z, shift))
}

/// Divides a 2n-word value by an n-word divisor, `a < b * 2^(32n)`.
fn bz_div2n1n_bin(a: &[u32], b: &[u32], n: usize) -> (Vec<u32>, Vec<u32>) {
    if n % 2 == 1 || n <= BZ_THRESHOLD {
        if b.len() == 1 {
            return div_by_word_bin(a, b[0]);
        }
        if cmp_words(a, b) == Ordering::Less {
            return (vec![0], a.to_vec());
        }
        return knuth_bin(a, b);
    }
    let h = n / 2;
    let split = h.min(a.len());
    let (a0, ahi) = a.split_at(split);

    let (q1, r1) = bz_div3n2n_bin(ahi, b, h);
    let low = concat_bin(a0, h, &r1);
    let (q0, r) = bz_div3n2n_bin(&low, b, h);
    (concat_bin(&q0, h, &q1), r)
}

/// Divides a 3h-word value by a 2h-word divisor, `a < b * 2^(32h)`.
fn bz_div3n2n_bin(a: &[u32], b: &[u32], h: usize) -> (Vec<u32>, Vec<u32>) {
    let (b0, b1) = b.split_at(h);
    let split = h.min(a.len());
    let a0 = &a[..split];
    let a12 = &a[split..];
    let split2 = (2 * h).min(a.len());
    let a2 = &a[split2..];

    let a12v = if a12.is_empty() { vec![0] } else { a12.to_vec() };
    let a2v: Vec<u32> = if a2.is_empty() { vec![0] } else { a2.to_vec() };

    let (q, c) = if cmp_words(&a2v, b1) == Ordering::Less {
        bz_div2n1n_bin(&a12v, b1, h)
    } else {
        let q = vec![u32::MAX; h];
        let mut t = a12v.clone();
        sub_at_bin(&mut t, b1, h);
        trim_words(&mut t);
        (q, add_bin(&t, b1))
    };

    let d = mul_bin(&q, b0);
    let mut rhat = concat_bin(a0, h, &c);
    let mut qv = q;
    trim_words(&mut qv);
    while cmp_words(&rhat, &d) == Ordering::Less {
        qv = sub_bin(&qv, &[1]);
        rhat = add_bin(&rhat, b);
    }
    let r = sub_bin(&rhat, &d);
    (qv, r)
}
