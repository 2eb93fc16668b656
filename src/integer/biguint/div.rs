//! Division kernels for base-10⁹ magnitudes.
//!
//! Three regimes:
//! - single-word divisors stream through [`BigUint::div_word`];
//! - multi-word divisors use Knuth's Algorithm D, with the divisor scaled
//!   so its top word is at least half the base and each quotient word
//!   estimated from the top two dividend words, refined down by at most
//!   two, with a rare add-back correction;
//! - divisors above [`BZ_THRESHOLD`] words with a dividend at least twice
//!   as long go through the Burnikel-Ziegler block recursion, which feeds
//!   the sub-quadratic multiplication kernel and runs in O(M(n)·log n).

use tracing::trace;

use super::core::{add_words, cmp_words, sub_at, sub_words, trim_words, BigUint, BASE};
use super::mul::mul_words;
use crate::error::Error;
use std::cmp::Ordering;

/// Divisor word count above which Burnikel-Ziegler is considered.
pub(crate) const BZ_THRESHOLD: usize = 64;

impl BigUint {
    /// Quotient and remainder, with `0 <= remainder < rhs`.
    pub fn divmod(&self, rhs: &Self) -> Result<(Self, Self), Error> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero {
                operation: "divmod",
            });
        }
        let (q, r) = divmod_words(&self.0, &rhs.0);
        Ok((BigUint(q), BigUint(r)))
    }
}

/// Dispatcher over trimmed word slices. The divisor must be non-zero.
pub(crate) fn divmod_words(a: &[u32], b: &[u32]) -> (Vec<u32>, Vec<u32>) {
    if cmp_words(a, b) == Ordering::Less {
        return (vec![0], a.to_vec());
    }
    if b.len() == 1 {
        return div_by_word(a, b[0]);
    }
    if b.len() > BZ_THRESHOLD && a.len() >= 2 * b.len() {
        burnikel_ziegler(a, b)
    } else {
        knuth(a, b)
    }
}

/// Streaming division by one word.
fn div_by_word(a: &[u32], d: u32) -> (Vec<u32>, Vec<u32>) {
    let mut q = vec![0u32; a.len()];
    let mut carry = 0u64;
    for i in (0..a.len()).rev() {
        let cur = carry * BASE + a[i] as u64;
        q[i] = (cur / d as u64) as u32;
        carry = cur % d as u64;
    }
    trim_words(&mut q);
    (q, vec![carry as u32])
}

/// Scales `a` by the single word `f`. With `pad` the result always has
/// `a.len() + 1` words; otherwise the carry word is appended only when
/// non-zero.
fn mul_word_raw(a: &[u32], f: u32, pad: bool) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry = 0u64;
    for &w in a {
        let cur = w as u64 * f as u64 + carry;
        out.push((cur % BASE) as u32);
        carry = cur / BASE;
    }
    if pad {
        out.push(carry as u32);
    } else if carry > 0 {
        out.push(carry as u32);
    }
    out
}

/// Knuth Algorithm D. Requires `a >= b` and a divisor of at least two
/// words.
fn knuth(a: &[u32], b: &[u32]) -> (Vec<u32>, Vec<u32>) {
    let n = b.len();
    let m = a.len() - n;

    let f = (BASE / (b[n - 1] as u64 + 1)) as u32;
    let mut u = mul_word_raw(a, f, true);
    let v = if f == 1 {
        b.to_vec()
    } else {
        mul_word_raw(b, f, false)
    };

    let mut q = vec![0u32; m + 1];
    for j in (0..=m).rev() {
        let top = u[j + n] as u64 * BASE + u[j + n - 1] as u64;
        let mut qhat = top / v[n - 1] as u64;
        let mut rhat = top % v[n - 1] as u64;
        loop {
            if qhat >= BASE || qhat * v[n - 2] as u64 > rhat * BASE + u[j + n - 2] as u64 {
                qhat -= 1;
                rhat += v[n - 1] as u64;
                if rhat < BASE {
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
            carry = p / BASE;
            let mut t = u[j + i] as i64 - (p % BASE) as i64 - borrow;
            if t < 0 {
                t += BASE as i64;
                borrow = 1;
            } else {
                borrow = 0;
            }
            u[j + i] = t as u32;
        }
        let t = u[j + n] as i64 - carry as i64 - borrow;
        if t < 0 {
            // estimate was one too large: add the divisor back
            u[j + n] = (t + BASE as i64) as u32;
            qhat -= 1;
            let mut c = 0u64;
            for i in 0..n {
                let s = u[j + i] as u64 + v[i] as u64 + c;
                if s >= BASE {
                    u[j + i] = (s - BASE) as u32;
                    c = 1;
                } else {
                    u[j + i] = s as u32;
                    c = 0;
                }
            }
            u[j + n] = ((u[j + n] as u64 + c) % BASE) as u32;
        } else {
            u[j + n] = t as u32;
        }
        q[j] = qhat as u32;
    }

    trim_words(&mut q);
    let mut r = u[..n].to_vec();
    trim_words(&mut r);
    if f > 1 {
        let (rq, _) = div_by_word(&r, f);
        r = rq;
    }
    (q, r)
}

/// Value `hi * BASE^lo_width + lo`, where `lo` occupies at most
/// `lo_width` words.
fn concat(lo: &[u32], lo_width: usize, hi: &[u32]) -> Vec<u32> {
    let mut w = lo.to_vec();
    w.resize(lo_width, 0);
    w.extend_from_slice(hi);
    trim_words(&mut w);
    w
}

/// Burnikel-Ziegler block division. Requires `a >= b` and a divisor
/// above the threshold.
fn burnikel_ziegler(a: &[u32], b: &[u32]) -> (Vec<u32>, Vec<u32>) {
    trace!(
        dividend_words = a.len(),
        divisor_words = b.len(),
        "burnikel-ziegler division"
    );

    // Pad the divisor to n words, n halving evenly down to the threshold,
    // and scale its top word to at least BASE/2. Both paddings multiply
    // dividend and divisor alike, so the quotient is unchanged and the
    // remainder is rescaled at the end.
    let mut blocks = 1usize;
    while b.len() > BZ_THRESHOLD * blocks {
        blocks *= 2;
    }
    let n = blocks * b.len().div_ceil(blocks);
    let s = n - b.len();
    let f = (BASE / (b[b.len() - 1] as u64 + 1)) as u32;

    let mut bs = vec![0u32; s];
    bs.extend_from_slice(&mul_word_raw(b, f, false));
    let mut av = vec![0u32; s];
    av.extend_from_slice(&mul_word_raw(a, f, false));

    let t = av.len().div_ceil(n);
    let mut z: Vec<u32> = vec![0];
    let mut qw = vec![0u32; t * n];
    for i in (0..t).rev() {
        let lo = i * n;
        let hi = ((i + 1) * n).min(av.len());
        let blk = concat(&av[lo..hi], n, &z);
        let (qi, r) = bz_div2n1n(&blk, &bs, n);
        qw[lo..lo + qi.len()].copy_from_slice(&qi);
        z = r;
    }
    trim_words(&mut qw);

    // Undo the scaling on the remainder: drop the s zero words, then the
    // exact division by f.
    let mut zr = if s > 0 {
        if z.len() > s {
            z[s..].to_vec()
        } else {
            vec![0]
        }
    } else {
        z
    };
    trim_words(&mut zr);
    if f > 1 {
        let (rq, _) = div_by_word(&zr, f);
        zr = rq;
    }
    (qw, zr)
}

/// Divides a 2n-word value by an n-word divisor, `a < b * BASE^n`.
fn bz_div2n1n(a: &[u32], b: &[u32], n: usize) -> (Vec<u32>, Vec<u32>) {
    if n % 2 == 1 || n <= BZ_THRESHOLD {
        if b.len() == 1 {
            return div_by_word(a, b[0]);
        }
        if cmp_words(a, b) == Ordering::Less {
            return (vec![0], a.to_vec());
        }
        return knuth(a, b);
    }
    let h = n / 2;
    let split = h.min(a.len());
    let (a0, ahi) = a.split_at(split);

    let (q1, r1) = bz_div3n2n(ahi, b, h);
    let low = concat(a0, h, &r1);
    let (q0, r) = bz_div3n2n(&low, b, h);
    (concat(&q0, h, &q1), r)
}

/// Divides a 3h-word value by a 2h-word divisor, `a < b * BASE^h`.
fn bz_div3n2n(a: &[u32], b: &[u32], h: usize) -> (Vec<u32>, Vec<u32>) {
    let (b0, b1) = b.split_at(h);
    let split = h.min(a.len());
    let a0 = &a[..split];
    let a12 = &a[split..];
    let split2 = (2 * h).min(a.len());
    let a2 = &a[split2..];

    let a12v = if a12.is_empty() { vec![0] } else { a12.to_vec() };
    let a2v: Vec<u32> = if a2.is_empty() { vec![0] } else { a2.to_vec() };

    let (q, c) = if cmp_words(&a2v, b1) == Ordering::Less {
        bz_div2n1n(&a12v, b1, h)
    } else {
        // quotient saturates at BASE^h - 1; c = a12 - b1*BASE^h + b1
        let q = vec![(BASE - 1) as u32; h];
        let mut t = a12v.clone();
        sub_at(&mut t, b1, h);
        trim_words(&mut t);
        (q, add_words(&t, b1))
    };

    let d = mul_words(&q, b0);
    let mut rhat = concat(a0, h, &c);
    let mut qv = q;
    trim_words(&mut qv);
    while cmp_words(&rhat, &d) == Ordering::Less {
        qv = sub_words(&qv, &[1]);
        rhat = add_words(&rhat, b);
    }
    let r = sub_words(&rhat, &d);
    (qv, r)
}
