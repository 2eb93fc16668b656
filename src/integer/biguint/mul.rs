//! Multiplication kernels for base-10⁹ magnitudes.
//!
//! Two regimes, selected by operand size: schoolbook O(n·m) below
//! [`KARATSUBA_THRESHOLD`] words, Karatsuba above it. The Karatsuba split
//! is taken at half the longer operand; recursive calls fall back to
//! schoolbook once either side drops below the threshold again.

use super::core::{add_at, add_words, sub_at, trim_words, BASE};

/// Word count below which schoolbook multiplication wins.
pub(crate) const KARATSUBA_THRESHOLD: usize = 80;

/// Product of two little-endian word slices. Accepts empty slices as
/// zero; the result is trimmed.
pub(crate) fn mul_words(a: &[u32], b: &[u32]) -> Vec<u32> {
    if a.is_empty() || b.is_empty() || (a.len() == 1 && a[0] == 0) || (b.len() == 1 && b[0] == 0) {
        return vec![0];
    }
    if a.len().min(b.len()) < KARATSUBA_THRESHOLD {
        schoolbook(a, b)
    } else {
        karatsuba(a, b)
    }
}

fn schoolbook(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = vec![0u32; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        let mut carry = 0u64;
        for (j, &bj) in b.iter().enumerate() {
            let cur = out[i + j] as u64 + ai as u64 * bj as u64 + carry;
            out[i + j] = (cur % BASE) as u32;
            carry = cur / BASE;
        }
        let mut k = i + b.len();
        while carry > 0 {
            let cur = out[k] as u64 + carry;
            out[k] = (cur % BASE) as u32;
            carry = cur / BASE;
            k += 1;
        }
    }
    trim_words(&mut out);
    out
}

fn karatsuba(a: &[u32], b: &[u32]) -> Vec<u32> {
    let m = a.len().max(b.len()) / 2;

    let (a0, a1) = a.split_at(m.min(a.len()));
    let (b0, b1) = b.split_at(m.min(b.len()));

    let z0 = mul_words(a0, b0);
    let z2 = mul_words(a1, b1);

    let sa = add_words(a0, a1);
    let sb = add_words(b0, b1);
    let mut z1 = mul_words(&sa, &sb);
    sub_at(&mut z1, &z0, 0);
    sub_at(&mut z1, &z2, 0);
    trim_words(&mut z1);

    let mut out = vec![0u32; a.len() + b.len() + 1];
    add_at(&mut out, &z0, 0);
    add_at(&mut out, &z1, m);
    add_at(&mut out, &z2, 2 * m);
    trim_words(&mut out);
    out
}
