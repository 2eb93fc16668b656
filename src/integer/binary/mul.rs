//! Multiplication kernels for base-2³² magnitudes.
//!
//! Same two regimes as the decimal side: schoolbook below the shared
//! 80-word threshold, Karatsuba above it. The inner loop fits exactly in
//! a 64-bit accumulator: a word product plus a word of carry plus a word
//! of accumulator never exceeds `u64::MAX`.

use super::super::biguint::core::trim_words;
use super::super::biguint::mul::KARATSUBA_THRESHOLD;
use super::core::{add_at_bin, add_bin, sub_at_bin};

/// Product of two little-endian base-2³² word slices.
pub(crate) fn mul_bin(a: &[u32], b: &[u32]) -> Vec<u32> {
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
            out[i + j] = cur as u32;
            carry = cur >> 32;
        }
        let mut k = i + b.len();
        while carry > 0 {
            let cur = out[k] as u64 + carry;
            out[k] = cur as u32;
            carry = cur >> 32;
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

    let z0 = mul_bin(a0, b0);
    let z2 = mul_bin(a1, b1);

    let sa = add_bin(a0, a1);
    let sb = add_bin(b0, b1);
    let mut z1 = mul_bin(&sa, &sb);
    sub_at_bin(&mut z1, &z0, 0);
    sub_at_bin(&mut z1, &z2, 0);
    trim_words(&mut z1);

    let mut out = vec![0u32; a.len() + b.len() + 1];
    add_at_bin(&mut out, &z0, 0);
    add_at_bin(&mut out, &z1, m);
    add_at_bin(&mut out, &z2, 2 * m);
    trim_words(&mut out);
    out
}
