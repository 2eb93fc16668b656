//! Base conversion between the base-10⁹ and base-2³² magnitudes.
//!
//! Both directions have a simple quadratic regime for small operands and
//! a divide-and-conquer regime above it. The D&C paths share a power
//! table `(10⁹)^(2^k)` built by repeated squaring, so the splits line up
//! with whole base-10⁹ words: converting decimal to binary splits the
//! decimal word vector at a power-of-two word count and combines with one
//! multiplication per level, and converting binary to decimal peels the
//! value apart with one division per level. Every non-leaf step feeds the
//! sub-quadratic multiply/divide kernels, which is what brings the whole
//! conversion to O(M(n)·log n).

use tracing::trace;

use super::super::biguint::core::{cmp_words, trim_words, BASE};
use super::core::add_bin;
use super::div::divmod_bin;
use super::mul::mul_bin;

/// Decimal word count at or below which Horner conversion is used.
const DEC_SIMPLE_MAX: usize = 64;

/// Decimal word count at or below which the D&C recursion bottoms out.
const DEC_BASE_CASE: usize = 32;

/// Binary word count at or below which repeated division is used.
const BIN_SIMPLE_MAX: usize = 128;

/// Binary word count at or below which the D&C recursion bottoms out.
const BIN_BASE_CASE: usize = 64;

/// Builds `(10⁹)^(2^k)` as binary magnitudes, for k = 0..=levels.
fn power_table(levels: usize) -> Vec<Vec<u32>> {
    let mut table = Vec::with_capacity(levels + 1);
    table.push(vec![BASE as u32]);
    for k in 1..=levels {
        let prev = &table[k - 1];
        table.push(mul_bin(prev, prev));
    }
    table
}

/// Converts a base-10⁹ magnitude (little-endian words) to base 2³².
pub(crate) fn biguint_to_binary(dec: &crate::integer::biguint::BigUint) -> Vec<u32> {
    let words = dec.words();
    if words.len() <= DEC_SIMPLE_MAX {
        return dec_to_bin_simple(words);
    }
    trace!(decimal_words = words.len(), "d&c decimal-to-binary conversion");
    let mut levels = 0;
    while (1usize << (levels + 1)) <= words.len() / 2 {
        levels += 1;
    }
    let table = power_table(levels);
    dec_to_bin_rec(words, &table)
}

fn dec_to_bin_rec(words: &[u32], table: &[Vec<u32>]) -> Vec<u32> {
    if words.len() <= DEC_BASE_CASE {
        return dec_to_bin_simple(words);
    }
    // split so the low part is exactly 2^l decimal words
    let half = words.len() / 2;
    let mut l = 0;
    while l + 1 < table.len() && (1usize << (l + 1)) <= half {
        l += 1;
    }
    let m = 1usize << l;
    let (lo, hi) = words.split_at(m);

    let hi_bin = dec_to_bin_rec(hi, table);
    let lo_bin = dec_to_bin_rec(lo, table);

    let mut out = mul_bin(&hi_bin, &table[l]);
    out = add_bin(&out, &lo_bin);
    out
}

/// Horner evaluation, one base-10⁹ word at a time.
fn dec_to_bin_simple(words: &[u32]) -> Vec<u32> {
    let mut acc: Vec<u32> = vec![0];
    for &w in words.iter().rev() {
        let mut carry = w as u64;
        for x in acc.iter_mut() {
            let cur = *x as u64 * BASE + carry;
            *x = cur as u32;
            carry = cur >> 32;
        }
        while carry > 0 {
            acc.push(carry as u32);
            carry >>= 32;
        }
    }
    trim_words(&mut acc);
    acc
}

/// Converts a base-2³² magnitude (little-endian words) to base 10⁹.
pub(crate) fn binary_to_biguint(bin: &[u32]) -> Vec<u32> {
    if bin.len() <= BIN_SIMPLE_MAX {
        return bin_to_dec_simple(bin);
    }
    trace!(binary_words = bin.len(), "d&c binary-to-decimal conversion");
    let mut levels = 0;
    while power_table_entry_len(levels + 1) <= bin.len() {
        levels += 1;
    }
    let table = power_table(levels);
    bin_to_dec_rec(bin, &table)
}

/// Word length of `(10⁹)^(2^k)` without building it: the value has
/// `2^k * log2(10⁹)` bits, just under 30 bits per decimal word.
fn power_table_entry_len(k: usize) -> usize {
    // ceil(2^k * 29.897 / 32) bounded from below; used only as a build
    // cutoff, the recursion compares against the real table entries
    ((1usize << k) * 30).div_ceil(32)
}

fn bin_to_dec_rec(bin: &[u32], table: &[Vec<u32>]) -> Vec<u32> {
    if bin.len() <= BIN_BASE_CASE {
        return bin_to_dec_simple(bin);
    }
    // largest level whose power still fits under the value
    let mut l = table.len() - 1;
    while l > 0 && cmp_words(&table[l], bin) == std::cmp::Ordering::Greater {
        l -= 1;
    }
    let (q, r) = divmod_bin(bin, &table[l]);
    let q_dec = bin_to_dec_rec(&q, table);
    let r_dec = bin_to_dec_rec(&r, table);

    // r < (10⁹)^(2^l), so its decimal form fits in 2^l low words exactly
    let mut out = r_dec;
    out.resize(1usize << l, 0);
    out.extend_from_slice(&q_dec);
    trim_words(&mut out);
    out
}

/// Repeated division by 10⁹, emitting one decimal word per round.
fn bin_to_dec_simple(bin: &[u32]) -> Vec<u32> {
    let mut rem = bin.to_vec();
    trim_words(&mut rem);
    let mut out = Vec::new();
    while !(rem.len() == 1 && rem[0] == 0) {
        let mut q = vec![0u32; rem.len()];
        let mut carry = 0u64;
        for i in (0..rem.len()).rev() {
            let cur = (carry << 32) | rem[i] as u64;
            q[i] = (cur / BASE) as u32;
            carry = cur % BASE;
        }
        trim_words(&mut q);
        out.push(carry as u32);
        rem = q;
    }
    if out.is_empty() {
        out.push(0);
    }
    out
}
