use decima::BinInt;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_isqrt(c: &mut Criterion) {
    let medium = BinInt::one().shl_bits(2_048);
    let large = BinInt::one().shl_bits(40_000);

    c.bench_function("isqrt 2048 bits", |b| {
        b.iter(|| black_box(&medium).isqrt().unwrap())
    });
    c.bench_function("isqrt 40000 bits", |b| {
        b.iter(|| black_box(&large).isqrt().unwrap())
    });
}

criterion_group!(benches, bench_isqrt);
criterion_main!(benches);
