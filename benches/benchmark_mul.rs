use decima::BigUint;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_mul(c: &mut Criterion) {
    let schoolbook: BigUint = "123456789".repeat(40).parse().unwrap();
    let karatsuba: BigUint = "123456789".repeat(400).parse().unwrap();

    c.bench_function("mul 40 words schoolbook", |b| {
        b.iter(|| black_box(&schoolbook) * black_box(&schoolbook))
    });
    c.bench_function("mul 400 words karatsuba", |b| {
        b.iter(|| black_box(&karatsuba) * black_box(&karatsuba))
    });
}

criterion_group!(benches, bench_mul);
criterion_main!(benches);
