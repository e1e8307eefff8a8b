// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use bracket_core::math::interval::ClosedInterval;
use chrono::{TimeDelta, TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const PAIRS: usize = 1_024;

fn random_interval(rng: &mut StdRng) -> ClosedInterval<i64> {
    let a: i64 = rng.random_range(-10_000..10_000);
    let b: i64 = rng.random_range(-10_000..10_000);
    ClosedInterval::new(a.min(b), a.max(b)).expect("ordered bounds")
}

fn integer_pairs() -> Vec<(ClosedInterval<i64>, ClosedInterval<i64>)> {
    let mut rng = StdRng::seed_from_u64(0xB4AC);
    (0..PAIRS)
        .map(|_| (random_interval(&mut rng), random_interval(&mut rng)))
        .collect()
}

fn real_pairs() -> Vec<(ClosedInterval<f64>, ClosedInterval<f64>)> {
    let conv = |iv: ClosedInterval<i64>| {
        ClosedInterval::new(iv.start() as f64 * 0.5, iv.end() as f64 * 0.5)
            .expect("ordered bounds")
    };
    integer_pairs()
        .into_iter()
        .map(|(a, b)| (conv(a), conv(b)))
        .collect()
}

fn bench_integer_operations(c: &mut Criterion) {
    let pairs = integer_pairs();
    let mut group = c.benchmark_group("integer");
    group.throughput(Throughput::Elements(PAIRS as u64));

    group.bench_with_input(BenchmarkId::new("union", PAIRS), &pairs, |b, pairs| {
        b.iter(|| {
            for (x, y) in pairs {
                black_box(x.union(*y));
            }
        })
    });
    group.bench_with_input(
        BenchmarkId::new("intersection", PAIRS),
        &pairs,
        |b, pairs| {
            b.iter(|| {
                for (x, y) in pairs {
                    black_box(x.intersection(*y));
                }
            })
        },
    );
    group.bench_with_input(BenchmarkId::new("difference", PAIRS), &pairs, |b, pairs| {
        b.iter(|| {
            for (x, y) in pairs {
                black_box(x.difference(*y));
            }
        })
    });
    group.finish();
}

fn bench_continuous_operations(c: &mut Criterion) {
    let pairs = real_pairs();
    let mut group = c.benchmark_group("real");
    group.throughput(Throughput::Elements(PAIRS as u64));

    group.bench_with_input(BenchmarkId::new("difference", PAIRS), &pairs, |b, pairs| {
        b.iter(|| {
            for (x, y) in pairs {
                black_box(x.difference(*y));
            }
        })
    });
    group.bench_with_input(
        BenchmarkId::new("difference_by", PAIRS),
        &pairs,
        |b, pairs| {
            b.iter(|| {
                for (x, y) in pairs {
                    black_box(x.difference_by(*y, 1e-9));
                }
            })
        },
    );
    group.finish();
}

fn bench_instant_difference(c: &mut Criterion) {
    let origin = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid origin");
    let conv = |iv: ClosedInterval<i64>| {
        ClosedInterval::new(
            origin + TimeDelta::seconds(iv.start()),
            origin + TimeDelta::seconds(iv.end()),
        )
        .expect("ordered bounds")
    };
    let pairs: Vec<_> = integer_pairs()
        .into_iter()
        .map(|(a, b)| (conv(a), conv(b)))
        .collect();

    c.bench_function("instant/difference_by", |b| {
        b.iter(|| {
            for (x, y) in &pairs {
                black_box(x.difference_by(*y, TimeDelta::milliseconds(1)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_integer_operations,
    bench_continuous_operations,
    bench_instant_difference
);
criterion_main!(benches);
