use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use robin_hood_table::cs::hashing::RobinHoodTable;
use std::collections::HashSet;

const SIZES: &[usize] = &[1_000, 10_000, 100_000];

fn random_values(n: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n).map(|_| rng.gen()).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &size in SIZES {
        let values = random_values(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("RobinHoodTable", size), &values, |b, values| {
            b.iter(|| {
                let mut table = RobinHoodTable::new();
                for &v in values {
                    table.insert(black_box(v));
                }
                black_box(table)
            });
        });

        group.bench_with_input(BenchmarkId::new("std::HashSet", size), &values, |b, values| {
            b.iter(|| {
                let mut set = HashSet::new();
                for &v in values {
                    set.insert(black_box(v));
                }
                black_box(set)
            });
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("includes");
    for &size in SIZES {
        let values = random_values(size);
        let mut table = RobinHoodTable::new();
        for &v in &values {
            table.insert(v);
        }
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("hit", size), &values, |b, values| {
            b.iter(|| values.iter().filter(|v| table.includes(black_box(v))).count());
        });

        let misses: Vec<u64> = values.iter().map(|v| v.wrapping_add(1)).collect();
        group.bench_with_input(BenchmarkId::new("miss", size), &misses, |b, misses| {
            b.iter(|| misses.iter().filter(|v| table.includes(black_box(v))).count());
        });
    }
    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let size = 10_000;
    let values = random_values(size * 2);
    c.bench_function("delete_reinsert_churn", |b| {
        b.iter(|| {
            let mut table = RobinHoodTable::new();
            for &v in &values[..size] {
                table.insert(v);
            }
            for (old, &new) in values[..size].iter().zip(&values[size..]) {
                table.delete(old);
                table.insert(black_box(new));
            }
            black_box(table.tombstones())
        });
    });
}

criterion_group!(benches, bench_insert, bench_lookup, bench_churn);
criterion_main!(benches);
