//! Performance benchmarks for predicate construction and evaluation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::collections::HashMap;
use std::sync::Arc;
use typebridge_core::{Comparator, NoopSink, PredicateBuilder, Value};

type Row = HashMap<String, Value>;

fn builder() -> PredicateBuilder {
    PredicateBuilder::with_sink(Arc::new(NoopSink))
}

fn bench_single_predicate(c: &mut Criterion) {
    let builder = builder();
    let mut group = c.benchmark_group("single_predicate");

    for comparator in [Comparator::Eq, Comparator::Lt, Comparator::Ge] {
        group.bench_with_input(
            BenchmarkId::from_parameter(comparator.keyword()),
            &comparator,
            |b, &comparator| {
                b.iter(|| {
                    black_box(builder.build_predicate::<Row, _>("price", Some(1850), comparator))
                })
            },
        );
    }

    group.finish();
}

fn bench_specification(c: &mut Criterion) {
    let builder = builder();
    let mut group = c.benchmark_group("specification");

    for size in [2i64, 16, 256] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                black_box(builder.build_specification::<Row, _, _>(
                    "category",
                    Some(0..size),
                    Comparator::Eq,
                ))
            })
        });
    }

    group.finish();
}

fn bench_evaluation(c: &mut Criterion) {
    let spec = builder()
        .build_specification::<Row, _, _>("category", Some(0i64..64), Comparator::Eq)
        .expect("valid values")
        .expect("non-empty");
    let mut row = Row::new();
    row.insert("category".to_string(), Value::Int(63));

    c.bench_function("evaluate_64_disjuncts", |b| {
        b.iter(|| black_box(spec.is_satisfied_by(&row)))
    });
}

fn bench_fingerprint(c: &mut Criterion) {
    let spec = builder()
        .build_specification::<Row, _, _>("category", Some(0i64..64), Comparator::Eq)
        .expect("valid values")
        .expect("non-empty");

    c.bench_function("fingerprint_64_disjuncts", |b| {
        b.iter(|| black_box(spec.fingerprint()))
    });
}

criterion_group!(
    benches,
    bench_single_predicate,
    bench_specification,
    bench_evaluation,
    bench_fingerprint
);
criterion_main!(benches);
