//! Benchmark tests for formula compilation and evaluation.
//!
//! Run with: cargo bench --bench formula_benchmarks

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use openblend_formula::Formula;

fn parse_or_identity(text: &str) -> Formula {
    match Formula::parse(text) {
        Ok(formula) => formula,
        Err(_) => match Formula::parse("x") {
            Ok(fallback) => fallback,
            Err(_) => panic!("identity formula must parse"),
        },
    }
}

fn bench_parse_simple(c: &mut Criterion) {
    c.bench_function("parse_simple", |b| {
        b.iter(|| std::hint::black_box(Formula::parse(std::hint::black_box("x ** 2 + 1"))));
    });
}

fn bench_parse_gaussian(c: &mut Criterion) {
    let text = "exp(-((x - 1) / 0.5) ** 2 / 2) / (sqrt(2 * pi) * 0.5)";
    c.bench_function("parse_gaussian", |b| {
        b.iter(|| std::hint::black_box(Formula::parse(std::hint::black_box(text))));
    });
}

fn bench_eval_sequence_simple(c: &mut Criterion) {
    let formula = parse_or_identity("x ** 2 + 1");
    let coords: Vec<f64> = (0..=1000).map(|i| f64::from(i) / 1000.0).collect();

    let mut group = c.benchmark_group("eval_sequence");
    group.throughput(Throughput::Elements(coords.len() as u64));
    group.bench_function("simple", |b| {
        b.iter(|| std::hint::black_box(formula.eval_sequence(std::hint::black_box(&coords))));
    });
    group.finish();
}

fn bench_eval_sequence_gaussian(c: &mut Criterion) {
    let formula = parse_or_identity("exp(-((x - 1) / 0.5) ** 2 / 2) / (sqrt(2 * pi) * 0.5)");
    let coords: Vec<f64> = (0..=1000).map(|i| f64::from(i) / 500.0).collect();

    let mut group = c.benchmark_group("eval_sequence");
    group.throughput(Throughput::Elements(coords.len() as u64));
    group.bench_function("gaussian", |b| {
        b.iter(|| std::hint::black_box(formula.eval_sequence(std::hint::black_box(&coords))));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_parse_simple,
    bench_parse_gaussian,
    bench_eval_sequence_simple,
    bench_eval_sequence_gaussian
);
criterion_main!(benches);
