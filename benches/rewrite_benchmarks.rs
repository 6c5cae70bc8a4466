//! Benchmarks for parsing, truth table generation and simplification
//!
//! Inputs are built as chains over a growing number of variables so the cost of each
//! stage can be compared against the width of the expression.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use proposition::{parse_statement, Expression, Simplifier, TruthTable};

/// `(x0 -> x1) * (x1 -> x2) * ... * !(x0 * xn)` over `n` variables
fn implication_chain(n: usize) -> String {
    let mut terms: Vec<String> = (0..n - 1)
        .map(|i| format!("(x{} -> x{})", i, i + 1))
        .collect();
    terms.push(format!("!(x0 * x{})", n - 1));
    terms.join(" * ")
}

/// `x0 + !!x0 + x1 + !!x1 + ...`, heavy on the or-chain rules
fn redundant_disjunction(n: usize) -> String {
    (0..n)
        .map(|i| format!("x{} + !!x{}", i, i))
        .collect::<Vec<_>>()
        .join(" + ")
}

fn expression(text: &str) -> Expression {
    parse_statement(&format!("simplify {}", text))
        .unwrap()
        .into_expression()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for n in [4, 16, 64] {
        let line = format!("table {}", implication_chain(n));
        group.throughput(Throughput::Bytes(line.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &line, |b, line| {
            b.iter(|| parse_statement(black_box(line)).unwrap());
        });
    }

    group.finish();
}

fn bench_truth_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("truth_table");

    for n in [2, 6, 10] {
        let expr = expression(&implication_chain(n));
        group.throughput(Throughput::Elements(1 << n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &expr, |b, expr| {
            b.iter(|| TruthTable::generate(black_box(expr)));
        });
    }

    group.finish();
}

fn bench_simplify(c: &mut Criterion) {
    let simplifier = Simplifier::new();
    let mut group = c.benchmark_group("simplify");

    for n in [4, 16, 32] {
        let chain = expression(&implication_chain(n));
        group.bench_with_input(BenchmarkId::new("implications", n), &chain, |b, expr| {
            b.iter(|| simplifier.simplify(black_box(expr)));
        });

        let redundant = expression(&redundant_disjunction(n));
        group.bench_with_input(BenchmarkId::new("redundant_or", n), &redundant, |b, expr| {
            b.iter(|| simplifier.simplify(black_box(expr)));
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let table = TruthTable::generate(&expression(&implication_chain(8)));

    c.bench_function("render_8_variables", |b| {
        b.iter(|| black_box(&table).render(true));
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_truth_table,
    bench_simplify,
    bench_render
);
criterion_main!(benches);
