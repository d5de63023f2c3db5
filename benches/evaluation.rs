use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evalexpr::*;
use multicalc_rs::expr::Evaluator;
use rand::Rng;

/// Benchmark simple arithmetic expressions
fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simple arithmetic Expression Evaluation");

    let mut evaluator = Evaluator::new(64);

    let expr = "2 + 3";
    let postfix = evaluator.compile_expression(expr).unwrap();
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("compiled_arithmetic", |b| {
        b.iter(|| evaluator.evaluate_expression(black_box(expr)))
    });

    group.bench_function("precompiled_arithmetic", |b| {
        b.iter(|| evaluator.evaluate_postfix(black_box(&postfix)))
    });

    group.bench_function("native_rust_arithmetic", |b| b.iter(|| black_box(2.0 + 3.0)));

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });

    group.finish();
}

/// Benchmark complex arithmetic expressions
fn benchmark_complex_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Complex arithmetic Expression Evaluation");

    let mut evaluator = Evaluator::new(64);

    let expr = "(10 + 20) * 3 / (4 - 1) + 5";
    let postfix = evaluator.compile_expression(expr).unwrap();
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("compiled_complex_arithmetic", |b| {
        b.iter(|| evaluator.evaluate_expression(black_box(expr)))
    });

    group.bench_function("precompiled_complex_arithmetic", |b| {
        b.iter(|| evaluator.evaluate_postfix(black_box(&postfix)))
    });

    group.bench_function("native_rust_complex_arithmetic", |b| {
        b.iter(|| black_box((10.0 + 20.0) * 3.0 / (4.0 - 1.0) + 5.0))
    });

    group.bench_function("meval_complex_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_complex_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_complex_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });

    group.finish();
}

/// Benchmark a long, randomly generated flat expression
fn benchmark_random_expression(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random Expression Evaluation");

    let mut rng = rand::rng();
    let operators = ['+', '-', '*'];
    let mut expr = rng.random_range(1..100u32).to_string();
    for _ in 0..49 {
        expr.push(operators[rng.random_range(0..operators.len())]);
        expr.push_str(&rng.random_range(1..100u32).to_string());
    }

    let mut evaluator = Evaluator::new(64);
    let postfix = evaluator.compile_expression(&expr).unwrap();

    group.bench_function("compiled_random", |b| {
        b.iter(|| evaluator.evaluate_expression(black_box(&expr)))
    });

    group.bench_function("precompiled_random", |b| {
        b.iter(|| evaluator.evaluate_postfix(black_box(&postfix)))
    });

    group.bench_function("meval_random", |b| {
        b.iter(|| meval::eval_str(black_box(&expr)).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_simple_arithmetic,
    benchmark_complex_arithmetic,
    benchmark_random_expression
);
criterion_main!(benches);
