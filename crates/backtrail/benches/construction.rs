// Baseline benchmarks for result construction and propagation.
// Run with: cargo bench

use backtrail::{Value, err, ok};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

/// Success construction carries no trace and should stay trivially cheap.
fn bench_success_construction(c: &mut Criterion) {
    c.bench_function("success_construction", |b| {
        b.iter(|| {
            let result: Value<u64> = ok(black_box(42u64)).into();
            black_box(result.is_ok());
        });
    });
}

/// Error construction walks the stack (no symbol resolution); this is the
/// deliberate cost asymmetry between the two paths.
fn bench_error_construction(c: &mut Criterion) {
    c.bench_function("error_construction", |b| {
        b.iter(|| {
            let result: Value<u64> = err(black_box("bench error")).into();
            black_box(result.is_err());
        });
    });
}

/// Forwarding moves the existing capture and must not re-walk the stack.
fn bench_forwarding(c: &mut Criterion) {
    c.bench_function("forwarding", |b| {
        b.iter_batched(
            || -> Value<u64> { err("bench error").into() },
            |result| black_box(result.forward()),
            BatchSize::SmallInput,
        );
    });
}

/// Rendering resolves symbols; only a surfaced error ever pays this.
fn bench_trace_render(c: &mut Criterion) {
    let failure = err("bench error");
    c.bench_function("trace_render", |b| {
        b.iter(|| black_box(failure.trace().render()));
    });
}

criterion_group!(
    benches,
    bench_success_construction,
    bench_error_construction,
    bench_forwarding,
    bench_trace_render
);
criterion_main!(benches);
