use criterion::{Criterion, criterion_group, criterion_main};
use inclause::prelude::*;
use std::hint::black_box;

fn bench_render(c: &mut Criterion) {
    let request = ClauseRequest::new("DEPT_ID", "deptIds").unwrap();
    let small = ParameterValue::array([Some(10), None, Some(20), Some(10)]);
    let large = ParameterValue::array((0..1_000).map(|i| (i % 50 != 0).then_some(i)));

    let mut group = c.benchmark_group("in_clause");
    group.bench_function("render_small", |b| {
        b.iter(|| InClause::IN.render(black_box(&request), black_box(Some(&small))))
    });
    group.bench_function("render_large", |b| {
        b.iter(|| InClause::NOT_IN.render(black_box(&request), black_box(Some(&large))))
    });
    group.bench_function("render_large_postgres", |b| {
        let clause = InClause::IN.with_dialect(Dialect::PostgreSQL);
        b.iter(|| clause.render_at(black_box(&request), black_box(Some(&large)), 1))
    });
    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let functions = ClauseFunctions::default();
    let tokens = ClauseTokens::new(["IN", "DEPT_ID", "deptIds"]);
    let query = QueryBuffer::default()
        .with_parameter("deptIds", ParameterValue::array((0..100).collect::<Vec<i32>>()));

    c.bench_function("clause_functions_apply", |b| {
        b.iter(|| {
            let mut query = query.clone();
            functions.apply(black_box(&tokens), &mut query).unwrap();
            query.finish()
        })
    });
}

criterion_group!(benches, bench_render, bench_apply);
criterion_main!(benches);
