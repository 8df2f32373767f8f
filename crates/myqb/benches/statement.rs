use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use myqb::{SelectBuilder, SqlBuilder, select};

/// Build a SELECT with `n` columns and `n` WHERE conditions.
fn build_select(n: usize) -> SelectBuilder {
    let mut qb = select("t");
    for i in 0..n {
        qb = qb
            .column_raw(format!("col{i}"))
            .and_where(format!("col{i}"), "=", i as i64);
    }
    qb
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement/render");

    for n in [1, 5, 10, 50, 100] {
        let qb = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.build().unwrap()));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement/build_and_render");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let qb = build_select(n);
                black_box(qb.build().unwrap());
            });
        });
    }

    group.finish();
}

fn bench_in_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement/in_list");

    for n in [5i64, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let qb = select("t").and_where("id", "in", values.clone());
                black_box(qb.build().unwrap());
            });
        });
    }

    group.finish();
}

fn bench_grouped_conditions(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement/grouped");

    for n in [1, 5, 10, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut qb = select("t");
                for i in 0..n {
                    qb = qb.or_where_group(|c| {
                        c.and_where(format!("a{i}"), "=", i as i64);
                        c.or_where(format!("b{i}"), ">", i as i64);
                    });
                }
                black_box(qb.build().unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render,
    bench_build_and_render,
    bench_in_list,
    bench_grouped_conditions
);
criterion_main!(benches);
