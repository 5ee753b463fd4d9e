use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use relq_core::{AsQuery, SortSpec};

#[derive(Clone)]
struct Row {
    id: u32,
    country: u32,
    city: u32,
    total: i64,
}

fn rows(n: u32) -> Vec<Row> {
    (0..n)
        .map(|i| Row {
            id: i,
            country: i % 7,
            city: i % 31,
            total: i64::from((i * 7919) % 1000),
        })
        .collect()
}

fn bench_group_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_join");
    for size in [100u32, 1_000, 10_000] {
        let left = rows(size);
        let right = rows(size / 4);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                left.query()
                    .group_join(
                        right.query(),
                        |l| (l.country, l.city),
                        |r| (r.country, r.city),
                        |l, g| (l.id, g.len()),
                    )
                    .count()
            })
        });
    }
    group.finish();
}

fn bench_group_by(c: &mut Criterion) {
    let data = rows(10_000);
    c.bench_function("group_by_country_city", |b| {
        b.iter(|| {
            data.query()
                .group_by(|r| (r.country, r.city), |r| r.total)
                .iter()
                .map(|g| g.sum(|t| *t))
                .sum::<i64>()
        })
    });
}

fn bench_order_by(c: &mut Criterion) {
    let data = rows(10_000);
    c.bench_function("order_by_two_keys", |b| {
        b.iter(|| {
            let spec = SortSpec::asc(|r: &&Row| r.country).then_desc(|r| r.total);
            black_box(data.query().order_by(spec).count())
        })
    });
}

criterion_group!(benches, bench_group_join, bench_group_by, bench_order_by);
criterion_main!(benches);
