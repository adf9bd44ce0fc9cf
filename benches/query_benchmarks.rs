use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use geonear::{Point, QueryEngine, Record, RecordSet, compute_bounding_box};
use std::hint::black_box;

fn grid(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let lat = -80.0 + (i as f64 * 0.37) % 160.0;
            let lon = -180.0 + (i as f64 * 1.13) % 360.0;
            Record::new(i as i64, Point::new(lon, lat)).with_population((i % 1000) as i64)
        })
        .collect()
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [1_000, 10_000, 100_000] {
        let records = grid(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| {
                QueryEngine::builder()
                    .records(RecordSet::from_records(records.clone()))
                    .build()
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn benchmark_queries(c: &mut Criterion) {
    let engine = QueryEngine::builder()
        .records(RecordSet::from_records(grid(100_000)))
        .build()
        .unwrap();

    c.bench_function("find_by_id", |b| {
        let mut id = 0;
        b.iter(|| {
            id = (id + 7919) % 100_000;
            black_box(engine.find_by_id(black_box(id)))
        });
    });

    let mut group = c.benchmark_group("find_near");
    for radius in [1.0, 10.0, 100.0] {
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &radius| {
            b.iter(|| black_box(engine.find_near(black_box(4242), radius, true).unwrap()));
        });
    }
    group.finish();

    c.bench_function("compute_bounding_box", |b| {
        let center = Point::new(-71.269204, 46.716993);
        b.iter(|| compute_bounding_box(black_box(&center), black_box(2.0)).unwrap());
    });
}

criterion_group!(benches, benchmark_build, benchmark_queries);
criterion_main!(benches);
