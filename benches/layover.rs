use criterion::{Criterion, criterion_group, criterion_main};
use layover::{
    analysis::{fare_difference_analysis, taxi_price_per_km_analysis},
    dataset::Dataset,
    repository::{Repository, flatten},
    view::{self, Axis},
};
use std::{env, hint::black_box, path::PathBuf, time::Duration};

fn criterion_benchmark(c: &mut Criterion) {
    let data_path = match env::var("AIRPORT_DATA_PATH") {
        Ok(path_str) => PathBuf::from(path_str),
        Err(_) => PathBuf::from(format!("{}/data/airports.json", env!("CARGO_MANIFEST_DIR"))),
    };

    let dataset = Dataset::new().from_file(data_path);
    let repository = Repository::new()
        .load_dataset(&dataset)
        .expect("Failed to build repository");

    let mut group = c.benchmark_group("Pipeline");

    group.warm_up_time(Duration::from_secs(3));

    group.measurement_time(Duration::from_secs(10));

    group.bench_function("Flatten", |b| {
        b.iter(|| black_box(flatten(&repository.airports)))
    });

    group.bench_function("Fare spread", |b| {
        b.iter(|| black_box(fare_difference_analysis(&repository.rows)))
    });

    group.bench_function("Taxi price per km", |b| {
        b.iter(|| black_box(taxi_price_per_km_analysis(&repository.rows)))
    });

    group.bench_function("Scatter", |b| {
        b.iter(|| black_box(view::scatter(&repository.rows, Axis::DEFAULT_X, Axis::DEFAULT_Y)))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
