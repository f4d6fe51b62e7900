use criterion::{Criterion, black_box, criterion_group, criterion_main};
use launchboard::charts::{LAUNCH_SITES, SiteSelection, payload_scatter, success_pie};
use launchboard::dataset::{LaunchDataset, LaunchRecord};

const BOOSTER_CATEGORIES: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

fn create_sample_dataset(rows: usize) -> LaunchDataset {
    let records = (0..rows)
        .map(|i| LaunchRecord {
            launch_site: LAUNCH_SITES[i % LAUNCH_SITES.len()].to_string(),
            class: (i % 3 == 0) as u8,
            payload_mass_kg: (i % 10000) as f64,
            booster_version_category: BOOSTER_CATEGORIES[i % BOOSTER_CATEGORIES.len()]
                .to_string(),
        })
        .collect();
    LaunchDataset::from_records(records).expect("sample dataset should not be empty")
}

fn bench_chart_builders(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart_builders");

    let dataset = create_sample_dataset(10_000);
    let range = dataset.payload_bounds();
    let site = SiteSelection::Site(LAUNCH_SITES[0].to_string());

    group.bench_function("success_pie_all_sites", |b| {
        b.iter(|| black_box(success_pie(&dataset, &SiteSelection::All)));
    });

    group.bench_function("success_pie_single_site", |b| {
        b.iter(|| black_box(success_pie(&dataset, &site)));
    });

    group.bench_function("payload_scatter_all_sites", |b| {
        b.iter(|| black_box(payload_scatter(&dataset, &SiteSelection::All, range)));
    });

    group.bench_function("payload_scatter_single_site", |b| {
        b.iter(|| black_box(payload_scatter(&dataset, &site, range)));
    });

    group.finish();
}

fn bench_dataset_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset_queries");

    let dataset = create_sample_dataset(10_000);

    group.bench_function("site_success_totals", |b| {
        b.iter(|| black_box(dataset.site_success_totals()));
    });

    group.bench_function("success_rate", |b| {
        b.iter(|| black_box(dataset.success_rate(LAUNCH_SITES[2])));
    });

    group.finish();
}

criterion_group!(benches, bench_chart_builders, bench_dataset_queries);
criterion_main!(benches);
