use chrono::NaiveDate;
use climate_dashboard::models::{Field, Selection, TemperatureRecord, TemperatureTable};
use climate_dashboard::processors::{extremes_for_year, trend_line, TemperatureQuery};
use climate_dashboard::{render_with, DashboardConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// Synthetic table: `countries` x 123 years x 12 months
fn create_test_table(countries: usize) -> TemperatureTable {
    let mut records = Vec::with_capacity(countries * 123 * 12);

    for c in 0..countries {
        let country = format!("Country {}", c);
        let latitude = -60.0 + (c as f64 * 7.3) % 120.0;
        let longitude = -170.0 + (c as f64 * 13.7) % 340.0;

        for year in 1890..=2012 {
            let yearly = 10.0 + (c as f64) * 0.1 + (year - 1890) as f64 * 0.01;
            for month in 1..=12u32 {
                records.push(TemperatureRecord::new(
                    country.clone(),
                    year,
                    NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
                    yearly + (month as f64 - 6.5),
                    yearly,
                    latitude,
                    longitude,
                ));
            }
        }
    }

    TemperatureTable::new(records)
}

fn benchmark_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filters");

    for countries in [10, 100] {
        let table = create_test_table(countries);
        let query = TemperatureQuery::new(&table);

        group.bench_with_input(
            BenchmarkId::new("country_and_year", countries),
            &countries,
            |b, _| b.iter(|| query.filter_by_country_and_year(black_box("Country 5"), black_box(2012))),
        );

        group.bench_with_input(
            BenchmarkId::new("country", countries),
            &countries,
            |b, _| b.iter(|| query.filter_by_country(black_box("Country 5"))),
        );
    }

    group.finish();
}

fn benchmark_aggregations(c: &mut Criterion) {
    let table = create_test_table(10);
    let query = TemperatureQuery::new(&table);
    let country_rows = query.filter_by_country("Country 5");
    let year_rows = query.filter_by_country_and_year("Country 5", 2012);

    c.bench_function("trend_line", |b| {
        b.iter(|| {
            trend_line(
                black_box(&country_rows),
                Field::Year,
                Field::YearlyAverageTemperature,
            )
        })
    });

    c.bench_function("extremes_for_year", |b| {
        b.iter(|| extremes_for_year(black_box(&year_rows)))
    });
}

fn benchmark_render(c: &mut Criterion) {
    let table = create_test_table(100);
    let config = DashboardConfig::default();
    let selection = Selection::new("Country 42", 2012);

    c.bench_function("render_cycle", |b| {
        b.iter(|| render_with(black_box(&table), black_box(&selection), &config))
    });
}

criterion_group!(
    benches,
    benchmark_filters,
    benchmark_aggregations,
    benchmark_render
);
criterion_main!(benches);
