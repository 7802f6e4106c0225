// Criterion benchmarks for Hotel Ratings

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hotel_ratings::models::{Hotel, HotelRatings, RatingCategory, RatingThresholds, SimpleCriteria};
use hotel_ratings::{FilterEngine, RecordStore};
use std::sync::Arc;

const CITIES: &[(&str, &str)] = &[
    ("Paris", "France"),
    ("Lyon", "France"),
    ("Rome", "Italy"),
    ("Milan", "Italy"),
    ("Berlin", "Germany"),
    ("Munich", "Germany"),
    ("Madrid", "Spain"),
    ("Lisbon", "Portugal"),
];

fn create_store(count: usize) -> RecordStore {
    let hotels: Vec<Hotel> = (0..count)
        .map(|i| {
            let (city, country) = CITIES[i % CITIES.len()];
            Hotel::new(i as i32, format!("Hotel {} {}", city, i), city, country)
        })
        .collect();

    // Roughly two thirds of the hotels are rated
    let ratings: Vec<HotelRatings> = (0..count)
        .filter(|i| i % 3 != 0)
        .map(|i| {
            let base = 1.0 + (i % 40) as f64 / 10.0;
            HotelRatings {
                hotel_id: i as i32,
                service: base,
                price: (base + 0.3).min(5.0),
                room: (base - 0.2).max(1.0),
                location: (base + 0.5).min(5.0),
                overall: base,
                total_reviews: (i % 500) as u32,
            }
        })
        .collect();

    RecordStore::from_hotels(hotels, ratings)
}

fn bench_simple_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_simple");

    for size in [100, 1_000, 10_000].iter() {
        let engine = FilterEngine::new(Arc::new(create_store(*size)));
        let criteria = SimpleCriteria::new("rome", "Rome", "Italy");

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| engine.filter_simple(black_box(&criteria)).len());
        });
    }

    group.finish();
}

fn bench_wildcard_listing(c: &mut Criterion) {
    let engine = FilterEngine::new(Arc::new(create_store(10_000)));

    c.bench_function("filter_simple_wildcard_10000", |b| {
        b.iter(|| engine.filter_simple(black_box(&SimpleCriteria::default())).len());
    });
}

fn bench_advanced_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_advanced");

    for size in [100, 1_000, 10_000].iter() {
        let engine = FilterEngine::new(Arc::new(create_store(*size)));
        let thresholds = RatingThresholds::with_overall(3.5).with(RatingCategory::Location, 4.0);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| engine.filter_advanced(black_box(&thresholds)).len());
        });
    }

    group.finish();
}

fn bench_details_lookup(c: &mut Criterion) {
    let engine = FilterEngine::new(Arc::new(create_store(10_000)));

    c.bench_function("details_lookup", |b| {
        b.iter(|| engine.details(black_box(4_242)).is_some());
    });
}

criterion_group!(
    benches,
    bench_simple_filter,
    bench_wildcard_listing,
    bench_advanced_filter,
    bench_details_lookup
);
criterion_main!(benches);
