// benches/normalize.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use serde_json::json;

use grid_carbon::core::{normalize, validate};

fn bench_validate(c: &mut Criterion) {
    let codes = ["US-NEISO", "cm", "US-CAL-CISO", "USA", "US-", "  dk-dk1  "];

    c.bench_function("region_codes", |b| {
        b.iter(|| {
            codes.iter().filter(|c| validate::is_valid_region_code(black_box(c))).count()
        })
    });
}

fn bench_normalize(c: &mut Criterion) {
    let flat = json!({ "zone": "DE", "carbonIntensity": 310, "fossilFuelPercentage": 41.2 });
    let nested = json!({ "data": { "zone": "FR", "carbonIntensity": 42, "fossil": 8 } });
    let empty = json!({});

    c.bench_function("normalize_flat", |b| b.iter(|| normalize(black_box(&flat), "DE")));
    c.bench_function("normalize_nested", |b| b.iter(|| normalize(black_box(&nested), "FR")));
    c.bench_function("normalize_empty", |b| b.iter(|| normalize(black_box(&empty), "CM")));
}

criterion_group!(benches, bench_validate, bench_normalize);
criterion_main!(benches);
