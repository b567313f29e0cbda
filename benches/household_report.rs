//! Household assessment benchmarks
//!
//! Run with: `cargo bench --bench household_report`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use footprint_engine::*;

fn full_household() -> HouseholdInput {
    HouseholdInput {
        electricity: Some(ElectricityInput::new(450.0, "mixed").with_household_size(3)),
        transport: Some(TransportInput {
            car_km_week: 150.0,
            bike_km_week: 10.0,
            public_transport_km_week: 20.0,
            flight_hours_year: 12.0,
        }),
        water: Some(WaterInput::new(300.0, 3)),
        waste: Some(WasteInput::new(15.0, 8.0, 3.0, 3)),
    }
}

fn bench_calculators(c: &mut Criterion) {
    let config = EngineConfig::default();
    let input = full_household();

    c.bench_function("calculate_transport", |b| {
        let transport = input.transport.clone().unwrap_or_default();
        b.iter(|| calculate_transport(black_box(&transport), &config))
    });

    c.bench_function("rank_waste", |b| {
        let waste = WasteInput::new(15.0, 8.0, 3.0, 3);
        b.iter(|| rank_waste(black_box(&waste), &config))
    });
}

fn bench_household(c: &mut Criterion) {
    let scorer = FootprintScorer::default();
    let input = full_household();

    c.bench_function("assess_household", |b| b.iter(|| scorer.assess(black_box(&input))));
}

criterion_group!(benches, bench_calculators, bench_household);
criterion_main!(benches);
