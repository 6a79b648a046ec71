use carbon_estimator::{EmissionModel, LifestyleInput};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn questionnaire(i: u32) -> LifestyleInput {
    LifestyleInput {
        flights_short: i % 5,
        flights_long: i % 3,
        transport_type: "Car (Diesel)".to_string(),
        daily_distance: (i % 40) as f64,
        meat_frequency: "3-4 times per week".to_string(),
        dairy_frequency: "Regularly".to_string(),
        clothing_spend: (i % 200) as f64,
        online_shopping: (i % 150) as f64,
        home_type: "Large House".to_string(),
        heating_type: "Oil Heating".to_string(),
    }
}

fn bench_single(c: &mut Criterion) {
    let input = questionnaire(7);
    c.bench_function("compute_single", |b| {
        b.iter(|| EmissionModel::compute(black_box(&input)))
    });
}

fn bench_batch(c: &mut Criterion) {
    let inputs: Vec<LifestyleInput> = (0..10_000).map(questionnaire).collect();
    c.bench_function("compute_batch_10k", |b| {
        b.iter(|| EmissionModel::compute_batch(black_box(&inputs)))
    });
}

criterion_group!(benches, bench_single, bench_batch);
criterion_main!(benches);
