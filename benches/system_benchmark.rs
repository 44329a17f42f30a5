use criterion::{criterion_group, criterion_main, Criterion};
use smart_skin_telemetry::sensor::{classify_severity, SensorKey, SyntheticGenerator};
use smart_skin_telemetry::store::{create_store, summarize};
use smart_skin_telemetry::Region;

const T0: i64 = 1_700_000_000_000;

fn benchmark_reading_synthesis(c: &mut Criterion) {
    let mut gen = SyntheticGenerator::new(42);
    let mut i = 0u64;
    c.bench_function("synthetic_reading", |b| {
        b.iter(|| {
            i += 1;
            gen.synthetic_reading(T0, i)
        })
    });
}

fn benchmark_full_store_tick(c: &mut Criterion) {
    let mut gen = SyntheticGenerator::new(42);
    let store = create_store(180, &mut gen, T0);
    c.bench_function("store_tick_full_history", |b| b.iter(|| store.tick(&mut gen, T0)));
}

fn benchmark_summary(c: &mut Criterion) {
    let mut gen = SyntheticGenerator::new(42);
    let store = create_store(180, &mut gen, T0);
    let history = store.history(Region::RightArm);
    c.bench_function("summarize_and_classify", |b| {
        b.iter(|| {
            let summary = summarize(history).ok();
            summary.map(|s| classify_severity(SensorKey::Pressure, s.last_reading.pressure))
        })
    });
}

criterion_group!(benches, benchmark_reading_synthesis, benchmark_full_store_tick, benchmark_summary);
criterion_main!(benches);
