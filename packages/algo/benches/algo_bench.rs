//! Benchmark suite for coach-algo
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use coach_algo::{classify, partition, update, Confidence, Skill, StudentProfile};

fn bench_update(c: &mut Criterion) {
    c.bench_function("mastery::update", |b| {
        let mut profile = StudentProfile::new("bench", 3, 30);
        b.iter(|| {
            update(
                black_box(&mut profile),
                Skill::Addition,
                true,
                Confidence::Normal,
            )
        })
    });
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("mastery::classify", |b| {
        b.iter(|| classify(black_box(0.73)))
    });
}

fn bench_partition(c: &mut Criterion) {
    c.bench_function("mastery::partition", |b| {
        let mut profile = StudentProfile::new("bench", 3, 30);
        for (i, skill) in Skill::ALL.iter().enumerate() {
            profile.scores.insert(*skill, (i as f64) / 14.0);
        }
        b.iter(|| partition(black_box(&profile)))
    });
}

criterion_group!(benches, bench_update, bench_classify, bench_partition);
criterion_main!(benches);
