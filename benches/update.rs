//! Benchmarks for the per-frame particle update.
//!
//! Run with: `cargo bench`

use backdrop::{ParticleSystem, SpawnContext, ThemeId};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("system_update");

    for id in ThemeId::ALL {
        group.bench_function(id.name(), |b| {
            let mut system = ParticleSystem::with_context(id, SpawnContext::from_seed(1));
            b.iter(|| {
                system.update();
                black_box(system.particles().len())
            })
        });
    }

    group.finish();
}

fn bench_seed(c: &mut Criterion) {
    let mut group = c.benchmark_group("system_seed");

    for id in ThemeId::ALL {
        group.bench_function(id.name(), |b| {
            b.iter(|| black_box(ParticleSystem::with_context(id, SpawnContext::from_seed(1))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_update, bench_seed);
criterion_main!(benches);
