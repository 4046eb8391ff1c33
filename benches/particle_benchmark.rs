/*
 * Particle Simulation Benchmark
 *
 * This file contains benchmarks for the particle simulation. It measures the
 * per-frame update under each mode, the Portal overlay, and the draw pass
 * into a headless recorder.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

use particle_mirror::{draw_particles, FrameRecorder, Mode, ParticleSystem, Target, Theme};

const WIDTH: f32 = 1280.0;
const HEIGHT: f32 = 720.0;

// A ring of targets in the middle of the canvas
fn ring_targets(count: usize) -> Vec<Target> {
    (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * std::f32::consts::TAU;
            Target::new(WIDTH / 2.0 + angle.cos() * 150.0, HEIGHT / 2.0 + angle.sin() * 150.0, 0.0)
        })
        .collect()
}

// Benchmark the update loop for each mode
fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");
    let targets = ring_targets(840);

    for num_particles in [1000, 10000, 50000].iter() {
        for mode in [Mode::Attract, Mode::Repel] {
            let id = BenchmarkId::new(mode.to_string(), num_particles);
            group.bench_with_input(id, num_particles, |b, &n| {
                let mut system = ParticleSystem::with_seed(n, WIDTH, HEIGHT, 42).unwrap();
                b.iter(|| {
                    system.update(black_box(&targets), mode, Theme::Rainbow).unwrap();
                });
            });
        }
    }

    group.finish();
}

// Benchmark the Portal overlay with no targets
fn bench_portal(c: &mut Criterion) {
    let mut group = c.benchmark_group("portal");
    let no_targets: Vec<Target> = Vec::new();

    for num_particles in [1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_particles), num_particles, |b, &n| {
            let mut system = ParticleSystem::with_seed(n, WIDTH, HEIGHT, 7).unwrap();
            b.iter(|| {
                system.update(black_box(&no_targets), Mode::Attract, Theme::Portal).unwrap();
            });
        });
    }

    group.finish();
}

// Benchmark the draw pass
fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw");

    for theme in [Theme::Rainbow, Theme::Galaxy, Theme::Portal] {
        group.bench_with_input(BenchmarkId::from_parameter(theme), &theme, |b, &theme| {
            let system = ParticleSystem::with_seed(10000, WIDTH, HEIGHT, 3).unwrap();
            let mut recorder = FrameRecorder::new();
            b.iter(|| {
                recorder.clear();
                black_box(draw_particles(&system, theme, &mut recorder));
            });
        });
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_update, bench_portal, bench_draw
}

criterion_main!(benches);
