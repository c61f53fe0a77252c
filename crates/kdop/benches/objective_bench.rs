//! Criterion benchmarks for the objective evaluators.
//!
//! - Sphere: one kernel call per evaluation.
//! - Image: sequential vs. rayon reduction over sampled neighborhoods.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kdop::dop::special::{dop_axes, DopFamily};
use kdop::objective::{
    ColorImage, ExecMode, ImageObjective, ImageObjectiveCfg, Objective, SphereObjective,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn noise_image(width: usize, height: usize, seed: u64) -> ColorImage {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..width * height * 3).map(|_| rng.gen::<u8>()).collect();
    ColorImage::new(width, height, data).unwrap()
}

fn bench_sphere(c: &mut Criterion) {
    let axes = dop_axes(DopFamily::Dop14);
    c.bench_function("sphere_objective/14", |b| {
        b.iter(|| black_box(SphereObjective.evaluate(black_box(&axes))))
    });
}

fn bench_image(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_objective");
    group.sample_size(20);
    let img = noise_image(256, 256, 5);
    let axes = dop_axes(DopFamily::Dop14);
    for (label, mode) in [("sequential", ExecMode::Sequential), ("parallel", ExecMode::Parallel)] {
        let obj = ImageObjective::new(
            img.clone(),
            ImageObjectiveCfg {
                samples: 2_000,
                mode,
                ..ImageObjectiveCfg::default()
            },
        )
        .unwrap();
        group.bench_with_input(BenchmarkId::new(label, 2_000), &obj, |b, obj| {
            b.iter(|| black_box(obj.evaluate(&axes)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sphere, bench_image);
criterion_main!(benches);
