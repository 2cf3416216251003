use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use planar_delaunay::{triangulate, Point};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn gen_points(rng: &mut SmallRng, n: usize) -> Vec<Point<i32>> {
  let mut seen = std::collections::HashSet::new();
  let mut out = Vec::with_capacity(n);
  while out.len() < n {
    let x = rng.gen_range(-100_000..100_000);
    let y = rng.gen_range(-100_000..100_000);
    if seen.insert((x, y)) {
      out.push(Point::new(x, y));
    }
  }
  out
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(0x5EED);
  for &n in &[10usize, 100, 1_000, 10_000] {
    let points = gen_points(&mut rng, n);
    c.bench_function(&format!("triangulate({})", n), |b| {
      b.iter_batched(
        || points.clone(),
        |pts| triangulate(pts).unwrap(),
        BatchSize::SmallInput,
      )
    });
  }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
