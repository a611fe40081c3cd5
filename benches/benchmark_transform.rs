use criterion::Criterion;
use criterion::{criterion_group, criterion_main};
use ndarray::Array1;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use velotrans::transform::{semi_local, van_driest};

const SIZES: [usize; 4] = [128, 264, 512, 1024];

fn profile(n: usize) -> (Array1<f64>, Array1<f64>, Array1<f64>, Array1<f64>) {
    let y = Array1::linspace(0., 1., n);
    let rho: Array1<f64> = Array1::random(n, Uniform::new(0.5, 1.5));
    let mu: Array1<f64> = Array1::random(n, Uniform::new(0.5, 1.5));
    let mut u = Array1::random(n, Uniform::new(0., 1.));
    u.accumulate_axis_inplace(ndarray::Axis(0), |&prev, curr| *curr += prev);
    (u, rho, mu, y)
}

pub fn bench_van_driest(c: &mut Criterion) {
    let mut group = c.benchmark_group("VanDriest");
    group.significance_level(0.1).sample_size(10);
    for n in SIZES.iter() {
        let (u, rho, _, y) = profile(*n);
        let name = format!("Size: {}", *n);
        group.bench_function(&name, |b| b.iter(|| van_driest(&u, &rho, 395., &y)));
    }
    group.finish();
}

pub fn bench_semi_local(c: &mut Criterion) {
    let mut group = c.benchmark_group("SemiLocal");
    group.significance_level(0.1).sample_size(10);
    for n in SIZES.iter() {
        let (u, rho, mu, y) = profile(*n);
        let name = format!("Size: {}", *n);
        group.bench_function(&name, |b| b.iter(|| semi_local(&u, &rho, &mu, 395., &y)));
    }
    group.finish();
}

criterion_group!(benches, bench_van_driest, bench_semi_local);
criterion_main!(benches);
