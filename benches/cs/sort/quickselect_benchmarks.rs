use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kselect::cs::sort::select_kth_largest_with_rng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_data(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect()
}

fn bench_kth_largest(c: &mut Criterion) {
    let mut group = c.benchmark_group("kth_largest");

    for &len in &[1_000usize, 10_000, 100_000] {
        let data = random_data(len, 42);
        let k = len / 2;

        group.bench_with_input(BenchmarkId::new("quickselect", len), &data, |b, data| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| {
                let mut arr = data.clone();
                select_kth_largest_with_rng(black_box(&mut arr), k, &mut rng)
            })
        });

        group.bench_with_input(BenchmarkId::new("select_nth_unstable", len), &data, |b, data| {
            b.iter(|| {
                let mut arr = data.clone();
                let idx = arr.len() - k;
                *black_box(&mut arr).select_nth_unstable(idx).1
            })
        });

        group.bench_with_input(BenchmarkId::new("full_sort", len), &data, |b, data| {
            b.iter(|| {
                let mut arr = data.clone();
                black_box(&mut arr).sort_unstable();
                arr[arr.len() - k]
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_kth_largest);
criterion_main!(benches);
