use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use dftkit::{normalize, RoundSize};
use dftkit_bench::two_tone;

fn bench_normalize(c: &mut Criterion) {
    let input = two_tone(3000);
    let mut group = c.benchmark_group("normalize_3000");
    for (name, policy) in [
        ("pad", RoundSize::Up { target: None }),
        ("truncate_pad", RoundSize::Up { target: Some(1500) }),
        ("down", RoundSize::Down),
    ] {
        group.bench_function(name, |b| {
            b.iter_batched(
                || input.clone(),
                |samples| normalize(samples, policy),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
