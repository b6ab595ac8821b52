use {
    algos::{Algorithm, HashParams},
    criterion::{BenchmarkId, Criterion, criterion_group, criterion_main},
    std::hint::black_box,
};

fn lorem(size: usize) -> Vec<u8> {
    b"lorem ipsum dolor sit amet consectetur adipiscing elit "
        .iter()
        .copied()
        .cycle()
        .take(size)
        .collect()
}

fn bench(bench: &mut Criterion) {
    let params = HashParams::default();
    let mut group = bench.benchmark_group("Search");
    for size in [300, 6000] {
        let mut text = lorem(size);
        text.extend_from_slice(b"needle");
        let id = format!("search with {}", size);

        for algo in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algo.name(), &id), &text, |b, text| {
                b.iter(|| {
                    algo.find_symbols(&params, black_box(text.as_slice()), black_box(&b"needle"[..]))
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
