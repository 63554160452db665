use criterion::*;

mod benchmark_utilities;

use benchmark_utilities::*;

const GRID_SIZES: &[usize] = &[10, 20, 40, 80];

pub fn grid_insert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid insertion");
    for size in GRID_SIZES {
        let edges = 2 * size * (size - 1);
        group.throughput(Throughput::Elements(edges as u64));
        group.bench_with_input(BenchmarkId::new("segments", size), size, |b, &size| {
            b.iter(|| build_grid(size));
        });
    }
    group.finish();
}

pub fn grid_remove_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid removal");
    for size in GRID_SIZES {
        let edges = 2 * size * (size - 1);
        group.throughput(Throughput::Elements(edges as u64));
        group.bench_with_input(BenchmarkId::new("random order", size), size, |b, &size| {
            b.iter_batched(
                || grid_with_removal_order(size),
                |(mut arrangement, halfedges)| {
                    for halfedge in halfedges {
                        arrangement.remove_edge(halfedge, true, true);
                    }
                    arrangement
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = grid_insert_benchmark, grid_remove_benchmark
}

criterion_main!(benches);
