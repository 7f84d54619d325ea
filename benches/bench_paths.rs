use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pathgraph::{
    PathCounter, count_simple_paths,
    bench_utils::{GraphDataset, GraphShape, generate_graph},
};

const LAYER_SEED: u64 = 0x5A17;
const SAMPLE_SIZE: usize = 20;
const WARM_UP: Duration = Duration::from_millis(300);
const MEASURE: Duration = Duration::from_millis(500);

fn bench_scales() -> &'static [usize] {
    #[cfg(feature = "bench-ci")]
    {
        &[1_000, 5_000]
    }
    #[cfg(not(feature = "bench-ci"))]
    {
        &[10_000, 50_000, 100_000]
    }
}

fn layered_cases() -> Vec<(String, GraphDataset)> {
    bench_scales()
        .iter()
        .map(|&nodes| {
            let dataset = generate_graph(
                GraphShape::Layered { width: 64 },
                nodes,
                LAYER_SEED + nodes as u64,
            );
            (format!("layered_{nodes}"), dataset)
        })
        .collect()
}

fn bench_dp_layered(c: &mut Criterion) {
    let cases = layered_cases();
    let mut group = c.benchmark_group("dp_layered");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for (label, dataset) in &cases {
        group.throughput(Throughput::Elements(dataset.nodes() as u64));
        group.bench_function(BenchmarkId::from_parameter(label), |b| {
            b.iter(|| {
                PathCounter::build(&dataset.graph, &dataset.end)
                    .expect("counter")
                    .paths_from(&dataset.start)
            });
        });
    }
    group.finish();
}

fn bench_dp_vs_naive(c: &mut Criterion) {
    let dataset = generate_graph(GraphShape::DiamondChain, 46, 0);
    let mut group = c.benchmark_group("dp_vs_naive");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    group.bench_function("dp", |b| {
        b.iter(|| {
            PathCounter::build(&dataset.graph, &dataset.end)
                .expect("counter")
                .paths_from(&dataset.start)
        });
    });
    group.bench_function("naive", |b| {
        b.iter(|| count_simple_paths(&dataset.graph, &dataset.start, &dataset.end));
    });
    group.finish();
}

criterion_group!(
    name = path_benches;
    config = Criterion::default();
    targets = bench_dp_layered, bench_dp_vs_naive
);
criterion_main!(path_benches);
