use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pathgraph::{
    Reachability, find_first_cycle, parse_graph,
    bench_utils::{GraphDataset, GraphShape, generate_graph, to_adjacency_text},
    topological_order,
};

const DAG_SEED: u64 = 0x99AA;
const SAMPLE_SIZE: usize = 20;
const WARM_UP: Duration = Duration::from_millis(300);
const MEASURE: Duration = Duration::from_millis(500);

fn bench_scales() -> &'static [usize] {
    #[cfg(feature = "bench-ci")]
    {
        &[5_000, 10_000]
    }
    #[cfg(not(feature = "bench-ci"))]
    {
        &[10_000, 50_000, 100_000]
    }
}

fn random_cases() -> Vec<(String, GraphDataset)> {
    bench_scales()
        .iter()
        .map(|&nodes| {
            let dataset = generate_graph(
                GraphShape::RandomDag {
                    edges: nodes.saturating_mul(4),
                },
                nodes,
                DAG_SEED + nodes as u64,
            );
            (format!("dag_{nodes}"), dataset)
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let cases = random_cases();
    let mut group = c.benchmark_group("parse");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for (label, dataset) in &cases {
        let text = to_adjacency_text(&dataset.graph);
        group.throughput(Throughput::Elements(dataset.edges() as u64));
        group.bench_function(BenchmarkId::from_parameter(label), |b| {
            b.iter(|| parse_graph(&text).expect("parse"));
        });
    }
    group.finish();
}

fn bench_reachability_and_order(c: &mut Criterion) {
    let cases = random_cases();
    let mut group = c.benchmark_group("reach_order");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for (label, dataset) in &cases {
        let reverse = dataset.graph.reverse();
        group.throughput(Throughput::Elements(dataset.nodes() as u64));
        group.bench_function(BenchmarkId::from_parameter(label), |b| {
            b.iter(|| {
                let reachability = Reachability::compute(&dataset.graph, &reverse, &dataset.end);
                topological_order(&dataset.graph, &reverse, &reachability, &dataset.end).len()
            });
        });
    }
    group.finish();
}

fn bench_cycle_detection(c: &mut Criterion) {
    let cases = random_cases();
    let mut group = c.benchmark_group("cycles");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for (label, dataset) in &cases {
        group.bench_function(BenchmarkId::from_parameter(label), |b| {
            b.iter(|| find_first_cycle(&dataset.graph));
        });
    }
    group.finish();
}

criterion_group!(
    name = algorithm_benches;
    config = Criterion::default();
    targets = bench_parse, bench_reachability_and_order, bench_cycle_detection
);
criterion_main!(algorithm_benches);
