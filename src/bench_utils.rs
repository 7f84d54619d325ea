use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::graph::Graph;

/// A synthetic acyclic graph with designated endpoints.
#[derive(Clone, Debug)]
pub struct GraphDataset {
    pub graph: Graph,
    pub start: String,
    pub end: String,
}

impl GraphDataset {
    pub fn nodes(&self) -> usize {
        self.graph.all_nodes().len()
    }

    pub fn edges(&self) -> usize {
        self.graph.edge_count()
    }
}

#[derive(Clone, Debug)]
pub enum GraphShape {
    Line,
    /// Chain of diamonds; paths double at every diamond.
    DiamondChain,
    Layered { width: usize },
    /// Edges only run from lower to higher index, so the result is a DAG.
    RandomDag { edges: usize },
}

/// Builds a DAG over `node_count` nodes named `n0..`. `start` is `n0` and
/// `end` is the last node.
pub fn generate_graph(shape: GraphShape, node_count: usize, seed: u64) -> GraphDataset {
    assert!(node_count > 1, "node_count must exceed 1");
    let edges = match shape {
        GraphShape::Line => generate_line_edges(node_count),
        GraphShape::DiamondChain => generate_diamond_edges(node_count),
        GraphShape::Layered { width } => generate_layered_edges(node_count, width, seed),
        GraphShape::RandomDag { edges } => generate_random_edges(node_count, edges, seed),
    };
    let mut graph = Graph::new();
    for (from, to) in edges {
        graph.add_edge(node_name(from), node_name(to));
    }
    GraphDataset {
        graph,
        start: node_name(0),
        end: node_name(node_count - 1),
    }
}

/// Renders a graph back into the `source: target ...` line format.
pub fn to_adjacency_text(graph: &Graph) -> String {
    let mut out = String::new();
    for source in graph.sources() {
        out.push_str(source);
        out.push(':');
        for target in graph.successors(source) {
            out.push(' ');
            out.push_str(target);
        }
        out.push('\n');
    }
    out
}

pub fn node_name(idx: usize) -> String {
    format!("n{idx}")
}

fn generate_line_edges(count: usize) -> Vec<(usize, usize)> {
    (0..count - 1).map(|idx| (idx, idx + 1)).collect()
}

fn generate_diamond_edges(count: usize) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    let mut top = 0;
    while top + 3 < count {
        edges.push((top, top + 1));
        edges.push((top, top + 2));
        edges.push((top + 1, top + 3));
        edges.push((top + 2, top + 3));
        top += 3;
    }
    for idx in top..count - 1 {
        edges.push((idx, idx + 1));
    }
    edges
}

fn generate_layered_edges(count: usize, width: usize, seed: u64) -> Vec<(usize, usize)> {
    assert!(width > 0, "width must be positive");
    let mut rng = StdRng::seed_from_u64(seed);
    let last = count - 1;
    let layer_of = |idx: usize| if idx == 0 { 0 } else { (idx - 1) / width + 1 };
    let mut edges = Vec::new();
    for from in 0..last {
        let next_layer = layer_of(from) + 1;
        let first = (next_layer - 1) * width + 1;
        let candidates: Vec<usize> = (first..first + width).filter(|&to| to < last).collect();
        if candidates.is_empty() {
            edges.push((from, last));
            continue;
        }
        let fanout = rng.gen_range(1..=candidates.len().min(3));
        for _ in 0..fanout {
            let to = candidates[rng.gen_range(0..candidates.len())];
            edges.push((from, to));
        }
    }
    edges
}

fn generate_random_edges(count: usize, edge_count: usize, seed: u64) -> Vec<(usize, usize)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(edge_count);
    for _ in 0..edge_count {
        let from = rng.gen_range(0..count - 1);
        let to = rng.gen_range(from + 1..count);
        edges.push((from, to));
    }
    edges.sort_unstable();
    edges
}
