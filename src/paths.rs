//! Bottom-up path counting over the subgraph that can reach a target.
//!
//! The reverse graph is walked once from `end` to find the reachable set, that
//! set is ordered with Kahn's algorithm, and each node's count is then the sum
//! of its successors' counts. Every count is written exactly once.

use std::collections::BTreeMap;

use ahash::AHashMap;
use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::{
    errors::PathGraphError,
    graph::Graph,
    reachability::Reachability,
    topo::{TopoOrder, checked_topological_order},
};

/// `dp[node]`: number of directed paths from `node` to the target.
#[derive(Debug, Clone, Default)]
pub struct PathTable {
    counts: AHashMap<String, BigUint>,
}

impl PathTable {
    pub fn get(&self, node: &str) -> Option<&BigUint> {
        self.counts.get(node)
    }

    /// Nodes that were never assigned contribute nothing.
    pub fn paths_from(&self, node: &str) -> BigUint {
        self.counts.get(node).cloned().unwrap_or_else(BigUint::zero)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Runs the recurrence over `order`, which must list successors before predecessors.
pub fn path_table(graph: &Graph, order: &[String], end: &str) -> PathTable {
    let mut counts: AHashMap<String, BigUint> = AHashMap::with_capacity(order.len());
    if order.iter().any(|node| node == end) {
        counts.insert(end.to_string(), BigUint::one());
    }
    for node in order {
        if node == end {
            continue;
        }
        let mut total = BigUint::zero();
        for next in graph.successors(node) {
            if let Some(count) = counts.get(next.as_str()) {
                total += count;
            }
        }
        counts.insert(node.clone(), total);
    }
    PathTable { counts }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSummary {
    pub level: usize,
    pub nodes: usize,
    pub samples: Vec<(String, BigUint)>,
}

/// A solved DP table for one target, answering queries for any start.
#[derive(Debug, Clone)]
pub struct PathCounter {
    end: String,
    reachability: Reachability,
    order: TopoOrder,
    table: PathTable,
}

impl PathCounter {
    pub fn build(graph: &Graph, end: &str) -> Result<Self, PathGraphError> {
        let reverse = graph.reverse();
        let reachability = Reachability::compute(graph, &reverse, end);
        let order = checked_topological_order(graph, &reverse, &reachability, end)?;
        let table = path_table(graph, order.nodes(), end);
        Ok(Self {
            end: end.to_string(),
            reachability,
            order,
            table,
        })
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn paths_from(&self, start: &str) -> BigUint {
        self.table.paths_from(start)
    }

    pub fn reachability(&self) -> &Reachability {
        &self.reachability
    }

    pub fn order(&self) -> &TopoOrder {
        &self.order
    }

    /// Groups ordered nodes by level, keeping up to `samples` counts per level.
    pub fn levels(&self, samples: usize) -> Vec<LevelSummary> {
        let mut grouped: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
        for node in self.order.nodes() {
            if let Some(level) = self.reachability.level(node) {
                grouped.entry(level).or_default().push(node.as_str());
            }
        }
        let summaries: Vec<LevelSummary> = grouped
            .into_iter()
            .map(|(level, nodes)| LevelSummary {
                level,
                nodes: nodes.len(),
                samples: nodes
                    .iter()
                    .take(samples)
                    .map(|node| (node.to_string(), self.table.paths_from(node)))
                    .collect(),
            })
            .collect();
        for summary in &summaries {
            for (node, count) in &summary.samples {
                tracing::debug!(level = summary.level, node = %node, paths = %count, "dp sample");
            }
        }
        summaries
    }
}

/// Counts directed paths from `start` to `end`; fails if the nodes reaching
/// `end` contain a cycle.
pub fn count_paths(graph: &Graph, start: &str, end: &str) -> Result<BigUint, PathGraphError> {
    let counter = PathCounter::build(graph, end)?;
    let paths = counter.paths_from(start);
    tracing::info!(start, end, paths = %paths, "paths counted");
    Ok(paths)
}
