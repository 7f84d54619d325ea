use std::collections::VecDeque;

use ahash::AHashMap;

use crate::graph::{Graph, ReverseGraph};

/// Nodes with a directed path to a target, leveled by backward BFS hops.
#[derive(Debug, Clone, Default)]
pub struct Reachability {
    levels: AHashMap<String, usize>,
    discovered: Vec<String>,
}

impl Reachability {
    /// Breadth-first search from `end` over incoming edges. First discovery
    /// fixes a node's level. An `end` unknown to `graph` reaches nothing.
    pub fn compute(graph: &Graph, reverse: &ReverseGraph, end: &str) -> Self {
        if !graph.has_source(end) && !reverse.contains(end) {
            return Self::default();
        }
        let mut levels = AHashMap::new();
        let mut discovered = vec![end.to_string()];
        let mut queue = VecDeque::new();
        levels.insert(end.to_string(), 0);
        queue.push_back((end, 0usize));
        while let Some((node, level)) = queue.pop_front() {
            for prev in reverse.predecessors(node) {
                if levels.contains_key(prev.as_str()) {
                    continue;
                }
                levels.insert(prev.clone(), level + 1);
                discovered.push(prev.clone());
                queue.push_back((prev.as_str(), level + 1));
            }
        }
        tracing::info!(end, reachable = discovered.len(), "reachable set computed");
        Self { levels, discovered }
    }

    pub fn contains(&self, node: &str) -> bool {
        self.levels.contains_key(node)
    }

    pub fn level(&self, node: &str) -> Option<usize> {
        self.levels.get(node).copied()
    }

    /// Reachable nodes in discovery order, `end` first.
    pub fn nodes(&self) -> &[String] {
        &self.discovered
    }

    pub fn len(&self) -> usize {
        self.discovered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discovered.is_empty()
    }

    pub fn max_level(&self) -> Option<usize> {
        self.levels.values().copied().max()
    }
}
