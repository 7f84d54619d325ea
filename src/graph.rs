use ahash::{AHashMap, AHashSet};
use serde::Serialize;

/// Directed multigraph keyed by node name.
///
/// Successor lists keep their encounter order and duplicates. Sources are
/// remembered in first-encounter order so traversals are reproducible across
/// runs regardless of hash seeds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    adjacency: AHashMap<String, Vec<String>>,
    sources: Vec<String>,
}

/// Incoming edges for every node that has at least one.
#[derive(Debug, Clone, Default)]
pub struct ReverseGraph {
    predecessors: AHashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub sources: usize,
    pub total_nodes: usize,
    pub edges: usize,
    pub sinks: usize,
    pub self_loops: usize,
    pub duplicate_edges: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `targets` to the successor list of `source`, creating it if needed.
    pub fn add_edges<S, I, T>(&mut self, source: S, targets: I)
    where
        S: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let source = source.into();
        if !self.adjacency.contains_key(&source) {
            self.sources.push(source.clone());
        }
        self.adjacency
            .entry(source)
            .or_default()
            .extend(targets.into_iter().map(Into::into));
    }

    pub fn add_edge<S: Into<String>, T: Into<String>>(&mut self, source: S, target: T) {
        self.add_edges(source, [target.into()]);
    }

    pub fn successors(&self, node: &str) -> &[String] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_source(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(String::as_str)
    }

    /// Every node, sources first, then nodes that only appear as targets.
    pub fn all_nodes(&self) -> Vec<&str> {
        let mut seen: AHashSet<&str> = AHashSet::with_capacity(self.sources.len());
        let mut nodes = Vec::with_capacity(self.sources.len());
        for source in self.sources() {
            if seen.insert(source) {
                nodes.push(source);
            }
        }
        for source in self.sources() {
            for target in self.successors(source) {
                if seen.insert(target.as_str()) {
                    nodes.push(target.as_str());
                }
            }
        }
        nodes
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn reverse(&self) -> ReverseGraph {
        let mut predecessors: AHashMap<String, Vec<String>> = AHashMap::new();
        for source in self.sources() {
            for target in self.successors(source) {
                predecessors
                    .entry(target.clone())
                    .or_default()
                    .push(source.to_string());
            }
        }
        ReverseGraph { predecessors }
    }

    pub fn stats(&self) -> GraphStats {
        let all = self.all_nodes();
        let mut self_loops = 0;
        let mut duplicate_edges = 0;
        for source in self.sources() {
            let mut seen = AHashSet::new();
            for target in self.successors(source) {
                if target == source {
                    self_loops += 1;
                }
                if !seen.insert(target.as_str()) {
                    duplicate_edges += 1;
                }
            }
        }
        let sinks = all
            .iter()
            .filter(|node| self.successors(node).is_empty())
            .count();
        GraphStats {
            sources: self.source_count(),
            total_nodes: all.len(),
            edges: self.edge_count(),
            sinks,
            self_loops,
            duplicate_edges,
        }
    }
}

impl ReverseGraph {
    pub fn predecessors(&self, node: &str) -> &[String] {
        self.predecessors
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, node: &str) -> bool {
        self.predecessors.contains_key(node)
    }
}
