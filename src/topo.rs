use std::collections::VecDeque;

use ahash::AHashMap;

use crate::{
    errors::PathGraphError,
    graph::{Graph, ReverseGraph},
    reachability::Reachability,
};

/// Reachable nodes ordered so every node follows all of its reachable successors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopoOrder {
    nodes: Vec<String>,
}

impl TopoOrder {
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// False when a cycle kept some reachable nodes out of the order.
    pub fn is_complete(&self, reachability: &Reachability) -> bool {
        self.nodes.len() == reachability.len()
    }
}

/// Kahn's algorithm driven by out-degree within the reachable set, seeded at `end`.
///
/// Nodes on a cycle never drain to zero and are left out, so callers must
/// check [`TopoOrder::is_complete`] or use [`checked_topological_order`].
/// When `end` itself has a reachable successor it sits on a cycle and the
/// order is empty.
pub fn topological_order(
    graph: &Graph,
    reverse: &ReverseGraph,
    reachability: &Reachability,
    end: &str,
) -> TopoOrder {
    if !reachability.contains(end) {
        return TopoOrder::default();
    }
    let mut out_degree: AHashMap<&str, usize> = AHashMap::with_capacity(reachability.len());
    for node in reachability.nodes() {
        let degree = graph
            .successors(node)
            .iter()
            .filter(|next| reachability.contains(next))
            .count();
        out_degree.insert(node.as_str(), degree);
    }

    let mut nodes = Vec::with_capacity(reachability.len());
    let mut queue = VecDeque::new();
    if out_degree.get(end) == Some(&0) {
        queue.push_back(end);
    }
    while let Some(node) = queue.pop_front() {
        nodes.push(node.to_string());
        for prev in reverse.predecessors(node) {
            let Some(remaining) = out_degree.get_mut(prev.as_str()) else {
                continue;
            };
            if *remaining == 0 {
                continue;
            }
            *remaining -= 1;
            if *remaining == 0 {
                queue.push_back(prev.as_str());
            }
        }
    }
    TopoOrder { nodes }
}

pub fn checked_topological_order(
    graph: &Graph,
    reverse: &ReverseGraph,
    reachability: &Reachability,
    end: &str,
) -> Result<TopoOrder, PathGraphError> {
    let order = topological_order(graph, reverse, reachability, end);
    if !order.is_complete(reachability) {
        tracing::warn!(
            end,
            reachable = reachability.len(),
            ordered = order.len(),
            "cycle among nodes reaching end"
        );
        return Err(PathGraphError::cyclic(
            end,
            reachability.len(),
            order.len(),
        ));
    }
    tracing::info!(end, ordered = order.len(), "topological order complete");
    Ok(order)
}
