use ahash::AHashSet;

use crate::graph::Graph;

struct Frame<'g> {
    node: &'g str,
    cursor: usize,
}

/// Returns the first cycle met by a depth-first search, as `[n0, .., nk, n0]`.
///
/// Roots are tried in source order and the search stops at the first back
/// edge, so this answers "is there a cycle" with a witness rather than listing
/// every cycle.
pub fn find_first_cycle(graph: &Graph) -> Option<Vec<String>> {
    let mut visited: AHashSet<&str> = AHashSet::new();
    for root in graph.sources() {
        if !visited.insert(root) {
            continue;
        }
        let mut on_stack: AHashSet<&str> = AHashSet::new();
        on_stack.insert(root);
        let mut stack = vec![Frame {
            node: root,
            cursor: 0,
        }];
        while let Some(frame) = stack.last_mut() {
            let Some(next) = graph.successors(frame.node).get(frame.cursor) else {
                let node = frame.node;
                stack.pop();
                on_stack.remove(node);
                continue;
            };
            frame.cursor += 1;
            let next = next.as_str();
            if visited.insert(next) {
                on_stack.insert(next);
                stack.push(Frame {
                    node: next,
                    cursor: 0,
                });
            } else if on_stack.contains(next) {
                let from = stack.iter().position(|f| f.node == next)?;
                let mut cycle: Vec<String> =
                    stack[from..].iter().map(|f| f.node.to_string()).collect();
                cycle.push(next.to_string());
                tracing::info!(length = cycle.len() - 1, "cycle found");
                return Some(cycle);
            }
        }
    }
    None
}

pub fn is_acyclic(graph: &Graph) -> bool {
    find_first_cycle(graph).is_none()
}
