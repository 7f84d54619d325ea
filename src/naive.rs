use ahash::AHashSet;
use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::graph::Graph;

struct Frame<'g> {
    node: &'g str,
    cursor: usize,
}

/// Counts simple paths from `start` to `end` by exhaustive depth-first search.
///
/// Exponential in general; meant as a cross-check for the DP engine on small
/// graphs. The search keeps an explicit stack instead of recursing, so deep
/// chains cannot overflow the call stack. A path ends at its first arrival
/// at `end`; parallel edges count as distinct paths.
pub fn count_simple_paths(graph: &Graph, start: &str, end: &str) -> BigUint {
    if start == end {
        return BigUint::one();
    }
    let mut total = BigUint::zero();
    let mut on_path: AHashSet<&str> = AHashSet::new();
    let mut stack = vec![Frame {
        node: start,
        cursor: 0,
    }];
    on_path.insert(start);
    while let Some(frame) = stack.last_mut() {
        let Some(next) = graph.successors(frame.node).get(frame.cursor) else {
            let node = frame.node;
            stack.pop();
            on_path.remove(node);
            continue;
        };
        frame.cursor += 1;
        let next = next.as_str();
        if next == end {
            total += 1u32;
        } else if on_path.insert(next) {
            stack.push(Frame {
                node: next,
                cursor: 0,
            });
        }
    }
    total
}
