//! Path counting over text-described directed graphs.
//! Run Criterion benchmarks with `cargo bench` to inspect reports under `target/criterion`.

pub mod bench_utils;
pub mod cli;
pub mod config;
pub mod cycles;
pub mod errors;
pub mod graph;
pub mod loader;
pub mod naive;
pub mod paths;
pub mod reachability;
pub mod topo;

pub use crate::cycles::{find_first_cycle, is_acyclic};
pub use crate::errors::PathGraphError;
pub use crate::graph::{Graph, GraphStats, ReverseGraph};
pub use crate::loader::{parse_graph, read_graph};
pub use crate::naive::count_simple_paths;
pub use crate::paths::{LevelSummary, PathCounter, PathTable, count_paths, path_table};
pub use crate::reachability::Reachability;
pub use crate::topo::{TopoOrder, checked_topological_order, topological_order};
