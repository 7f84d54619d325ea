use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Read},
    path::Path,
};

use crate::{errors::PathGraphError, graph::Graph};

/// Reads an adjacency list in the `source: target target ...` line format.
pub fn read_graph<P: AsRef<Path>>(path: P) -> Result<Graph, PathGraphError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| PathGraphError::io(format!("unable to open {}: {e}", path.display())))?;
    read_graph_from(file)
}

pub fn read_graph_from<R: Read>(reader: R) -> Result<Graph, PathGraphError> {
    let mut graph = Graph::new();
    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.map_err(|e| match e.kind() {
            ErrorKind::InvalidData => PathGraphError::parse(idx + 1, "", "invalid UTF-8"),
            _ => PathGraphError::io(format!("read failed: {e}")),
        })?;
        parse_line(&mut graph, idx + 1, &line)?;
    }
    tracing::info!(
        sources = graph.source_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

pub fn parse_graph(input: &str) -> Result<Graph, PathGraphError> {
    read_graph_from(input.as_bytes())
}

fn parse_line(graph: &mut Graph, number: usize, raw: &str) -> Result<(), PathGraphError> {
    let line = raw.trim();
    if line.is_empty() {
        return Ok(());
    }
    let Some((source, targets)) = line.split_once(':') else {
        return Err(PathGraphError::parse(number, raw, "missing ':' separator"));
    };
    let source = source.trim();
    if source.is_empty() {
        return Err(PathGraphError::parse(number, raw, "empty source node"));
    }
    if targets.contains(':') {
        return Err(PathGraphError::parse(number, raw, "more than one ':' separator"));
    }
    graph.add_edges(source, targets.split_whitespace());
    Ok(())
}
