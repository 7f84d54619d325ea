use num_bigint::BigUint;
use serde_json::{Map, Value, json};

use crate::{
    config::CommandLineConfig,
    cycles::find_first_cycle,
    errors::PathGraphError,
    graph::Graph,
    naive::count_simple_paths,
    paths::{LevelSummary, PathCounter},
};

const ERR_PREFIX: &str = "cli";

/// Runs one command against a loaded graph and returns a single JSON line.
pub fn handle_command(graph: &Graph, config: &CommandLineConfig) -> Result<String, PathGraphError> {
    match config.command.as_str() {
        "count" => run_count(graph, config),
        "naive" => run_naive(graph, config),
        "compare" => run_compare(graph, config),
        "levels" => run_levels(graph, config),
        "cycles" => run_cycles(graph),
        "stats" => run_stats(graph, config),
        other => Err(PathGraphError::invalid_input(format!(
            "unknown command {other}"
        ))),
    }
}

fn run_count(graph: &Graph, config: &CommandLineConfig) -> Result<String, PathGraphError> {
    let counter = PathCounter::build(graph, &config.end)?;
    let paths = counter.paths_from(&config.start);
    let mut object = header("count", config);
    object.insert("paths".into(), count_value(&paths));
    object.insert("reachable".into(), json!(counter.reachability().len()));
    encode(object)
}

fn run_naive(graph: &Graph, config: &CommandLineConfig) -> Result<String, PathGraphError> {
    let paths = count_simple_paths(graph, &config.start, &config.end);
    let mut object = header("naive", config);
    object.insert("paths".into(), count_value(&paths));
    encode(object)
}

fn run_compare(graph: &Graph, config: &CommandLineConfig) -> Result<String, PathGraphError> {
    let counter = PathCounter::build(graph, &config.end)?;
    let dp = counter.paths_from(&config.start);
    let naive = count_simple_paths(graph, &config.start, &config.end);
    if dp != naive {
        tracing::warn!(dp = %dp, naive = %naive, "path counts disagree");
    }
    let mut object = header("compare", config);
    object.insert("dp".into(), count_value(&dp));
    object.insert("naive".into(), count_value(&naive));
    object.insert("agree".into(), Value::Bool(dp == naive));
    encode(object)
}

fn run_levels(graph: &Graph, config: &CommandLineConfig) -> Result<String, PathGraphError> {
    let counter = PathCounter::build(graph, &config.end)?;
    let levels = counter
        .levels(config.samples)
        .iter()
        .map(level_value)
        .collect::<Vec<_>>();
    let mut object = header("levels", config);
    object.insert("paths".into(), count_value(&counter.paths_from(&config.start)));
    object.insert("ordered".into(), json!(counter.order().len()));
    object.insert("levels".into(), Value::Array(levels));
    encode(object)
}

fn run_cycles(graph: &Graph) -> Result<String, PathGraphError> {
    let mut object = Map::new();
    object.insert("command".into(), Value::String("cycles".into()));
    match find_first_cycle(graph) {
        Some(cycle) => {
            object.insert("acyclic".into(), Value::Bool(false));
            object.insert("length".into(), json!(cycle.len() - 1));
            object.insert("cycle".into(), json!(cycle));
        }
        None => {
            object.insert("acyclic".into(), Value::Bool(true));
        }
    }
    encode(object)
}

fn run_stats(graph: &Graph, config: &CommandLineConfig) -> Result<String, PathGraphError> {
    let stats = serde_json::to_value(graph.stats())
        .map_err(|e| PathGraphError::invalid_input(format!("{ERR_PREFIX} serialization failed: {e}")))?;
    let mut object = Map::new();
    object.insert("command".into(), Value::String("stats".into()));
    object.insert("stats".into(), stats);
    object.insert(
        "start_successors".into(),
        json!(graph.successors(&config.start)),
    );
    object.insert("end_successors".into(), json!(graph.successors(&config.end)));
    encode(object)
}

fn header(command: &str, config: &CommandLineConfig) -> Map<String, Value> {
    let mut object = Map::new();
    object.insert("command".into(), Value::String(command.into()));
    object.insert("start".into(), Value::String(config.start.clone()));
    object.insert("end".into(), Value::String(config.end.clone()));
    object
}

fn level_value(summary: &LevelSummary) -> Value {
    let samples = summary
        .samples
        .iter()
        .map(|(node, paths)| json!({"node": node, "paths": paths.to_string()}))
        .collect::<Vec<_>>();
    json!({
        "level": summary.level,
        "nodes": summary.nodes,
        "samples": samples,
    })
}

// Counts outgrow JSON numbers, so they travel as decimal strings.
fn count_value(count: &BigUint) -> Value {
    Value::String(count.to_string())
}

fn encode(object: Map<String, Value>) -> Result<String, PathGraphError> {
    serde_json::to_string(&Value::Object(object))
        .map_err(|e| PathGraphError::invalid_input(format!("{ERR_PREFIX} serialization failed: {e}")))
}
