use std::{env, io, process};

use pathgraph::{
    Graph, PathGraphError,
    cli::handle_command,
    config::CommandLineConfig,
    loader::{read_graph, read_graph_from},
};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    let graph = match load_graph(&config) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    if graph.is_empty() {
        tracing::warn!(input = %config.input, "graph has no nodes");
    }

    match handle_command(&graph, &config) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("command failed: {err}");
            process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_graph(config: &CommandLineConfig) -> Result<Graph, PathGraphError> {
    if config.input == "-" {
        read_graph_from(io::stdin().lock())
    } else {
        read_graph(&config.input)
    }
}
