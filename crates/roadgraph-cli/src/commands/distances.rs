//! Distances command handler for label graphs.

use anyhow::{Context, Result};

use roadgraph_cli::output::{render_distances, OutputFormat};
use roadgraph_lib::{compute_distances, EdgeSpec, Graph};

/// Arguments for the distances command.
#[derive(Debug, Clone)]
pub struct DistancesCommandArgs {
    pub edges: Vec<EdgeSpec>,
    pub source: String,
}

/// Handle the distances subcommand.
pub fn handle_distances_command(format: OutputFormat, args: &DistancesCommandArgs) -> Result<()> {
    let mut graph: Graph<String> = Graph::with_capacity(args.edges.len());
    graph
        .extend_from_specs(&args.edges)
        .context("failed to build graph from --edge arguments")?;

    let distances = compute_distances(&graph, args.source.as_str())?;
    print!("{}", render_distances(format, &args.source, &distances)?);
    Ok(())
}
