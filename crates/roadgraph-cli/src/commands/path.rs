//! Path command handler for label graphs.

use anyhow::{Context, Result};

use roadgraph_cli::output::{render_path, OutputFormat};
use roadgraph_lib::{compute_path, EdgeSpec, Graph};

/// Arguments for the path command.
#[derive(Debug, Clone)]
pub struct PathCommandArgs {
    pub edges: Vec<EdgeSpec>,
    pub from: String,
    pub to: String,
}

/// Handle the path subcommand.
///
/// An unreachable destination is reported on stdout and is not a failure.
pub fn handle_path_command(format: OutputFormat, args: &PathCommandArgs) -> Result<()> {
    let mut graph: Graph<String> = Graph::with_capacity(args.edges.len());
    graph
        .extend_from_specs(&args.edges)
        .context("failed to build graph from --edge arguments")?;

    let result = compute_path(&graph, args.from.as_str(), args.to.as_str())?;
    print!("{}", render_path(format, &args.from, &args.to, &result)?);
    Ok(())
}
