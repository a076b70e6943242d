//! Route command handler for coordinate graphs built from polylines.

use anyhow::{Context, Result};
use tracing::debug;

use roadgraph_cli::args::Polyline;
use roadgraph_cli::output::{render_route, OutputFormat};
use roadgraph_lib::{compute_path, Coordinate, Graph, SegmentMetric};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    pub polylines: Vec<Polyline>,
    pub from: Coordinate,
    pub to: Coordinate,
    pub metric: SegmentMetric,
}

/// Handle the route subcommand.
///
/// Endpoints must match a polyline vertex exactly; snapping arbitrary points
/// onto the network is left to the caller.
pub fn handle_route_command(format: OutputFormat, args: &RouteCommandArgs) -> Result<()> {
    let mut graph: Graph<Coordinate> = Graph::new();
    for (index, polyline) in args.polylines.iter().enumerate() {
        graph
            .add_polyline(&polyline.0, args.metric)
            .with_context(|| format!("failed to add polyline #{}", index + 1))?;
    }
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        metric = %args.metric,
        "built road graph"
    );

    let result = compute_path(&graph, &args.from, &args.to)?;
    print!("{}", render_route(format, &result)?);
    Ok(())
}
