mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use roadgraph_cli::args::Polyline;
use roadgraph_cli::logging::{init_logging, LoggingConfig};
use roadgraph_cli::output::OutputFormat;
use roadgraph_lib::{Coordinate, EdgeSpec, SegmentMetric};

use commands::distances::{handle_distances_command, DistancesCommandArgs};
use commands::path::{handle_path_command, PathCommandArgs};
use commands::route::{handle_route_command, RouteCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest-path queries over weighted graphs")]
struct Cli {
    /// Output format for command results.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shortest distance from a source label to every reachable label.
    Distances {
        /// Undirected edge as FROM:TO:WEIGHT; repeat for each edge.
        #[arg(long = "edge", required = true)]
        edges: Vec<EdgeSpec>,
        /// Source label.
        #[arg(long)]
        source: String,
    },
    /// Shortest path between two labels.
    Path {
        /// Undirected edge as FROM:TO:WEIGHT; repeat for each edge.
        #[arg(long = "edge", required = true)]
        edges: Vec<EdgeSpec>,
        /// Source label.
        #[arg(long = "from")]
        from: String,
        /// Destination label.
        #[arg(long = "to")]
        to: String,
    },
    /// Shortest route between two coordinates over a road network.
    Route {
        /// Road as whitespace-separated lat,lng points; repeat for each road.
        #[arg(long = "polyline", required = true, allow_hyphen_values = true)]
        polylines: Vec<Polyline>,
        /// Start coordinate as lat,lng.
        #[arg(long = "from", allow_hyphen_values = true)]
        from: Coordinate,
        /// End coordinate as lat,lng.
        #[arg(long = "to", allow_hyphen_values = true)]
        to: Coordinate,
        /// How segment lengths become edge weights.
        #[arg(long, value_enum, default_value_t = MetricArg::Planar)]
        metric: MetricArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MetricArg {
    /// Euclidean length in degrees.
    Planar,
    /// Great-circle length in metres.
    Haversine,
}

impl From<MetricArg> for SegmentMetric {
    fn from(value: MetricArg) -> Self {
        match value {
            MetricArg::Planar => SegmentMetric::Planar,
            MetricArg::Haversine => SegmentMetric::Haversine,
        }
    }
}

fn main() -> Result<()> {
    init_logging(&LoggingConfig::from_env());
    let cli = Cli::parse();

    match cli.command {
        Command::Distances { edges, source } => {
            handle_distances_command(cli.format, &DistancesCommandArgs { edges, source })
        }
        Command::Path { edges, from, to } => {
            handle_path_command(cli.format, &PathCommandArgs { edges, from, to })
        }
        Command::Route {
            polylines,
            from,
            to,
            metric,
        } => handle_route_command(
            cli.format,
            &RouteCommandArgs {
                polylines,
                from,
                to,
                metric: metric.into(),
            },
        ),
    }
}
