use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use hn_app::{dynamic_routing, max_flow_analysis, mst_analysis, shortest_path, AppResult};
use hn_dynamic::SensorSample;
use hn_engine::MstAlgorithm;
use hn_project::{load_network, NetworkDef, SinkDef};

#[derive(Parser)]
#[command(name = "hn-cli")]
#[command(about = "HydroNet CLI - Water distribution network analysis tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a network file's syntax and structure
    Validate {
        /// Path to the network JSON file
        network_path: PathBuf,
    },
    /// Compute the shortest path between two nodes
    ShortestPath {
        /// Path to the network JSON file
        network_path: PathBuf,
        /// Start node id
        #[arg(short, long)]
        source: String,
        /// Destination node id
        #[arg(short, long)]
        target: String,
    },
    /// Compute the maximum flow from the network's source to its sink(s)
    MaxFlow {
        /// Path to the network JSON file
        network_path: PathBuf,
        /// Override the network's source node
        #[arg(long)]
        source: Option<String>,
        /// Override the network's sink node(s); repeatable
        #[arg(long)]
        sink: Vec<String>,
    },
    /// Compute a minimum spanning tree (or forest, if disconnected)
    Mst {
        /// Path to the network JSON file
        network_path: PathBuf,
        /// Algorithm: kruskal or prim
        #[arg(short, long, default_value = "prim")]
        algorithm: MstAlgorithm,
    },
    /// Reweight the network from a sensor sample and rebuild routing
    Route {
        /// Path to the network JSON file
        network_path: PathBuf,
        /// Start node id (defaults to the network's source)
        #[arg(short, long)]
        source: Option<String>,
        /// Upstream pressure reading
        #[arg(long)]
        pressure1: f64,
        /// Downstream pressure reading
        #[arg(long)]
        pressure2: f64,
        /// Measured flow rate
        #[arg(long, allow_hyphen_values = true)]
        flow_rate: f64,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { network_path } => cmd_validate(&network_path),
        Commands::ShortestPath {
            network_path,
            source,
            target,
        } => cmd_shortest_path(&network_path, &source, &target),
        Commands::MaxFlow {
            network_path,
            source,
            sink,
        } => cmd_max_flow(&network_path, source, sink),
        Commands::Mst {
            network_path,
            algorithm,
        } => cmd_mst(&network_path, algorithm),
        Commands::Route {
            network_path,
            source,
            pressure1,
            pressure2,
            flow_rate,
        } => cmd_route(
            &network_path,
            source.as_deref(),
            SensorSample::new(pressure1, pressure2, flow_rate),
        ),
    }
}

fn cmd_validate(network_path: &Path) -> AppResult<()> {
    println!("Validating network: {}", network_path.display());
    let def = load_network(network_path)?;
    hn_project::compile_network(&def)?;
    println!(
        "✓ Network is valid ({} nodes, {} edges)",
        def.nodes.len(),
        def.edges.len()
    );
    Ok(())
}

fn cmd_shortest_path(network_path: &Path, source: &str, target: &str) -> AppResult<()> {
    let def = load_network(network_path)?;
    let response = shortest_path(&def, source, target)?;
    print_json(&response)
}

fn cmd_max_flow(
    network_path: &Path,
    source: Option<String>,
    sink: Vec<String>,
) -> AppResult<()> {
    let mut def = load_network(network_path)?;
    if let Some(source) = source {
        def.source = Some(source);
    }
    if !sink.is_empty() {
        def.sink = Some(SinkDef::Many(sink));
    }
    let response = max_flow_analysis(&def)?;
    print_json(&response)
}

fn cmd_mst(network_path: &Path, algorithm: MstAlgorithm) -> AppResult<()> {
    let def = load_network(network_path)?;
    let response = mst_analysis(&def, algorithm)?;
    print_json(&response)
}

fn cmd_route(network_path: &Path, source: Option<&str>, sample: SensorSample) -> AppResult<()> {
    let def: NetworkDef = load_network(network_path)?;
    let response = dynamic_routing(&def, &sample, source)?;
    print_json(&response)
}

fn print_json<T: serde::Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
