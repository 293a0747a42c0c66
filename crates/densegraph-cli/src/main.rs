//! densegraph CLI - inspect and combine adjacency-matrix graphs.
//!
//! Graphs are read from matrix text files in the space-separated stream
//! format (one row per line, `-` for stdin) and results are printed in the
//! same format, or in the comma pretty format with `--pretty`, or as a bare
//! JSON array with `--json`.

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use densegraph_core::Graph;

/// densegraph - dense adjacency-matrix graph algebra
#[derive(Parser, Debug)]
#[command(name = "densegraph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print results in the comma pretty format instead of the stream format
    #[arg(long, global = true)]
    pretty: bool,

    /// Print results as a JSON array of rows
    #[arg(long, global = true, conflicts_with = "pretty")]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show vertex count, edge count, and the edge list of a graph
    Info {
        /// Matrix text file (`-` = stdin)
        path: String,
    },
    /// Element-wise sum of two graphs
    Add {
        /// Left operand
        lhs: String,
        /// Right operand
        rhs: String,
    },
    /// Standard matrix product of two graphs
    Matmul {
        /// Left operand
        lhs: String,
        /// Right operand
        rhs: String,
    },
    /// Multiply every edge weight by a scalar factor
    Scale {
        /// Matrix text file (`-` = stdin)
        path: String,
        /// Scalar factor
        #[arg(allow_hyphen_values = true)]
        factor: i32,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Info { path } => {
            let graph = read_graph(path)?;
            tracing::debug!(path = %path, vertices = graph.vertex_count(), "graph loaded");
            println!("vertices: {}", graph.vertex_count());
            println!("edges: {}", graph.edge_count());
            for (from, to, weight) in graph.edges() {
                println!("{from} -- {to} (weight {weight})");
            }
        }
        Command::Add { lhs, rhs } => {
            let sum = read_graph(lhs)?
                .try_add(&read_graph(rhs)?)
                .context("adding graphs")?;
            print_graph(&sum, &cli);
        }
        Command::Matmul { lhs, rhs } => {
            let product = read_graph(lhs)?
                .try_matmul(&read_graph(rhs)?)
                .context("multiplying graphs")?;
            print_graph(&product, &cli);
        }
        Command::Scale { path, factor } => {
            let scaled = read_graph(path)?.scale(*factor);
            print_graph(&scaled, &cli);
        }
    }
    Ok(())
}

/// Reads a graph from a matrix text file, or from stdin when `path` is `-`.
fn read_graph(path: &str) -> anyhow::Result<Graph> {
    if path == "-" {
        Graph::read_from(io::stdin().lock()).context("reading graph from stdin")
    } else {
        let file = File::open(path).with_context(|| format!("opening {path}"))?;
        Graph::read_from(BufReader::new(file))
            .with_context(|| format!("reading graph from {path}"))
    }
}

fn print_graph(graph: &Graph, cli: &Cli) {
    if cli.json {
        // Serialization of a nested i32 array cannot fail.
        println!(
            "{}",
            serde_json::to_string(graph).expect("graph serializes as a plain array")
        );
    } else if cli.pretty {
        println!("{}", graph.to_display_string());
    } else {
        println!("{graph}");
    }
}
