use ar_project::{BuiltGraph, GraphKind, ProjectResult, build_graph, load_document};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "ar-cli")]
#[command(about = "Arbor CLI - inspect graph documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate document syntax and structure
    Validate {
        /// Path to the graph document (YAML, or JSON by extension)
        path: PathBuf,
    },
    /// Show order, size and weight of a graph
    Summary {
        /// Path to the graph document
        path: PathBuf,
    },
    /// Show the degree of a vertex (out-degree for directed graphs)
    Degree {
        /// Path to the graph document
        path: PathBuf,
        /// Vertex label
        vertex: String,
    },
    /// Show the spanning tree weight, optionally after removing edges
    Weight {
        /// Path to the graph document
        path: PathBuf,
        /// Label of an edge to remove first (repeatable)
        #[arg(long)]
        without: Vec<String>,
    },
}

fn main() -> ProjectResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { path } => cmd_validate(&path),
        Commands::Summary { path } => cmd_summary(&path),
        Commands::Degree { path, vertex } => cmd_degree(&path, &vertex),
        Commands::Weight { path, without } => cmd_weight(&path, &without),
    }
}

fn load(path: &Path) -> ProjectResult<(String, BuiltGraph)> {
    let doc = load_document(path)?;
    let graph = build_graph(&doc)?;
    Ok((doc.name, graph))
}

fn cmd_validate(path: &Path) -> ProjectResult<()> {
    println!("Validating document: {}", path.display());
    let doc = load_document(path)?;
    build_graph(&doc)?;
    println!("✓ Document is valid");
    Ok(())
}

fn cmd_summary(path: &Path) -> ProjectResult<()> {
    let (name, graph) = load(path)?;
    let summary = graph.summary(&name);

    println!("{} ({})", summary.name, summary.kind);
    println!("  Vertices: {}", summary.order);
    println!("  Edges: {}", summary.size);
    if let Some(weight) = summary.weight {
        println!("  Weight: {}", weight);
    }
    Ok(())
}

fn cmd_degree(path: &Path, vertex: &str) -> ProjectResult<()> {
    let (_, graph) = load(path)?;
    let degree = graph.degree(vertex)?;
    match graph.kind() {
        GraphKind::Directed => println!("out-degree({}) = {}", vertex, degree),
        _ => println!("degree({}) = {}", vertex, degree),
    }
    Ok(())
}

fn cmd_weight(path: &Path, without: &[String]) -> ProjectResult<()> {
    let (name, mut graph) = load(path)?;
    for label in without {
        graph.remove_edge(label)?;
        info!(edge = %label, "edge removed");
    }

    match graph.weight() {
        Some(weight) => println!("weight = {}", weight),
        None => println!("{} is a {} graph and carries no weight", name, graph.kind()),
    }
    Ok(())
}
