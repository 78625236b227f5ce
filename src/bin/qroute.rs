//! qroute CLI - Q-learning route planner
//!
//! This CLI provides:
//! - Learning a Q-table and printing the greedy route between two locations
//! - Replaying a saved Q-table without re-learning
//! - Printing the route graph

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "qroute")]
#[command(version, about = "Q-learning route planner for a fixed location graph", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Learn a Q-table and print the route between two locations
    Route(qroute::cli::commands::route::RouteArgs),

    /// Extract a route from a saved Q-table
    Replay(qroute::cli::commands::replay::ReplayArgs),

    /// Print locations and edges
    Graph(qroute::cli::commands::graph::GraphArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Route(args) => qroute::cli::commands::route::execute(args),
        Commands::Replay(args) => qroute::cli::commands::replay::execute(args),
        Commands::Graph(args) => qroute::cli::commands::graph::execute(args),
    }
}
