//! Replay command - extract a route from a saved Q-table

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    environment::{Environment, NODE_COUNT},
    identifiers::{Location, format_route},
    q_learning::SavedQTable,
};

#[derive(Parser, Debug)]
#[command(about = "Replay a saved Q-table from a start location")]
pub struct ReplayArgs {
    /// Path to a table saved with `route --save-table`
    #[arg(long, short = 't')]
    pub table: PathBuf,

    /// Start location (the goal is stored in the table)
    pub start: String,

    /// Maximum greedy steps before giving up
    #[arg(long, default_value_t = 2 * NODE_COUNT)]
    pub max_steps: usize,
}

pub fn execute(args: ReplayArgs) -> Result<()> {
    let (goal, route) = replay(&args)?;
    println!(
        "Path for {} to {} is: {}",
        args.start,
        goal,
        format_route(&route)
    );
    Ok(())
}

/// Load the table and walk it; returns the stored goal and the route.
pub fn replay(args: &ReplayArgs) -> Result<(Location, Vec<Location>)> {
    let saved = SavedQTable::load_from_file(&args.table)?;
    let route = saved.route_from(&Environment::grid(), &args.start, args.max_steps)?;
    Ok((saved.goal, route))
}
