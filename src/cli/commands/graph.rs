//! Graph command - print the fixed route graph

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{format_edges, print_section},
    environment::{Environment, GOAL_REWARD},
};

#[derive(Parser, Debug, Default)]
#[command(about = "Print locations and their outgoing edges")]
pub struct GraphArgs {}

pub fn execute(_args: GraphArgs) -> Result<()> {
    let env = Environment::grid();
    print_section(&format!("Route graph ({} locations)", env.node_count()));
    for line in format_edges(&env) {
        println!("  {line}");
    }
    println!("\nGoal self-transition reward while learning: {GOAL_REWARD}");
    Ok(())
}
