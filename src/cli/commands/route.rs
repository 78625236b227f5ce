//! Route command - learn a Q-table and extract a route

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::{
        config::LearningArgs,
        output::{format_q_table, print_kv, print_section, print_subsection},
    },
    environment::Environment,
    pipeline::{JsonlObserver, MetricsObserver, PlannedRoute, ProgressObserver, RoutePlanner},
};

#[derive(Parser, Debug)]
#[command(about = "Learn a Q-table and print the greedy route")]
pub struct RouteArgs {
    /// Start location (e.g. L9)
    pub start: String,

    /// End location (e.g. L1)
    pub end: String,

    #[command(flatten)]
    pub learning: LearningArgs,

    /// Show progress bar
    #[arg(long, default_value_t = false)]
    pub progress: bool,

    /// Optional file for JSONL update traces
    #[arg(long)]
    pub observations: Option<PathBuf>,

    /// Optional path for saving the learned Q-table as JSON
    #[arg(long)]
    pub save_table: Option<PathBuf>,

    /// Print the learned Q-table
    #[arg(long, default_value_t = false)]
    pub show_table: bool,

    /// Print parameters and learning metrics
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

pub fn execute(args: RouteArgs) -> Result<()> {
    let planned = plan(&args)?;
    println!("{planned}");
    Ok(())
}

/// Run the query described by `args`, handling every optional output.
pub fn plan(args: &RouteArgs) -> Result<PlannedRoute> {
    let config = args.learning.planner_config();
    let metrics = MetricsObserver::new();

    let mut planner = RoutePlanner::new(Environment::grid(), config)?
        .with_observer(Box::new(metrics.clone()));
    if args.progress {
        planner = planner.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.observations {
        let observer = JsonlObserver::new(path)
            .with_context(|| format!("Failed to create observation file: {}", path.display()))?;
        planner = planner.with_observer(Box::new(observer));
    }

    if args.verbose {
        print_section("Route Query");
        print_kv("Start", &args.start);
        print_kv("End", &args.end);
        print_kv("Iterations", &config.learning.iterations.to_string());
        print_kv("Gamma", &config.learning.discount_factor.to_string());
        print_kv("Alpha", &config.learning.learning_rate.to_string());
        print_kv(
            "Seed",
            &config
                .seed
                .map_or_else(|| "none".to_string(), |seed| seed.to_string()),
        );
        print_kv("Step limit", &config.route_step_limit().to_string());
    }

    let planned = planner
        .plan(&args.start, &args.end)
        .with_context(|| format!("Failed to plan route from {} to {}", args.start, args.end))?;

    if args.verbose {
        let summary = metrics.summary();
        print_subsection("Learning");
        print_kv("Updates", &summary.iterations.to_string());
        print_kv(
            "Mean |TD|",
            &format!("{:.3}", summary.mean_abs_td_error),
        );
        print_kv("Visits", &format!("{:?}", summary.visits));
        print_kv("Hops", &planned.hops().to_string());
    }

    if args.show_table {
        print_subsection("Q-table");
        print!("{}", format_q_table(&planned.table, planner.environment()));
    }

    if let Some(path) = &args.save_table {
        planner.snapshot(&planned).save_to_file(path)?;
        eprintln!("Saved Q-table to {}", path.display());
    }

    Ok(planned)
}
