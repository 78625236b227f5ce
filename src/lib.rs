//! Q-learning route planner for a fixed nine-location graph
//!
//! This crate provides:
//! - The environment model: location labels, state indices and the reward matrix
//! - A tabular Q-learner driven by an injectable random source
//! - Greedy route extraction with an explicit step limit
//! - A planning pipeline with pluggable observers
//! - Q-table snapshots and a small CLI
//!
//! ```
//! let route = qroute::get_optimal_route("L9", "L1")?;
//! assert_eq!(route.first().map(|l| l.as_str()), Some("L9"));
//! assert_eq!(route.last().map(|l| l.as_str()), Some("L1"));
//! # Ok::<(), qroute::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod identifiers;
pub mod pipeline;
pub mod ports;
pub mod q_learning;

pub use config::{LearningConfig, PlannerConfig};
pub use environment::{Environment, GoalRewards, NODE_COUNT};
pub use error::{Error, Result};
pub use identifiers::Location;
pub use pipeline::{PlannedRoute, RoutePlanner, get_optimal_route};
pub use q_learning::{QLearner, QTable, SavedQTable, extract_route};
