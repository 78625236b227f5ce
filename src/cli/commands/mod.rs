//! Subcommand implementations

pub mod graph;
pub mod replay;
pub mod route;
