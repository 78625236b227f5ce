//! CLI infrastructure for the qroute planner
//!
//! This module provides the command-line interface for learning routes,
//! replaying saved Q-tables and inspecting the route graph.

pub mod commands;
pub mod config;
pub mod output;
