//! Route planning pipeline and observer adapters
//!
//! This module provides:
//! - The planner that validates labels, learns a table and extracts a route
//! - Observers for progress display, metrics and JSONL traces

pub mod observers;
pub mod planner;

// Re-export observer implementations (adapters)
pub use observers::{
    JsonlObserver, LearningMetrics, MetricsObserver, MetricsSummary, ProgressObserver,
};
pub use planner::{PlannedRoute, RoutePlanner, get_optimal_route};

pub use crate::ports::Observer;
