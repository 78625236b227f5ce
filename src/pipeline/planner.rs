//! Route planning pipeline: validate, learn, extract
//!
//! Both labels are resolved before any learning happens, so a bad label
//! never costs an iteration.

use std::fmt;

use serde::Serialize;

use crate::{
    Result,
    config::PlannerConfig,
    environment::Environment,
    identifiers::{Location, format_route},
    ports::{Observer, RandomSource, build_rng},
    q_learning::{QLearner, QTable, SavedQTable, extract_route},
};

/// Result of a route query
#[derive(Debug, Clone, Serialize)]
pub struct PlannedRoute {
    pub start: Location,
    pub end: Location,
    /// Visited locations, both endpoints included
    pub route: Vec<Location>,
    /// Table the route was extracted from
    pub table: QTable,
}

impl PlannedRoute {
    /// Number of moves along the route
    pub fn hops(&self) -> usize {
        self.route.len().saturating_sub(1)
    }
}

impl fmt::Display for PlannedRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Path for {} to {} is: {}",
            self.start,
            self.end,
            format_route(&self.route)
        )
    }
}

/// Plans routes over one environment with fixed learning parameters.
///
/// # Examples
///
/// ```
/// use qroute::{config::PlannerConfig, environment::Environment, pipeline::RoutePlanner};
///
/// let mut planner = RoutePlanner::new(Environment::grid(), PlannerConfig::default().with_seed(7))?;
/// let planned = planner.plan("L9", "L1")?;
/// assert_eq!(planned.route.first().map(|l| l.as_str()), Some("L9"));
/// # Ok::<(), qroute::Error>(())
/// ```
pub struct RoutePlanner {
    environment: Environment,
    config: PlannerConfig,
    learner: QLearner,
    observers: Vec<Box<dyn Observer>>,
}

impl RoutePlanner {
    /// Create a planner after validating the configuration
    pub fn new(environment: Environment, config: PlannerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            environment,
            config,
            learner: QLearner::new(config.learning)?,
            observers: Vec::new(),
        })
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Learn and extract a route using the configured seed.
    pub fn plan(&mut self, start: &str, end: &str) -> Result<PlannedRoute> {
        let mut rng = build_rng(self.config.seed);
        self.plan_with_rng(start, end, &mut rng)
    }

    /// Learn and extract a route with an injected random source.
    pub fn plan_with_rng<R>(
        &mut self,
        start: &str,
        end: &str,
        rng: &mut R,
    ) -> Result<PlannedRoute>
    where
        R: RandomSource + ?Sized,
    {
        let start_state = self.environment.location_to_state(start)?;
        let goal = self.environment.location_to_state(end)?;

        let rewards = self.environment.goal_boosted(goal)?;
        let table = self.learner.learn(&rewards, rng, &mut self.observers)?;
        let route = extract_route(
            &table,
            &self.environment,
            start,
            end,
            self.config.route_step_limit(),
        )?;

        Ok(PlannedRoute {
            start: self.environment.state_to_location(start_state)?.clone(),
            end: self.environment.state_to_location(goal)?.clone(),
            route,
            table,
        })
    }

    /// Snapshot of a planned route's table for later replay.
    pub fn snapshot(&self, planned: &PlannedRoute) -> SavedQTable {
        SavedQTable::new(
            planned.end.clone(),
            self.config.learning,
            self.config.seed,
            planned.table.clone(),
        )
    }
}

/// Route between two grid locations with default parameters.
///
/// Unseeded: repeated calls may learn different tables, but the route always
/// follows real edges when the goal is reachable.
pub fn get_optimal_route(start: &str, end: &str) -> Result<Vec<Location>> {
    let mut planner = RoutePlanner::new(Environment::grid(), PlannerConfig::default())?;
    Ok(planner.plan(start, end)?.route)
}
