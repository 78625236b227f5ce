//! Configuration for learning and route planning.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, environment::NODE_COUNT};

/// Parameters of the Q-learning loop.
///
/// Defaults: 1000 iterations, γ = 0.75, α = 0.9.
///
/// # Examples
///
/// ```
/// use qroute::config::LearningConfig;
///
/// let config = LearningConfig::default()
///     .with_iterations(5000)
///     .with_discount_factor(0.8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LearningConfig {
    /// Number of temporal-difference updates
    pub iterations: usize,
    /// Discount factor γ, in `[0, 1)`
    pub discount_factor: f64,
    /// Learning rate α, in `(0, 1]`
    pub learning_rate: f64,
}

impl LearningConfig {
    pub const DEFAULT_ITERATIONS: usize = 1000;
    pub const DEFAULT_DISCOUNT_FACTOR: f64 = 0.75;
    pub const DEFAULT_LEARNING_RATE: f64 = 0.9;

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_discount_factor(mut self, discount_factor: f64) -> Self {
        self.discount_factor = discount_factor;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Check parameter ranges.
    ///
    /// Zero iterations is accepted and yields an all-zero table.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.discount_factor) {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "discount factor {} must be in [0, 1)",
                    self.discount_factor
                ),
            });
        }
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(Error::InvalidConfiguration {
                message: format!("learning rate {} must be in (0, 1]", self.learning_rate),
            });
        }
        Ok(())
    }
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            iterations: Self::DEFAULT_ITERATIONS,
            discount_factor: Self::DEFAULT_DISCOUNT_FACTOR,
            learning_rate: Self::DEFAULT_LEARNING_RATE,
        }
    }
}

/// Configuration for a full route query.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Learning parameters
    pub learning: LearningConfig,
    /// Random seed for reproducibility; `None` draws fresh entropy
    pub seed: Option<u64>,
    /// Greedy walk limit; `None` means twice the node count
    pub max_route_steps: Option<usize>,
}

impl PlannerConfig {
    pub fn new(learning: LearningConfig) -> Self {
        Self {
            learning,
            ..Self::default()
        }
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_route_steps(mut self, steps: usize) -> Self {
        self.max_route_steps = Some(steps);
        self
    }

    /// Effective step limit for route extraction.
    pub fn route_step_limit(&self) -> usize {
        self.max_route_steps.unwrap_or(2 * NODE_COUNT)
    }

    pub fn validate(&self) -> Result<()> {
        self.learning.validate()?;
        if self.max_route_steps == Some(0) {
            return Err(Error::InvalidConfiguration {
                message: "route step limit must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
