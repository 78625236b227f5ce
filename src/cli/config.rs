//! Shared configuration flags for CLI commands

use clap::Args;
use serde::{Deserialize, Serialize};

use crate::config::{LearningConfig, PlannerConfig};

/// Learning parameters shared by commands that train a table
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct LearningArgs {
    /// Number of Q-learning updates
    #[arg(long, short = 'n', default_value_t = LearningConfig::DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// Discount factor γ in [0, 1)
    #[arg(long, default_value_t = LearningConfig::DEFAULT_DISCOUNT_FACTOR)]
    pub gamma: f64,

    /// Learning rate α in (0, 1]
    #[arg(long, default_value_t = LearningConfig::DEFAULT_LEARNING_RATE)]
    pub alpha: f64,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum greedy steps before giving up (defaults to twice the node count)
    #[arg(long)]
    pub max_steps: Option<usize>,
}

impl LearningArgs {
    pub fn planner_config(&self) -> PlannerConfig {
        PlannerConfig {
            learning: LearningConfig {
                iterations: self.iterations,
                discount_factor: self.gamma,
                learning_rate: self.alpha,
            },
            seed: self.seed,
            max_route_steps: self.max_steps,
        }
    }
}

impl Default for LearningArgs {
    fn default() -> Self {
        Self {
            iterations: LearningConfig::DEFAULT_ITERATIONS,
            gamma: LearningConfig::DEFAULT_DISCOUNT_FACTOR,
            alpha: LearningConfig::DEFAULT_LEARNING_RATE,
            seed: None,
            max_steps: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_map_to_default_planner_config() {
        assert_eq!(LearningArgs::default().planner_config(), PlannerConfig::default());
    }

    #[test]
    fn flags_are_carried_over() {
        let args = LearningArgs {
            iterations: 50,
            gamma: 0.5,
            alpha: 0.3,
            seed: Some(9),
            max_steps: Some(4),
        };
        let config = args.planner_config();
        assert_eq!(config.learning.iterations, 50);
        assert_eq!(config.learning.discount_factor, 0.5);
        assert_eq!(config.learning.learning_rate, 0.3);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.route_step_limit(), 4);
    }
}
