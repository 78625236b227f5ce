//! Q-learning over the goal-boosted reward matrix
//!
//! Each iteration restarts from a uniformly random state, takes one uniformly
//! random playable action and applies a single temporal-difference update.
//! There is no convergence check: the loop always runs the configured number
//! of iterations.

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    config::LearningConfig,
    environment::{GoalRewards, NODE_COUNT},
    ports::{Observer, RandomSource},
    q_learning::q_table::QTable,
};

/// Record of a single temporal-difference update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TdUpdate {
    /// Iteration index (0-based)
    pub iteration: usize,
    /// Sampled state
    pub state: usize,
    /// Chosen action, i.e. the next state
    pub action: usize,
    /// Boosted reward for the transition
    pub reward: f64,
    /// Temporal difference before scaling by α
    pub td_error: f64,
    pub q_before: f64,
    pub q_after: f64,
}

/// Tabular Q-learner with fixed hyperparameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct QLearner {
    config: LearningConfig,
}

impl QLearner {
    /// Create a learner after validating the configuration.
    pub fn new(config: LearningConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LearningConfig {
        &self.config
    }

    /// Learn a Q-table for the goal baked into `rewards`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPlayableAction`] if a sampled state has no positive
    /// reward in its row. Observer errors are propagated as-is.
    pub fn learn<R>(
        &self,
        rewards: &GoalRewards,
        rng: &mut R,
        observers: &mut [Box<dyn Observer>],
    ) -> Result<QTable>
    where
        R: RandomSource + ?Sized,
    {
        let LearningConfig {
            iterations,
            discount_factor,
            learning_rate,
        } = self.config;
        let goal = rewards.goal();

        for observer in observers.iter_mut() {
            observer.on_learning_start(goal, iterations)?;
        }

        let mut table = QTable::new();
        for iteration in 0..iterations {
            let state = rng.uniform_index(NODE_COUNT);
            let playable = rewards.playable_actions(state);
            let action = rng
                .uniform_choice(&playable)
                .ok_or(Error::NoPlayableAction { state, goal })?;

            let reward = rewards.reward(state, action);
            let q_before = table.get(state, action);
            let td_error =
                table.q_learning_update(state, action, reward, discount_factor, learning_rate);

            let update = TdUpdate {
                iteration,
                state,
                action,
                reward,
                td_error,
                q_before,
                q_after: table.get(state, action),
            };
            for observer in observers.iter_mut() {
                observer.on_update(&update)?;
            }
        }

        for observer in observers.iter_mut() {
            observer.on_learning_end(&table)?;
        }

        Ok(table)
    }
}
