//! Q-table implementation for temporal difference learning

use serde::{Deserialize, Serialize};

use crate::environment::{Matrix, NODE_COUNT};

/// Dense Q-table over every (state, action) pair of the route graph.
///
/// `Q[s][a]` estimates the discounted return of moving from `s` to `a`.
/// Starts zero-filled; only the learner mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QTable {
    values: Matrix,
}

impl QTable {
    /// Create a zero-filled Q-table
    pub fn new() -> Self {
        Self {
            values: [[0.0; NODE_COUNT]; NODE_COUNT],
        }
    }

    /// Wrap an existing value matrix
    pub fn from_values(values: Matrix) -> Self {
        Self { values }
    }

    /// Get Q-value for a state-action pair
    pub fn get(&self, state: usize, action: usize) -> f64 {
        self.values[state][action]
    }

    /// Set Q-value for a state-action pair
    pub fn set(&mut self, state: usize, action: usize, value: f64) {
        self.values[state][action] = value;
    }

    /// All Q-values for one state
    pub fn row(&self, state: usize) -> &[f64; NODE_COUNT] {
        &self.values[state]
    }

    pub fn values(&self) -> &Matrix {
        &self.values
    }

    /// Maximum Q-value over the full action range of `state`
    pub fn max_q(&self, state: usize) -> f64 {
        self.values[state]
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Action with the highest Q-value; ties go to the lowest index
    pub fn greedy_action(&self, state: usize) -> usize {
        let mut best = 0;
        for (action, &value) in self.values[state].iter().enumerate().skip(1) {
            if value > self.values[state][best] {
                best = action;
            }
        }
        best
    }

    /// Q-learning update: off-policy TD control
    ///
    /// TD = r + γ max_a' Q(s',a') - Q(s,a), then Q(s,a) ← Q(s,a) + α TD.
    /// Here the action *is* the next state. Returns the TD error.
    pub fn q_learning_update(
        &mut self,
        state: usize,
        next_state: usize,
        reward: f64,
        discount_factor: f64,
        learning_rate: f64,
    ) -> f64 {
        let current_q = self.get(state, next_state);
        let td_error = reward + discount_factor * self.max_q(next_state) - current_q;
        self.set(state, next_state, current_q + learning_rate * td_error);
        td_error
    }

    /// Whether every entry is exactly zero
    pub fn is_zero(&self) -> bool {
        self.values.iter().flatten().all(|&value| value == 0.0)
    }
}

impl Default for QTable {
    fn default() -> Self {
        Self::new()
    }
}
