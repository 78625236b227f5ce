//! Environment model: the fixed route graph and its reward structure
//!
//! States are integer indices in `0..NODE_COUNT`, each paired with a
//! [`Location`] label. `reward[s][a]` is the immediate reward for moving from
//! state `s` to node `a`; a positive entry marks a real (directed) edge.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, identifiers::Location};

/// Number of nodes in the route graph.
pub const NODE_COUNT: usize = 9;

/// Reward placed on the goal's self-transition while learning toward it.
///
/// Larger than any discounted sum of unit edge rewards, so the goal always
/// dominates as a terminal transition.
pub const GOAL_REWARD: f64 = 999.0;

/// Square reward (or value) matrix indexed by `[state][action]`.
pub type Matrix = [[f64; NODE_COUNT]; NODE_COUNT];

const GRID_LABELS: [&str; NODE_COUNT] = ["L1", "L2", "L3", "L4", "L5", "L6", "L7", "L8", "L9"];

#[rustfmt::skip]
const GRID_REWARDS: Matrix = [
    [0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
];

/// Immutable description of the state space and base rewards.
#[derive(Debug, Clone)]
pub struct Environment {
    locations: Vec<Location>,
    index: HashMap<Location, usize>,
    rewards: Matrix,
}

impl Environment {
    /// Build an environment from labels and a reward matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateLocation`] if two states share a label and
    /// [`Error::InvalidReward`] if any reward is NaN or infinite.
    pub fn new<L: Into<Location>>(labels: [L; NODE_COUNT], rewards: Matrix) -> Result<Self> {
        let locations: Vec<Location> = labels.into_iter().map(Into::into).collect();

        let mut index = HashMap::with_capacity(NODE_COUNT);
        for (state, location) in locations.iter().enumerate() {
            if index.insert(location.clone(), state).is_some() {
                return Err(Error::DuplicateLocation {
                    label: location.to_string(),
                });
            }
        }

        for (state, row) in rewards.iter().enumerate() {
            for (action, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(Error::InvalidReward {
                        state,
                        action,
                        value,
                    });
                }
            }
        }

        Ok(Self {
            locations,
            index,
            rewards,
        })
    }

    /// The fixed nine-location grid (`L1`..`L9`).
    pub fn grid() -> Self {
        let locations: Vec<Location> = GRID_LABELS.iter().copied().map(Location::from).collect();
        let index = locations
            .iter()
            .enumerate()
            .map(|(state, location)| (location.clone(), state))
            .collect();
        Self {
            locations,
            index,
            rewards: GRID_REWARDS,
        }
    }

    /// Number of states (always [`NODE_COUNT`]).
    pub fn node_count(&self) -> usize {
        self.locations.len()
    }

    /// All location labels in state order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Map a label to its state index.
    pub fn location_to_state(&self, label: &str) -> Result<usize> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| Error::UnknownLocation {
                label: label.to_string(),
                expected: self.expected_labels(),
            })
    }

    /// Map a state index back to its label.
    pub fn state_to_location(&self, state: usize) -> Result<&Location> {
        self.locations.get(state).ok_or(Error::InvalidState {
            state,
            max: NODE_COUNT - 1,
        })
    }

    /// Base reward matrix.
    pub fn rewards(&self) -> &Matrix {
        &self.rewards
    }

    /// Base reward for moving from `state` to `action`.
    pub fn reward(&self, state: usize, action: usize) -> f64 {
        self.rewards[state][action]
    }

    /// Whether `from -> to` is a real edge in the base matrix.
    pub fn is_edge(&self, from: usize, to: usize) -> bool {
        from < NODE_COUNT && to < NODE_COUNT && self.rewards[from][to] > 0.0
    }

    /// States directly reachable from `state` in the base matrix.
    pub fn neighbors(&self, state: usize) -> Vec<usize> {
        (0..NODE_COUNT)
            .filter(|&next| self.is_edge(state, next))
            .collect()
    }

    /// Copy of the rewards with the goal's self-transition boosted.
    ///
    /// The base matrix is left untouched.
    pub fn goal_boosted(&self, goal: usize) -> Result<GoalRewards> {
        if goal >= NODE_COUNT {
            return Err(Error::InvalidState {
                state: goal,
                max: NODE_COUNT - 1,
            });
        }
        let mut rewards = self.rewards;
        rewards[goal][goal] = GOAL_REWARD;
        Ok(GoalRewards { goal, rewards })
    }

    fn expected_labels(&self) -> String {
        self.locations
            .iter()
            .map(Location::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::grid()
    }
}

/// Reward matrix specialised to a single goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalRewards {
    goal: usize,
    rewards: Matrix,
}

impl GoalRewards {
    /// Goal state this matrix was boosted for.
    pub fn goal(&self) -> usize {
        self.goal
    }

    pub fn reward(&self, state: usize, action: usize) -> f64 {
        self.rewards[state][action]
    }

    pub fn matrix(&self) -> &Matrix {
        &self.rewards
    }

    /// Actions with a positive boosted reward from `state`, in index order.
    pub fn playable_actions(&self, state: usize) -> Vec<usize> {
        self.rewards[state]
            .iter()
            .enumerate()
            .filter(|(_, reward)| **reward > 0.0)
            .map(|(action, _)| action)
            .collect()
    }
}
