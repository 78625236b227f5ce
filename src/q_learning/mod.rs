//! Tabular Q-learning and greedy route extraction
//!
//! Q-learning is off-policy temporal difference control. Every update moves
//! one entry of the table toward a bootstrapped target:
//!
//! ```text
//! TD(s, a)  = R(s, a) + γ · max_a' Q(a, a') - Q(s, a)
//! Q(s, a)  += α · TD(s, a)
//! ```
//!
//! Actions are "move to node `a`", so the action taken is also the next
//! state. Once learned, the table is read-only: [`extract_route`] walks it
//! greedily from a start location to the goal.
//!
//! ## Usage Example
//!
//! ```
//! use qroute::{
//!     config::LearningConfig,
//!     environment::Environment,
//!     ports::build_rng,
//!     q_learning::{QLearner, extract_route},
//! };
//!
//! let env = Environment::grid();
//! let goal = env.location_to_state("L1")?;
//! let learner = QLearner::new(LearningConfig::default())?;
//! let table = learner.learn(&env.goal_boosted(goal)?, &mut build_rng(Some(42)), &mut [])?;
//! let route = extract_route(&table, &env, "L9", "L1", 18)?;
//! assert_eq!(route.first().map(|l| l.as_str()), Some("L9"));
//! assert_eq!(route.last().map(|l| l.as_str()), Some("L1"));
//! # Ok::<(), qroute::Error>(())
//! ```

pub mod learner;
pub mod q_table;
pub mod route;
pub mod serialization;

// Public re-exports
pub use learner::{QLearner, TdUpdate};
pub use q_table::QTable;
pub use route::extract_route;
pub use serialization::SavedQTable;
