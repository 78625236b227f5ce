//! Observer port - abstraction for learning observation and data collection
//!
//! This port defines the interface for observing a Q-learning run, allowing
//! composable data collection without coupling the learning loop to specific
//! output formats or metrics.

use crate::{
    Result,
    q_learning::{QTable, TdUpdate},
};

/// Observer trait for monitoring learning
///
/// Observers can be composed to collect different types of data during a run:
/// - Progress bars for user feedback
/// - JSONL traces of every update
/// - Metrics such as visit counts and TD error
///
/// # Event Sequence
///
/// 1. `on_learning_start(goal, total_iterations)` - once, after the goal has
///    been validated
/// 2. `on_update(update)` - after each temporal-difference update
/// 3. `on_learning_end(table)` - once, with the final table
///
/// If learning fails part-way, `on_learning_end` is not called.
///
/// # Examples
///
/// ```no_run
/// use qroute::{ports::Observer, q_learning::TdUpdate};
///
/// struct UpdateCounter {
///     updates: usize,
/// }
///
/// impl Observer for UpdateCounter {
///     fn on_update(&mut self, _update: &TdUpdate) -> qroute::Result<()> {
///         self.updates += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called before the first iteration.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to initialize observation state.
    fn on_learning_start(&mut self, _goal: usize, _total_iterations: usize) -> Result<()> {
        Ok(())
    }

    /// Called after every temporal-difference update.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_update(&mut self, _update: &TdUpdate) -> Result<()> {
        Ok(())
    }

    /// Called when learning completes.
    ///
    /// Use this to finalize outputs, flush files, or display summaries.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_learning_end(&mut self, _table: &QTable) -> Result<()> {
        Ok(())
    }
}
