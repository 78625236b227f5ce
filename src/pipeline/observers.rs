//! Observer adapters for learning runs
//!
//! Observers allow composable data collection during learning without
//! coupling the learning loop to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    sync::{Arc, Mutex, PoisonError},
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    environment::NODE_COUNT,
    ports::Observer,
    q_learning::{QTable, TdUpdate},
};

/// Progress bar observer - Shows learning progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    goal: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            goal: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_learning_start(&mut self, goal: usize, total_iterations: usize) -> Result<()> {
        let pb = ProgressBar::new(total_iterations as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} updates ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        pb.set_message(format!("goal state {goal}"));
        self.goal = goal;
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_update(&mut self, update: &TdUpdate) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.set_position(update.iteration as u64 + 1);
        }
        Ok(())
    }

    fn on_learning_end(&mut self, table: &QTable) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!(
                "goal state {}, max Q {:.2}",
                self.goal,
                table.max_q(self.goal)
            ));
        }
        Ok(())
    }
}

/// Running totals collected by [`MetricsObserver`].
#[derive(Debug, Clone, Default)]
pub struct LearningMetrics {
    goal: Option<usize>,
    planned_iterations: usize,
    iterations: usize,
    visits: [usize; NODE_COUNT],
    total_abs_td_error: f64,
    last_abs_td_error: f64,
    finished: bool,
}

impl LearningMetrics {
    /// Number of updates applied so far
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// How often each state was sampled
    pub fn visits(&self) -> &[usize; NODE_COUNT] {
        &self.visits
    }

    /// Mean absolute TD error over all updates
    pub fn mean_abs_td_error(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.total_abs_td_error / self.iterations as f64
        }
    }

    /// Get metrics summary
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            goal: self.goal,
            planned_iterations: self.planned_iterations,
            iterations: self.iterations,
            visits: self.visits.to_vec(),
            mean_abs_td_error: self.mean_abs_td_error(),
            last_abs_td_error: self.last_abs_td_error,
            finished: self.finished,
        }
    }
}

/// Summary of learning metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub goal: Option<usize>,
    pub planned_iterations: usize,
    pub iterations: usize,
    pub visits: Vec<usize>,
    pub mean_abs_td_error: f64,
    pub last_abs_td_error: f64,
    pub finished: bool,
}

/// Metrics observer - Tracks learning metrics
///
/// The observer is usually boxed into a planner, so the metrics live behind
/// a shared handle that the caller keeps.
#[derive(Debug, Clone, Default)]
pub struct MetricsObserver {
    metrics: Arc<Mutex<LearningMetrics>>,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the collected metrics; stays valid after the observer moves.
    pub fn handle(&self) -> Arc<Mutex<LearningMetrics>> {
        Arc::clone(&self.metrics)
    }

    /// Snapshot of the current metrics
    pub fn summary(&self) -> MetricsSummary {
        self.metrics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .summary()
    }

    fn with_metrics(&self, f: impl FnOnce(&mut LearningMetrics)) {
        let mut metrics = self.metrics.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *metrics);
    }
}

impl Observer for MetricsObserver {
    fn on_learning_start(&mut self, goal: usize, total_iterations: usize) -> Result<()> {
        self.with_metrics(|metrics| {
            *metrics = LearningMetrics {
                goal: Some(goal),
                planned_iterations: total_iterations,
                ..LearningMetrics::default()
            };
        });
        Ok(())
    }

    fn on_update(&mut self, update: &TdUpdate) -> Result<()> {
        self.with_metrics(|metrics| {
            metrics.iterations += 1;
            metrics.visits[update.state] += 1;
            metrics.total_abs_td_error += update.td_error.abs();
            metrics.last_abs_td_error = update.td_error.abs();
        });
        Ok(())
    }

    fn on_learning_end(&mut self, _table: &QTable) -> Result<()> {
        self.with_metrics(|metrics| metrics.finished = true);
        Ok(())
    }
}

/// JSONL observer - Writes one line per TD update
pub struct JsonlObserver {
    writer: BufWriter<File>,
}

impl JsonlObserver {
    /// Create a new JSONL observer
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        Ok(Self { writer })
    }
}

impl Observer for JsonlObserver {
    fn on_update(&mut self, update: &TdUpdate) -> Result<()> {
        serde_json::to_writer(&mut self.writer, update)?;
        writeln!(&mut self.writer)?;
        Ok(())
    }

    fn on_learning_end(&mut self, _table: &QTable) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::BufRead;

    use tempfile::tempdir;

    use super::*;

    fn update(iteration: usize, state: usize, td_error: f64) -> TdUpdate {
        TdUpdate {
            iteration,
            state,
            action: 0,
            reward: 1.0,
            td_error,
            q_before: 0.0,
            q_after: 0.9 * td_error,
        }
    }

    #[test]
    fn metrics_track_visits_and_td_error() {
        let mut observer = MetricsObserver::new();
        let handle = observer.handle();

        observer.on_learning_start(0, 3).unwrap();
        observer.on_update(&update(0, 2, 1.0)).unwrap();
        observer.on_update(&update(1, 2, -3.0)).unwrap();
        observer.on_update(&update(2, 5, 2.0)).unwrap();
        observer.on_learning_end(&QTable::new()).unwrap();

        let metrics = handle.lock().unwrap();
        assert_eq!(metrics.iterations(), 3);
        assert_eq!(metrics.visits()[2], 2);
        assert_eq!(metrics.visits()[5], 1);
        assert!((metrics.mean_abs_td_error() - 2.0).abs() < 1e-12);

        let summary = metrics.summary();
        assert_eq!(summary.goal, Some(0));
        assert_eq!(summary.planned_iterations, 3);
        assert!(summary.finished);
    }

    #[test]
    fn metrics_reset_on_new_run() {
        let mut observer = MetricsObserver::new();
        observer.on_learning_start(1, 1).unwrap();
        observer.on_update(&update(0, 1, 1.0)).unwrap();
        observer.on_learning_start(4, 10).unwrap();

        let summary = observer.summary();
        assert_eq!(summary.iterations, 0);
        assert_eq!(summary.goal, Some(4));
        assert!(!summary.finished);
    }

    #[test]
    fn jsonl_writes_one_line_per_update() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trace.jsonl");

        let mut observer = JsonlObserver::new(&path).unwrap();
        observer.on_learning_start(0, 2).unwrap();
        observer.on_update(&update(0, 3, 1.0)).unwrap();
        observer.on_update(&update(1, 6, 0.5)).unwrap();
        observer.on_learning_end(&QTable::new()).unwrap();

        let file = File::open(&path).unwrap();
        let lines: Vec<String> = std::io::BufReader::new(file)
            .lines()
            .map(|line| line.unwrap())
            .collect();
        assert_eq!(lines.len(), 2);

        let second: TdUpdate = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(second.iteration, 1);
        assert_eq!(second.state, 6);
    }
}
