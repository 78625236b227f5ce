//! Snapshots of learned Q-tables.
//!
//! A table is only meaningful for the goal it was learned toward, so the
//! snapshot records the goal label and the parameters used alongside it.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::{
    config::LearningConfig, environment::Environment, identifiers::Location,
    q_learning::{q_table::QTable, route::extract_route},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedQTable {
    pub version: u32,
    /// Goal the table was learned toward
    pub goal: Location,
    pub config: LearningConfig,
    pub seed: Option<u64>,
    pub table: QTable,
}

impl SavedQTable {
    pub const VERSION: u32 = 1;

    pub fn new(goal: Location, config: LearningConfig, seed: Option<u64>, table: QTable) -> Self {
        Self {
            version: Self::VERSION,
            goal,
            config,
            seed,
            table,
        }
    }

    /// Greedy route from `start` to the stored goal, without re-learning.
    pub fn route_from(
        &self,
        environment: &Environment,
        start: &str,
        max_steps: usize,
    ) -> Result<Vec<Location>> {
        self.check_version()?;
        let route = extract_route(
            &self.table,
            environment,
            start,
            self.goal.as_str(),
            max_steps,
        )?;
        Ok(route)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())
            .with_context(|| format!("Failed to create file: {}", path.as_ref().display()))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, self).context("Failed to serialize Q-table")?;
        writer.flush().context("Failed to flush Q-table file")?;

        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("Failed to open file: {}", path.as_ref().display()))?;
        let reader = BufReader::new(file);

        let saved: Self =
            serde_json::from_reader(reader).context("Failed to deserialize Q-table")?;
        saved.check_version()?;
        Ok(saved)
    }

    fn check_version(&self) -> Result<()> {
        if self.version != Self::VERSION {
            return Err(anyhow!(
                "Unsupported Q-table save format version: {}. Expected {}",
                self.version,
                Self::VERSION
            ));
        }
        Ok(())
    }
}
