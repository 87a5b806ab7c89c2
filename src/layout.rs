use crate::{Error, Result, FILE_PREFIX, HOUR_PREFIX, N_HOUR, N_SCENARIO, OBJECTIVE_COLUMN};
use std::{
    ops::Range,
    path::{Path, PathBuf},
};

/// Directory layout of the robust game results
///
/// The results are stored as `<root>/<hour prefix><hour>/<file prefix><scenario>.csv`
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
    hour_prefix: String,
    file_prefix: String,
    n_hour: usize,
    n_scenario: usize,
    column: usize,
}
impl Default for Layout {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            hour_prefix: String::from(HOUR_PREFIX),
            file_prefix: String::from(FILE_PREFIX),
            n_hour: N_HOUR,
            n_scenario: N_SCENARIO,
            column: OBJECTIVE_COLUMN,
        }
    }
}
impl Layout {
    pub fn root<P: AsRef<Path>>(self, root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ..self
        }
    }
    pub fn hour_prefix<S: Into<String>>(self, hour_prefix: S) -> Self {
        Self {
            hour_prefix: hour_prefix.into(),
            ..self
        }
    }
    pub fn file_prefix<S: Into<String>>(self, file_prefix: S) -> Self {
        Self {
            file_prefix: file_prefix.into(),
            ..self
        }
    }
    pub fn hours(self, n_hour: usize) -> Self {
        Self { n_hour, ..self }
    }
    pub fn scenarios(self, n_scenario: usize) -> Self {
        Self { n_scenario, ..self }
    }
    /// Sets the zero-based index of the objective column
    pub fn column(self, column: usize) -> Self {
        Self { column, ..self }
    }
    pub fn n_hour(&self) -> usize {
        self.n_hour
    }
    pub fn n_scenario(&self) -> usize {
        self.n_scenario
    }
    pub fn objective_column(&self) -> usize {
        self.column
    }
    pub fn hours_iter(&self) -> Range<usize> {
        0..self.n_hour
    }
    pub fn scenarios_iter(&self) -> Range<usize> {
        0..self.n_scenario
    }
    /// Path to the results of a given hour
    pub fn hour_dir(&self, hour: usize) -> PathBuf {
        self.root.join(format!("{}{}", self.hour_prefix, hour))
    }
    /// Path to the results of a given hour and scenario
    pub fn result_file(&self, hour: usize, scenario: usize) -> PathBuf {
        self.hour_dir(hour)
            .join(format!("{}{}.csv", self.file_prefix, scenario))
    }
    /// Checks that every hour directory exists
    pub fn validate(&self) -> Result<()> {
        for hour in self.hours_iter() {
            let path = self.hour_dir(hour);
            if !path.is_dir() {
                return Err(Error::MissingHour { hour, path });
            }
        }
        log::info!("Found {} hours of results in {:?}", self.n_hour, self.root);
        Ok(())
    }
}
