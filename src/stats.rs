use crate::{Error, Layout, ObjectiveSource, Result};

/// Arithmetic mean, `None` if there is no value
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Mean objective of every scenario for a given hour
pub fn hourly_means<S>(source: &S, hour: usize, n_scenario: usize) -> Result<Vec<f64>>
where
    S: ObjectiveSource + ?Sized,
{
    (0..n_scenario)
        .map(|scenario| {
            let objectives = source.objectives(hour, scenario)?;
            mean(&objectives).ok_or(Error::EmptyResults { hour, scenario })
        })
        .collect()
}

/// Mean objectives indexed by scenario then hour
///
/// Scenario #0 is the baseline
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MeanTable {
    means: Vec<Vec<f64>>,
}
impl MeanTable {
    /// Loads the mean objectives of all the hours and scenarios of the layout
    pub fn load<S>(layout: &Layout, source: &S) -> Result<Self>
    where
        S: ObjectiveSource + ?Sized,
    {
        let hours = layout
            .hours_iter()
            .map(|hour| hourly_means(source, hour, layout.n_scenario()))
            .collect::<Result<Vec<_>>>()?;
        Self::from_hours(hours)
    }
    /// Creates a table from the means of each scenario
    ///
    /// Every scenario must have the same number of hours
    pub fn from_rows(means: Vec<Vec<f64>>) -> Result<Self> {
        let expected = means.first().map_or(0, |row| row.len());
        if let Some((scenario, row)) = means
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            return Err(Error::RaggedScenario {
                scenario,
                expected,
                found: row.len(),
            });
        }
        Ok(Self { means })
    }
    /// Creates a table from the hourly means, one item per hour with the means of all the scenarios
    ///
    /// Every hour must have the same number of scenarios
    pub fn from_hours<I>(hours: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vec<f64>>,
    {
        let mut means: Vec<Vec<f64>> = vec![];
        for (hour, scenarios) in hours.into_iter().enumerate() {
            if hour == 0 {
                means.resize_with(scenarios.len(), Vec::new);
            } else if scenarios.len() != means.len() {
                return Err(Error::RaggedHour {
                    hour,
                    expected: means.len(),
                    found: scenarios.len(),
                });
            }
            means
                .iter_mut()
                .zip(scenarios)
                .for_each(|(row, value)| row.push(value));
        }
        Ok(Self { means })
    }
    pub fn n_scenario(&self) -> usize {
        self.means.len()
    }
    pub fn n_hour(&self) -> usize {
        self.means.first().map_or(0, |row| row.len())
    }
    pub fn get(&self, scenario: usize, hour: usize) -> Option<f64> {
        self.means.get(scenario)?.get(hour).copied()
    }
    /// Baseline mean objectives
    pub fn baseline(&self) -> Option<&[f64]> {
        self.means.first().map(|row| row.as_slice())
    }
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.means
    }
}
