use crate::{Error, Layout, Result};
use std::{fs::File, path::Path, time::Instant};

/// Source of the objective values of a robust game for a given hour and scenario
pub trait ObjectiveSource {
    fn objectives(&self, hour: usize, scenario: usize) -> Result<Vec<f64>>;
}
impl<F> ObjectiveSource for F
where
    F: Fn(usize, usize) -> Result<Vec<f64>>,
{
    fn objectives(&self, hour: usize, scenario: usize) -> Result<Vec<f64>> {
        self(hour, scenario)
    }
}

/// Robust game results CSV files
pub struct ResultFiles<'a> {
    layout: &'a Layout,
}
impl<'a> ResultFiles<'a> {
    pub fn new(layout: &'a Layout) -> Self {
        Self { layout }
    }
    /// Reads the given column of all the data rows of a CSV file
    ///
    /// The first row is the header and it is skipped
    pub fn read<P: AsRef<Path>>(path: P, column: usize) -> Result<Vec<f64>> {
        let path = path.as_ref();
        let csv_file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loading {:?}...", path);
        let now = Instant::now();
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(csv_file);

        let mut values = vec![];
        for (k, result) in rdr.records().enumerate() {
            let row = k + 1;
            let record = result.map_err(|source| Error::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            let data = record.get(column).ok_or_else(|| Error::MissingColumn {
                path: path.to_path_buf(),
                row,
                column,
            })?;
            let value = data.parse::<f64>().map_err(|source| Error::ParseFloat {
                path: path.to_path_buf(),
                row,
                value: data.to_string(),
                source,
            })?;
            values.push(value);
        }
        log::debug!(
            "... {} rows loaded in {}ms",
            values.len(),
            now.elapsed().as_millis()
        );
        Ok(values)
    }
}
impl<'a> ObjectiveSource for ResultFiles<'a> {
    fn objectives(&self, hour: usize, scenario: usize) -> Result<Vec<f64>> {
        Self::read(
            self.layout.result_file(hour, scenario),
            self.layout.objective_column(),
        )
    }
}
