use std::{io, num::ParseFloatError, path::PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("hour {hour} directory not found: {path:?}")]
    MissingHour { hour: usize, path: PathBuf },
    #[error("failed to open {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to process the CSV file {path:?}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("row #{row} of {path:?} has no column #{column}")]
    MissingColumn {
        path: PathBuf,
        row: usize,
        column: usize,
    },
    #[error("row #{row} of {path:?}: {value:?} is not a number")]
    ParseFloat {
        path: PathBuf,
        row: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("no data rows for hour {hour}, scenario {scenario}")]
    EmptyResults { hour: usize, scenario: usize },
    #[error("hour {hour} has {found} scenario means, expected {expected}")]
    RaggedHour {
        hour: usize,
        expected: usize,
        found: usize,
    },
    #[error("scenario {scenario} has {found} hourly means, expected {expected}")]
    RaggedScenario {
        scenario: usize,
        expected: usize,
        found: usize,
    },
    #[error("failed to draw the chart: {0}")]
    Plot(String),
}
pub type Result<T> = std::result::Result<T, Error>;
