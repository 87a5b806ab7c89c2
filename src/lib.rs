//! # Price of Robustness
//!
//! Compares the hourly outcome of SaaS robust games against a baseline game.
//!
//! For each hour of the day and for each scenario, the mean objective value of the
//! game results (the 4th column of the result CSV files) is computed.
//! The ratio of a scenario mean objective to the baseline (scenario #0) mean objective
//! of the same hour is the Price of Robustness, a.k.a. gamma.
//!
//! ```no_run
//! use price_robustness::{Gamma, Layout, MeanTable, ResultFiles};
//!
//! let layout = Layout::default().root("instances_1");
//! layout.validate()?;
//! let means = MeanTable::load(&layout, &ResultFiles::new(&layout))?;
//! let gamma = Gamma::from(&means);
//! gamma.summary();
//! # Ok::<(), price_robustness::Error>(())
//! ```

mod error;
mod gamma;
mod layout;
#[cfg(feature = "plot")]
pub mod plot;
mod results;
mod stats;

pub use error::{Error, Result};
pub use gamma::Gamma;
pub use layout::Layout;
pub use results::{ObjectiveSource, ResultFiles};
pub use stats::{hourly_means, mean, MeanTable};

/// Number of hours in a day
pub const N_HOUR: usize = 24;
/// Number of scenarios, baseline included
pub const N_SCENARIO: usize = 6;
/// Index of the objective value column in the result files
pub const OBJECTIVE_COLUMN: usize = 3;
/// Default prefix of the hour directories
pub const HOUR_PREFIX: &str = "saas_robust_game";
/// Default prefix of the result files
pub const FILE_PREFIX: &str = "game_result";
