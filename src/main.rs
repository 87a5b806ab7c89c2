use indicatif::ProgressIterator;
use price_robustness::{hourly_means, plot, Gamma, Layout, MeanTable, ResultFiles};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "price-robustness",
    about = "Daily Price of Robustness of SaaS robust games"
)]
struct Opt {
    /// Path to the game results repository
    #[structopt(long, parse(from_os_str), default_value = ".")]
    path: PathBuf,
    /// Prefix of the hour directories
    #[structopt(long, default_value = "saas_robust_game")]
    hour_prefix: String,
    /// Prefix of the result files
    #[structopt(long, default_value = "game_result")]
    file_prefix: String,
    /// Chart file name, SVG if the extension is svg
    #[structopt(short, long, parse(from_os_str), default_value = "price_of_robustness.png")]
    output: PathBuf,
    /// Saves the Price of Robustness to a CSV file
    #[structopt(long, parse(from_os_str))]
    csv: Option<PathBuf>,
    /// Prints a summary of the Price of Robustness
    #[structopt(short, long)]
    summary: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let layout = Layout::default()
        .root(&opt.path)
        .hour_prefix(opt.hour_prefix)
        .file_prefix(opt.file_prefix);
    layout.validate()?;

    let results = ResultFiles::new(&layout);
    let hours = layout
        .hours_iter()
        .progress()
        .map(|hour| hourly_means(&results, hour, layout.n_scenario()))
        .collect::<price_robustness::Result<Vec<_>>>()?;
    let means = MeanTable::from_hours(hours)?;
    let gamma = Gamma::from(&means);

    if opt.summary {
        gamma.summary();
    }
    if let Some(filename) = opt.csv {
        gamma.to_csv(filename)?;
    }
    plot::plot(&gamma, &opt.output)?;

    Ok(())
}
