use crate::{Error, MeanTable, Result};
use std::path::Path;

/// Price of Robustness
///
/// Ratio of the mean objective of each scenario to the baseline mean objective,
/// hour by hour. The baseline (scenario #0) row is kept at 0 and never reported.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Gamma {
    ratios: Vec<Vec<f64>>,
}
impl From<&MeanTable> for Gamma {
    fn from(means: &MeanTable) -> Self {
        let Some((baseline, scenarios)) = means.rows().split_first() else {
            return Self::default();
        };
        baseline
            .iter()
            .enumerate()
            .filter(|(_, &m0)| m0 == 0f64)
            .for_each(|(hour, _)| log::warn!("baseline mean objective is 0 at hour {}", hour));
        let mut ratios = vec![vec![0f64; baseline.len()]];
        ratios.extend(scenarios.iter().map(|row| {
            row.iter()
                .zip(baseline.iter())
                .map(|(m, m0)| m / m0)
                .collect::<Vec<f64>>()
        }));
        Self { ratios }
    }
}
impl Gamma {
    pub fn n_scenario(&self) -> usize {
        self.ratios.len()
    }
    pub fn n_hour(&self) -> usize {
        self.ratios.first().map_or(0, |row| row.len())
    }
    /// Ratio for a given scenario and hour, `None` for the baseline
    pub fn ratio(&self, scenario: usize, hour: usize) -> Option<f64> {
        self.series(scenario)?.get(hour).copied()
    }
    /// Daily ratios of a given scenario, `None` for the baseline
    pub fn series(&self, scenario: usize) -> Option<&[f64]> {
        if scenario == 0 {
            None
        } else {
            self.ratios.get(scenario).map(|row| row.as_slice())
        }
    }
    /// Iterator over the scenarios and their daily ratios, baseline excluded
    pub fn iter_series(&self) -> impl Iterator<Item = (usize, &[f64])> + '_ {
        self.ratios
            .iter()
            .enumerate()
            .skip(1)
            .map(|(scenario, row)| (scenario, row.as_slice()))
    }
    /// Series legend label
    pub fn label(scenario: usize) -> String {
        format!("Gamma {}", scenario)
    }
    /// Range of the finite ratios over all scenarios
    pub fn range(&self) -> Option<(f64, f64)> {
        self.iter_series()
            .flat_map(|(_, row)| row.iter().cloned())
            .filter(|x| x.is_finite())
            .fold(None, |range, x| match range {
                None => Some((x, x)),
                Some((min, max)) => Some((f64::min(min, x), f64::max(max, x))),
            })
    }
    pub fn summary(&self) {
        let max_value = |x: &[f64]| x.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let min_value = |x: &[f64]| x.iter().cloned().fold(f64::INFINITY, f64::min);
        let mean_value = |x: &[f64]| x.iter().sum::<f64>() / x.len() as f64;

        println!("PRICE OF ROBUSTNESS:");
        println!(" - # of hours: {}", self.n_hour());
        println!(
            "    {:^10}: {:^12}  {:^12}  {:^12}",
            "SCENARIO", "MEAN", "MIN", "MAX"
        );
        for (scenario, series) in self.iter_series() {
            println!(
                "  - {:10}: {:>12.4}  {:>12.4}  {:>12.4}",
                Self::label(scenario),
                mean_value(series),
                min_value(series),
                max_value(series)
            );
        }
    }
    /// Writes the ratios to a CSV file, one row per hour
    pub fn to_csv<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        let path = filename.as_ref();
        let csv_err = |source| Error::Csv {
            path: path.to_path_buf(),
            source,
        };
        let mut wtr = csv::Writer::from_path(path).map_err(csv_err)?;
        let mut keys = vec![String::from("Hour")];
        keys.extend(self.iter_series().map(|(scenario, _)| Self::label(scenario)));
        wtr.write_record(&keys).map_err(csv_err)?;
        for hour in 0..self.n_hour() {
            let mut record = vec![format!("{}", hour)];
            record.extend(
                self.iter_series().map(|(_, series)| {
                    series
                        .get(hour)
                        .map_or_else(String::new, |value| format!("{}", value))
                }),
            );
            wtr.write_record(&record).map_err(csv_err)?;
        }
        wtr.flush().map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Price of robustness written to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(value: f64) -> Vec<f64> {
        vec![value; 24]
    }

    #[test]
    fn ratio_to_baseline() {
        let means = MeanTable::from_rows(vec![
            vec![15., 4.],
            vec![30., 2.],
            vec![15., 0.],
        ])
        .unwrap();
        let gamma = Gamma::from(&means);
        assert_eq!(gamma.ratio(1, 0), Some(2.));
        assert_eq!(gamma.ratio(1, 1), Some(0.5));
        assert_eq!(gamma.ratio(2, 0), Some(1.));
        assert_eq!(gamma.ratio(2, 1), Some(0.));
    }

    #[test]
    fn baseline_is_never_reported() {
        let means = MeanTable::from_rows((0..6).map(|s| day(1. + s as f64)).collect()).unwrap();
        let gamma = Gamma::from(&means);
        assert_eq!(gamma.n_scenario(), 6);
        assert_eq!(gamma.n_hour(), 24);
        assert!(gamma.series(0).is_none());
        assert!(gamma.ratio(0, 5).is_none());
        let scenarios: Vec<_> = gamma.iter_series().map(|(s, _)| s).collect();
        assert_eq!(scenarios, vec![1, 2, 3, 4, 5]);
        assert_eq!(gamma.series(3), Some(&day(4.)[..]));
    }

    #[test]
    fn exact_division() {
        let m0 = [3.7, 11.1, 0.3];
        let m1 = [1.9, 0.7, 2.2];
        let means = MeanTable::from_rows(vec![m0.to_vec(), m1.to_vec()]).unwrap();
        let gamma = Gamma::from(&means);
        for hour in 0..3 {
            assert_eq!(gamma.ratio(1, hour), Some(m1[hour] / m0[hour]));
        }
    }

    #[test]
    fn zero_baseline() {
        let means = MeanTable::from_rows(vec![vec![0.], vec![2.]]).unwrap();
        let gamma = Gamma::from(&means);
        assert_eq!(gamma.ratio(1, 0), Some(f64::INFINITY));
        assert_eq!(gamma.range(), None);
    }

    #[test]
    fn range_of_ratios() {
        let means =
            MeanTable::from_rows(vec![vec![2., 2.], vec![1., 4.], vec![3., 2.]]).unwrap();
        let gamma = Gamma::from(&means);
        assert_eq!(gamma.range(), Some((0.5, 2.)));
    }

    #[test]
    fn empty_table() {
        let gamma = Gamma::from(&MeanTable::default());
        assert_eq!(gamma.n_scenario(), 0);
        assert_eq!(gamma.iter_series().count(), 0);
    }

    #[test]
    fn csv_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gamma.csv");
        let means =
            MeanTable::from_rows((0..6).map(|s| day(2. * (1. + s as f64))).collect()).unwrap();
        Gamma::from(&means).to_csv(&path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("Hour,Gamma 1,Gamma 2,Gamma 3,Gamma 4,Gamma 5")
        );
        assert_eq!(lines.next(), Some("0,2,3,4,5,6"));
        assert_eq!(lines.count(), 23);
    }

    #[test]
    fn csv_export_of_short_series() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gamma.csv");
        let gamma = Gamma {
            ratios: vec![vec![0., 0., 0.], vec![1., 2., 3.], vec![4., 5.]],
        };
        gamma.to_csv(&path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines, vec!["Hour,Gamma 1,Gamma 2", "0,1,4", "1,2,5", "2,3,"]);
    }
}
