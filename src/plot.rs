use crate::{Error, Gamma, Result};
use plotters::{coord::Shift, prelude::*};
use std::path::Path;

pub const TITLE: &str = "Daily Price of Robustness |SaaSs|=1";
const SIZE: (u32, u32) = (768, 512);

fn plot_err<E: std::error::Error>(e: E) -> Error {
    Error::Plot(e.to_string())
}

/// Y axis range with a 10% padding
fn y_range(gamma: &Gamma) -> (f64, f64) {
    match gamma.range() {
        Some((min, max)) if max > min => {
            let padding = 0.1 * (max - min);
            (min - padding, max + padding)
        }
        Some((value, _)) => {
            let padding = 0.1 * value.abs().max(1.);
            (value - padding, value + padding)
        }
        None => (0., 1.),
    }
}

/// Plots the Price of Robustness daily series
///
/// The chart is saved as SVG if the file extension is `svg` and as a bitmap otherwise
pub fn plot<P: AsRef<Path>>(gamma: &Gamma, filename: P) -> Result<()> {
    let path = filename.as_ref();
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("svg") => draw(gamma, SVGBackend::new(path, SIZE).into_drawing_area())?,
        _ => draw(gamma, BitMapBackend::new(path, SIZE).into_drawing_area())?,
    }
    log::info!("Chart saved to {:?}", path);
    Ok(())
}

fn draw<DB: DrawingBackend>(gamma: &Gamma, plot: DrawingArea<DB, Shift>) -> Result<()> {
    plot.fill(&WHITE).map_err(plot_err)?;

    let n_hour = gamma.n_hour() as u32;
    let (y_min, y_max) = y_range(gamma);
    let mut chart = ChartBuilder::on(&plot)
        .caption(TITLE, ("sans-serif", 20))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .margin(10)
        .build_cartesian_2d(0u32..n_hour.saturating_sub(1).max(1), y_min..y_max)
        .map_err(plot_err)?;
    chart
        .configure_mesh()
        .x_labels(n_hour as usize)
        .x_desc("Time of the day [h]")
        .y_desc("Price of Robustness")
        .draw()
        .map_err(plot_err)?;

    // color #0 belongs to the baseline
    for (scenario, series) in gamma.iter_series() {
        let color = colorous::TABLEAU10[scenario % colorous::TABLEAU10.len()];
        let rgb = RGBColor(color.r, color.g, color.b);
        chart
            .draw_series(LineSeries::new(
                series
                    .iter()
                    .enumerate()
                    .map(|(hour, &value)| (hour as u32, value)),
                &rgb,
            ))
            .map_err(plot_err)?
            .label(Gamma::label(scenario))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &rgb));
    }
    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .position(SeriesLabelPosition::UpperRight)
        .draw()
        .map_err(plot_err)?;
    plot.present().map_err(plot_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MeanTable;

    fn assert_range(range: (f64, f64), expected: (f64, f64)) {
        assert!((range.0 - expected.0).abs() < 1e-12, "{:?}", range);
        assert!((range.1 - expected.1).abs() < 1e-12, "{:?}", range);
    }

    #[test]
    fn padded_range() {
        let means = MeanTable::from_rows(vec![vec![2., 2.], vec![2., 4.]]).unwrap();
        assert_range(y_range(&Gamma::from(&means)), (0.9, 2.1));
    }

    #[test]
    fn flat_range() {
        let means = MeanTable::from_rows(vec![vec![5.], vec![5.]]).unwrap();
        assert_range(y_range(&Gamma::from(&means)), (0.9, 1.1));
    }

    #[test]
    fn undefined_range() {
        let means = MeanTable::from_rows(vec![vec![0.], vec![5.]]).unwrap();
        assert_eq!(y_range(&Gamma::from(&means)), (0., 1.));
    }

    #[test]
    #[ignore = "requires system fonts"]
    fn svg_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gamma.svg");
        let means =
            MeanTable::from_rows((0..6).map(|s| vec![1. + s as f64; 24]).collect()).unwrap();
        plot(&Gamma::from(&means), &path).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("Gamma 5"));
    }
}
