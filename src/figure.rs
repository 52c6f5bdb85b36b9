use std::path::{Path, PathBuf};

use anyhow::bail;
use plotters::prelude::*;

use crate::cli::ScaleMode;
use crate::data::model::Curve;

// ---------------------------------------------------------------------------
// PNG figure export
// ---------------------------------------------------------------------------

const FIGURE_SIZE: (u32, u32) = (1280, 800);

/// Where the figure goes: first input path plus `.png`.
pub fn png_path(first: &Path) -> PathBuf {
    let mut name = first.as_os_str().to_os_string();
    name.push(".png");
    PathBuf::from(name)
}

/// Render the curves to a PNG, mirroring the interactive view: overlay,
/// legend lower-right, log axes per the scale mode. Samples a log axis
/// cannot show are dropped.
pub fn save_png(
    curves: &[Curve],
    scale: ScaleMode,
    x_label: &str,
    out_path: &Path,
) -> anyhow::Result<()> {
    let y_label = Curve::common_display_name(curves).unwrap_or_default();
    let series: Vec<(Vec<(f64, f64)>, String, (u8, u8, u8))> = curves
        .iter()
        .map(|curve| {
            let points: Vec<(f64, f64)> = curve
                .x
                .iter()
                .zip(curve.y.iter())
                .map(|(&x, &y)| (x, y))
                .filter(|&(x, y)| {
                    (!scale.log_x() || x > 0.0) && (!scale.log_y() || y > 0.0)
                })
                .collect();
            (points, curve.label.clone(), curve.color)
        })
        .filter(|(points, _, _)| !points.is_empty())
        .collect();

    let all_points = series.iter().flat_map(|(points, _, _)| points.iter());
    let Some((x_min, x_max)) = bounds(all_points.clone().map(|p| p.0)) else {
        bail!("no drawable samples on a {scale} scale");
    };
    let (y_min, y_max) = bounds(all_points.map(|p| p.1)).unwrap_or((0.0, 1.0));

    let (x_min, x_max) = pad_range(x_min, x_max, scale.log_x());
    let (y_min, y_max) = pad_range(y_min, y_max, scale.log_y());

    let root = BitMapBackend::new(out_path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    macro_rules! chart {
        ($x_range:expr, $y_range:expr) => {{
            let mut chart = ChartBuilder::on(&root)
                .margin(20)
                .x_label_area_size(45)
                .y_label_area_size(65)
                .build_cartesian_2d($x_range, $y_range)
                .map_err(draw_err)?;
            chart
                .configure_mesh()
                .x_desc(x_label)
                .y_desc(y_label)
                .draw()
                .map_err(draw_err)?;
            for (points, label, (r, g, b)) in &series {
                let color = RGBColor(*r, *g, *b);
                chart
                    .draw_series(LineSeries::new(points.iter().copied(), &color))
                    .map_err(draw_err)?
                    .label(label.as_str())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], color)
                    });
            }
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::LowerRight)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(draw_err)?;
        }};
    }

    match scale {
        ScaleMode::Lin => chart!(x_min..x_max, y_min..y_max),
        ScaleMode::LogLog => {
            chart!((x_min..x_max).log_scale(), (y_min..y_max).log_scale())
        }
        ScaleMode::LogLin => chart!((x_min..x_max).log_scale(), y_min..y_max),
    }

    root.present().map_err(draw_err)?;
    Ok(())
}

fn draw_err(e: impl std::fmt::Display) -> anyhow::Error {
    anyhow::anyhow!("plotting error: {e}")
}

/// Finite min/max of a value stream, if any.
fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    (min <= max).then_some((min, max))
}

/// Keep plotters away from zero-width ranges; a flat curve still needs a
/// visible band around it.
fn pad_range(min: f64, max: f64, log: bool) -> (f64, f64) {
    if min < max {
        return (min, max);
    }
    if log {
        (min / 10.0, max * 10.0)
    } else {
        (min - 0.5, max + 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_lands_next_to_the_first_input() {
        assert_eq!(
            png_path(Path::new("output/test_pk.dat")),
            PathBuf::from("output/test_pk.dat.png")
        );
    }

    #[test]
    fn bounds_ignore_non_finite_samples() {
        let values = [1.0, f64::NAN, 3.0, f64::INFINITY];
        assert_eq!(bounds(values.into_iter()), Some((1.0, 3.0)));
        assert_eq!(bounds(std::iter::empty()), None);
    }

    #[test]
    fn flat_ranges_get_widened() {
        assert_eq!(pad_range(2.0, 2.0, false), (1.5, 2.5));
        assert_eq!(pad_range(10.0, 10.0, true), (1.0, 100.0));
        assert_eq!(pad_range(1.0, 2.0, false), (1.0, 2.0));
    }
}
