//! Chart rendering for sizing studies.
//!
//! Each function renders a PNG at the given path using the `plotters` bitmap
//! backend. The curves come from [`crate::profiles`], so a study can reuse
//! the same sampled data for plotting and for file export.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::profiles::{s_curve_profile, torque_vs_length, trapezoidal_profile};

/// Number of samples drawn per curve.
const SAMPLES: usize = 100;

/// Returns a padded `(low, high)` axis range covering the values.
///
/// Degenerate data, a flat curve or a single sample, falls back to a unit
/// band so the chart builder never sees an empty range.
fn axis_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (low, high) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), value| {
        (lo.min(value), hi.max(value))
    });
    if !(high > low) {
        let centre = if low.is_finite() { low } else { 0.0 };
        return (centre - 1.0, centre + 1.0);
    }
    let pad = 0.05 * (high - low);
    (low - pad, high + pad)
}

/// Plots the gravitational holding torque against link length.
///
/// The mass hangs at the tip of a link raised `angle_deg` degrees from
/// vertical while the length sweeps from `min_length` to `max_length` metres.
///
/// # Errors
///
/// Returns an error when the drawing backend cannot render or write the
/// image.
pub fn plot_torque_vs_length(
    mass: f64,
    angle_deg: f64,
    min_length: f64,
    max_length: f64,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let curve = torque_vs_length(mass, angle_deg, min_length, max_length, SAMPLES);
    let (x_low, x_high) = axis_range(curve.iter().map(|point| point.0));
    let (y_low, y_high) = axis_range(curve.iter().map(|point| point.1));

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(15)
        .caption(
            format!("Torque vs arm length ({mass} kg at {angle_deg}°)"),
            ("sans-serif", 24),
        )
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .build_cartesian_2d(x_low..x_high, y_low..y_high)?;

    chart
        .configure_mesh()
        .x_desc("Arm length (m)")
        .y_desc("Required torque (Nm)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(curve, &BLUE))?
        .label("Holding torque")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;

    Ok(())
}

/// Plots the trapezoidal and raised-cosine power envelopes on shared axes.
///
/// # Errors
///
/// Returns an error when the drawing backend cannot render or write the
/// image.
pub fn plot_power_profiles(
    max_power: f64,
    acceleration_time: f64,
    total_time: f64,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let trapezoid = trapezoidal_profile(max_power, acceleration_time, total_time, SAMPLES);
    let s_curve = s_curve_profile(max_power, acceleration_time, total_time, SAMPLES);
    let (x_low, x_high) = axis_range(trapezoid.iter().map(|point| point.0));
    let (y_low, y_high) = axis_range(
        trapezoid
            .iter()
            .chain(s_curve.iter())
            .map(|point| point.1),
    );

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(15)
        .caption("Motor power profiles", ("sans-serif", 24))
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .build_cartesian_2d(x_low..x_high, y_low..y_high)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Power (W)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(trapezoid, &BLUE))?
        .label("Trapezoidal")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
    chart
        .draw_series(LineSeries::new(s_curve, &RED))?
        .label("S-curve")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;

    Ok(())
}

/// Renders the torque curve and the power profiles as two stacked panels.
///
/// # Errors
///
/// Returns an error when the drawing backend cannot render or write the
/// image.
#[allow(clippy::too_many_arguments)]
pub fn plot_combined_analysis(
    mass: f64,
    angle_deg: f64,
    min_length: f64,
    max_length: f64,
    max_power: f64,
    acceleration_time: f64,
    total_time: f64,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let torque_curve = torque_vs_length(mass, angle_deg, min_length, max_length, SAMPLES);
    let trapezoid = trapezoidal_profile(max_power, acceleration_time, total_time, SAMPLES);
    let s_curve = s_curve_profile(max_power, acceleration_time, total_time, SAMPLES);

    let root = BitMapBackend::new(path, (800, 900)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((2, 1));

    let (x_low, x_high) = axis_range(torque_curve.iter().map(|point| point.0));
    let (y_low, y_high) = axis_range(torque_curve.iter().map(|point| point.1));
    let mut torque_chart = ChartBuilder::on(&panels[0])
        .margin(15)
        .caption("Torque vs arm length", ("sans-serif", 24))
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .build_cartesian_2d(x_low..x_high, y_low..y_high)?;
    torque_chart
        .configure_mesh()
        .x_desc("Arm length (m)")
        .y_desc("Torque (Nm)")
        .draw()?;
    torque_chart.draw_series(LineSeries::new(torque_curve, &BLUE))?;

    let (x_low, x_high) = axis_range(trapezoid.iter().map(|point| point.0));
    let (y_low, y_high) = axis_range(
        trapezoid
            .iter()
            .chain(s_curve.iter())
            .map(|point| point.1),
    );
    let mut power_chart = ChartBuilder::on(&panels[1])
        .margin(15)
        .caption("Motor power profiles", ("sans-serif", 24))
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .build_cartesian_2d(x_low..x_high, y_low..y_high)?;
    power_chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Power (W)")
        .draw()?;
    power_chart
        .draw_series(LineSeries::new(trapezoid, &BLUE))?
        .label("Trapezoidal")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
    power_chart
        .draw_series(LineSeries::new(s_curve, &RED))?
        .label("S-curve")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));
    power_chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_range_pads_the_data_span() {
        let (low, high) = axis_range([0.0, 10.0].into_iter());
        assert!(low < 0.0);
        assert!(high > 10.0);
    }

    #[test]
    fn axis_range_survives_flat_data() {
        let (low, high) = axis_range(std::iter::repeat(5.0).take(4));
        assert!(low < 5.0 && high > 5.0);
    }

    #[test]
    fn axis_range_survives_empty_data() {
        let (low, high) = axis_range(std::iter::empty());
        assert!(low < high);
    }
}
