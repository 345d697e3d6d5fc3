//! Sampled curves for sizing studies and plotting.
//!
//! These helpers produce `(x, y)` sample vectors ready to feed a drawing
//! backend or dump to a file. The motion profiles follow the two classic
//! shapes used when budgeting actuator power: a trapezoid with linear ramps
//! and a smoother raised-cosine version of the same envelope.

use std::f64::consts::PI;

use crate::mechanical::MechanicalAnalyzer;

/// Returns `samples` evenly spaced values from `start` to `end` inclusive.
///
/// Zero samples yield an empty vector and a single sample yields just
/// `start`, so downstream plotting code never divides by zero.
#[must_use]
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Samples how the gravitational holding torque grows with link length.
///
/// The mass is held at the tip of a link raised `angle_deg` degrees from
/// vertical while the length sweeps from `min_length` to `max_length` metres.
/// Standard gravity is used, matching the defaults of
/// [`MechanicalAnalyzer`].
#[must_use]
pub fn torque_vs_length(
    mass: f64,
    angle_deg: f64,
    min_length: f64,
    max_length: f64,
    samples: usize,
) -> Vec<(f64, f64)> {
    let analyzer = MechanicalAnalyzer::default();
    linspace(min_length, max_length, samples)
        .into_iter()
        .map(|length| (length, analyzer.torque(mass, length, angle_deg)))
        .collect()
}

/// Returns the trapezoidal power envelope at time `t`.
///
/// The envelope ramps linearly from zero to `max_power` over
/// `acceleration_time` seconds, holds the plateau, then ramps back down over
/// the final `acceleration_time` seconds of `total_time`. A zero
/// acceleration time degenerates to a flat plateau.
#[must_use]
pub fn trapezoidal_power(max_power: f64, acceleration_time: f64, total_time: f64, t: f64) -> f64 {
    if t < acceleration_time {
        max_power / acceleration_time * t
    } else if t > total_time - acceleration_time {
        max_power - max_power / acceleration_time * (t - (total_time - acceleration_time))
    } else {
        max_power
    }
}

/// Returns the raised-cosine power envelope at time `t`.
///
/// Same plateau and timing as [`trapezoidal_power`] but with smooth
/// half-cosine ramps, the shape produced by jerk-limited motion controllers.
#[must_use]
pub fn s_curve_power(max_power: f64, acceleration_time: f64, total_time: f64, t: f64) -> f64 {
    if t < acceleration_time {
        max_power * (1.0 - (PI * t / acceleration_time).cos()) / 2.0
    } else if t > total_time - acceleration_time {
        max_power * (1.0 + (PI * (t - (total_time - acceleration_time)) / acceleration_time).cos())
            / 2.0
    } else {
        max_power
    }
}

/// Samples the trapezoidal power envelope over `[0, total_time]`.
#[must_use]
pub fn trapezoidal_profile(
    max_power: f64,
    acceleration_time: f64,
    total_time: f64,
    samples: usize,
) -> Vec<(f64, f64)> {
    linspace(0.0, total_time, samples)
        .into_iter()
        .map(|t| (t, trapezoidal_power(max_power, acceleration_time, total_time, t)))
        .collect()
}

/// Samples the raised-cosine power envelope over `[0, total_time]`.
#[must_use]
pub fn s_curve_profile(
    max_power: f64,
    acceleration_time: f64,
    total_time: f64,
    samples: usize,
) -> Vec<(f64, f64)> {
    linspace(0.0, total_time, samples)
        .into_iter()
        .map(|t| (t, s_curve_power(max_power, acceleration_time, total_time, t)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linspace_covers_both_endpoints() {
        let points = linspace(0.1, 0.5, 5);
        assert_eq!(points.len(), 5);
        assert_relative_eq!(points[0], 0.1, max_relative = 1.0e-12);
        assert_relative_eq!(points[2], 0.3, max_relative = 1.0e-12);
        assert_relative_eq!(points[4], 0.5, max_relative = 1.0e-12);
    }

    #[test]
    fn degenerate_sample_counts_are_safe() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.25, 1.0, 1), vec![0.25]);
    }

    #[test]
    fn torque_curve_grows_along_the_link() {
        let curve = torque_vs_length(2.0, 45.0, 0.1, 0.5, 9);
        assert_eq!(curve.len(), 9);
        for window in curve.windows(2) {
            assert!(window[1].1 > window[0].1);
        }
        let analyzer = MechanicalAnalyzer::default();
        assert_relative_eq!(curve[8].1, analyzer.torque(2.0, 0.5, 45.0), max_relative = 1.0e-12);
    }

    #[test]
    fn trapezoid_hits_the_plateau_and_returns_to_zero() {
        assert_eq!(trapezoidal_power(100.0, 2.0, 10.0, 0.0), 0.0);
        assert_relative_eq!(trapezoidal_power(100.0, 2.0, 10.0, 1.0), 50.0, max_relative = 1.0e-12);
        assert_eq!(trapezoidal_power(100.0, 2.0, 10.0, 5.0), 100.0);
        assert_relative_eq!(trapezoidal_power(100.0, 2.0, 10.0, 9.0), 50.0, max_relative = 1.0e-12);
        assert_relative_eq!(
            trapezoidal_power(100.0, 2.0, 10.0, 10.0),
            0.0,
            epsilon = 1.0e-9
        );
    }

    #[test]
    fn s_curve_ramps_through_half_power() {
        assert_eq!(s_curve_power(100.0, 2.0, 10.0, 0.0), 0.0);
        assert_relative_eq!(s_curve_power(100.0, 2.0, 10.0, 1.0), 50.0, max_relative = 1.0e-9);
        assert_eq!(s_curve_power(100.0, 2.0, 10.0, 5.0), 100.0);
        assert_relative_eq!(s_curve_power(100.0, 2.0, 10.0, 9.0), 50.0, max_relative = 1.0e-9);
        assert_relative_eq!(s_curve_power(100.0, 2.0, 10.0, 10.0), 0.0, epsilon = 1.0e-9);
    }

    #[test]
    fn zero_acceleration_time_degenerates_to_a_flat_plateau() {
        for &t in &[0.0, 2.5, 5.0, 10.0] {
            assert_eq!(trapezoidal_power(100.0, 0.0, 10.0, t), 100.0);
            assert_eq!(s_curve_power(100.0, 0.0, 10.0, t), 100.0);
        }
    }

    #[test]
    fn sampled_profiles_share_the_time_axis() {
        let trapezoid = trapezoidal_profile(100.0, 2.0, 10.0, 21);
        let s_curve = s_curve_profile(100.0, 2.0, 10.0, 21);
        assert_eq!(trapezoid.len(), 21);
        for (a, b) in trapezoid.iter().zip(&s_curve) {
            assert_eq!(a.0, b.0);
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn trapezoid_stays_within_the_envelope(
                max_power in 1.0..1_000.0_f64,
                acceleration_time in 0.0..5.0_f64,
                plateau in 0.0..20.0_f64,
                fraction in 0.0..1.0_f64,
            ) {
                let total_time = 2.0 * acceleration_time + plateau;
                let t = fraction * total_time;
                let power = trapezoidal_power(max_power, acceleration_time, total_time, t);
                prop_assert!(power >= -1.0e-9);
                prop_assert!(power <= max_power + 1.0e-9);
            }

            #[test]
            fn s_curve_stays_within_the_envelope(
                max_power in 1.0..1_000.0_f64,
                acceleration_time in 0.0..5.0_f64,
                plateau in 0.0..20.0_f64,
                fraction in 0.0..1.0_f64,
            ) {
                let total_time = 2.0 * acceleration_time + plateau;
                let t = fraction * total_time;
                let power = s_curve_power(max_power, acceleration_time, total_time, t);
                prop_assert!(power >= -1.0e-9);
                prop_assert!(power <= max_power + 1.0e-9);
            }
        }
    }
}
