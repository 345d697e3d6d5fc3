//! Joint torque, inertia and drive power sizing for arm links.
//!
//! The calculations model each link as a uniform slender rod carrying a point
//! load, which is the usual first pass when selecting actuators for a serial
//! arm. Gravity is configurable so the same sizing run can be repeated for a
//! different deployment environment.

use serde::Serialize;

use crate::errors::JointInputError;

/// Standard gravitational acceleration in metres per second squared.
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Requirements computed for a single joint of the arm.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct JointRequirements {
    /// Holding torque at the joint in newton-metres.
    pub torque: f64,
    /// Moment of inertia of the link about the joint in kilogram square metres.
    pub moment_of_inertia: f64,
}

/// Computes torque, inertia and power requirements for arm joints.
///
/// # Examples
///
/// ```
/// use armx::MechanicalAnalyzer;
///
/// let analyzer = MechanicalAnalyzer::default();
/// let torque = analyzer.torque(2.0, 0.5, 90.0);
/// assert!((torque - 9.81).abs() < 1.0e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MechanicalAnalyzer {
    /// Gravitational acceleration in metres per second squared.
    pub gravity: f64,
}

impl Default for MechanicalAnalyzer {
    fn default() -> Self {
        Self {
            gravity: STANDARD_GRAVITY,
        }
    }
}

impl MechanicalAnalyzer {
    /// Creates an analyzer using [`STANDARD_GRAVITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the gravitational torque in newton-metres at a joint holding a
    /// mass at a distance, with the link raised `angle_deg` degrees from
    /// vertical.
    ///
    /// The torque is largest at 90 degrees, where the link is horizontal and
    /// the full weight acts on the lever arm, and vanishes at 0 degrees.
    #[must_use]
    pub fn torque(&self, mass: f64, distance: f64, angle_deg: f64) -> f64 {
        mass * self.gravity * distance * angle_deg.to_radians().sin()
    }

    /// Returns the moment of inertia in kilogram square metres of a uniform
    /// rod of the given mass and length rotating about its end joint.
    #[must_use]
    pub fn moment_of_inertia(&self, mass: f64, length: f64) -> f64 {
        mass * length.powi(2) / 12.0
    }

    /// Returns the mechanical power in watts needed to drive a torque at an
    /// angular velocity in radians per second.
    ///
    /// A zero angular velocity describes a statically held pose and yields
    /// zero power.
    #[must_use]
    pub fn required_power(&self, torque: f64, angular_velocity: f64) -> f64 {
        torque * angular_velocity
    }

    /// Computes the torque and inertia requirements for every joint of an arm.
    ///
    /// The sequences are walked in lockstep: joint `i` holds `masses[i]` at
    /// `distances[i]` with its link raised `angles_deg[i]` degrees. The
    /// distance doubles as the link length for the inertia estimate.
    ///
    /// # Errors
    ///
    /// Returns [`JointInputError::LengthMismatch`] when the sequences differ
    /// in length, since pairing them up would silently drop joints.
    ///
    /// # Examples
    ///
    /// ```
    /// use armx::MechanicalAnalyzer;
    ///
    /// let analyzer = MechanicalAnalyzer::default();
    /// let joints = analyzer.analyze_joints(&[1.0, 0.8], &[0.3, 0.2], &[45.0, 30.0])?;
    /// assert_eq!(joints.len(), 2);
    /// # Ok::<(), armx::JointInputError>(())
    /// ```
    pub fn analyze_joints(
        &self,
        masses: &[f64],
        distances: &[f64],
        angles_deg: &[f64],
    ) -> Result<Vec<JointRequirements>, JointInputError> {
        if masses.len() != distances.len() || masses.len() != angles_deg.len() {
            return Err(JointInputError::LengthMismatch {
                masses: masses.len(),
                distances: distances.len(),
                angles: angles_deg.len(),
            });
        }
        Ok(masses
            .iter()
            .zip(distances)
            .zip(angles_deg)
            .map(|((&mass, &distance), &angle_deg)| JointRequirements {
                torque: self.torque(mass, distance, angle_deg),
                moment_of_inertia: self.moment_of_inertia(mass, distance),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn torque_peaks_when_link_is_horizontal() {
        let analyzer = MechanicalAnalyzer::default();
        assert_relative_eq!(analyzer.torque(2.0, 0.5, 90.0), 9.81, max_relative = 1.0e-12);
    }

    #[test]
    fn torque_vanishes_when_link_is_vertical() {
        let analyzer = MechanicalAnalyzer::default();
        assert_eq!(analyzer.torque(2.0, 0.5, 0.0), 0.0);
    }

    #[test]
    fn custom_gravity_scales_torque() {
        let earth = MechanicalAnalyzer::default();
        let moon = MechanicalAnalyzer { gravity: 1.62 };
        let ratio = moon.torque(2.0, 0.5, 45.0) / earth.torque(2.0, 0.5, 45.0);
        assert_relative_eq!(ratio, 1.62 / 9.81, max_relative = 1.0e-12);
    }

    #[test]
    fn rod_inertia_matches_hand_calculation() {
        let analyzer = MechanicalAnalyzer::default();
        assert_relative_eq!(
            analyzer.moment_of_inertia(1.2, 0.5),
            1.2 * 0.25 / 12.0,
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn holding_a_pose_needs_no_power() {
        let analyzer = MechanicalAnalyzer::default();
        assert_eq!(analyzer.required_power(5.0, 0.0), 0.0);
    }

    #[test]
    fn joint_batch_matches_single_joint_calls() {
        let analyzer = MechanicalAnalyzer::default();
        let joints = analyzer
            .analyze_joints(&[1.0, 0.8, 0.5], &[0.3, 0.2, 0.15], &[45.0, 30.0, 0.0])
            .expect("inputs have matching lengths");
        assert_eq!(joints.len(), 3);
        assert_relative_eq!(joints[0].torque, 2.081_015_257_032_009_3, max_relative = 1.0e-12);
        assert_relative_eq!(joints[1].torque, 0.7848, max_relative = 1.0e-12);
        assert_eq!(joints[2].torque, 0.0);
        assert_relative_eq!(joints[0].moment_of_inertia, 0.0075, max_relative = 1.0e-12);
        assert_relative_eq!(
            joints[1].moment_of_inertia,
            0.002_666_666_666_666_667,
            max_relative = 1.0e-12
        );
        assert_relative_eq!(joints[2].moment_of_inertia, 0.000_937_5, max_relative = 1.0e-12);
    }

    #[test]
    fn mismatched_joint_inputs_are_rejected() {
        let analyzer = MechanicalAnalyzer::default();
        let error = analyzer
            .analyze_joints(&[1.0, 0.8, 0.5], &[0.3, 0.2], &[45.0, 30.0])
            .expect_err("mismatched lengths are rejected");
        assert_eq!(
            error,
            JointInputError::LengthMismatch {
                masses: 3,
                distances: 2,
                angles: 2,
            }
        );
    }

    #[test]
    fn empty_joint_inputs_yield_an_empty_analysis() {
        let analyzer = MechanicalAnalyzer::default();
        let joints = analyzer
            .analyze_joints(&[], &[], &[])
            .expect("empty inputs have matching lengths");
        assert!(joints.is_empty());
    }

    mod proptests {
        use super::*;
        use approx::relative_eq;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn torque_grows_with_angle_up_to_horizontal(
                mass in 0.1..100.0_f64,
                distance in 0.01..5.0_f64,
                low in 0.0..89.0_f64,
                delta in 0.1..1.0_f64,
            ) {
                let analyzer = MechanicalAnalyzer::default();
                let high = (low + delta).min(90.0);
                prop_assert!(
                    analyzer.torque(mass, distance, low) <= analyzer.torque(mass, distance, high)
                );
            }

            #[test]
            fn inertia_is_linear_in_mass(
                mass in 0.1..100.0_f64,
                length in 0.01..5.0_f64,
            ) {
                let analyzer = MechanicalAnalyzer::default();
                prop_assert!(relative_eq!(
                    analyzer.moment_of_inertia(2.0 * mass, length),
                    2.0 * analyzer.moment_of_inertia(mass, length),
                    max_relative = 1.0e-12
                ));
            }

            #[test]
            fn inertia_is_quadratic_in_length(
                mass in 0.1..100.0_f64,
                length in 0.01..5.0_f64,
            ) {
                let analyzer = MechanicalAnalyzer::default();
                prop_assert!(relative_eq!(
                    analyzer.moment_of_inertia(mass, 2.0 * length),
                    4.0 * analyzer.moment_of_inertia(mass, length),
                    max_relative = 1.0e-12
                ));
            }
        }
    }
}
