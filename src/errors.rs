//! Error types produced while validating geometry and joint inputs.

use thiserror::Error;

/// Error returned when a tube cross-section is not physically meaningful.
///
/// The variants describe the reason the supplied dimensions are rejected so callers
/// can present actionable feedback to users.
///
/// # Examples
///
/// ```
/// use armx::{GeometryError, TubeSection};
///
/// let error = TubeSection::new(0.01, 0.01).expect_err("degenerate tube is rejected");
/// assert_eq!(
///     error,
///     GeometryError::WallExceedsRadius {
///         outer_diameter: 0.01,
///         wall_thickness: 0.01,
///     }
/// );
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum GeometryError {
    /// Returned when the outer diameter is zero or negative.
    #[error("outer diameter must be positive (received {outer_diameter} m)")]
    NonPositiveOuterDiameter {
        /// Rejected outer diameter in metres.
        outer_diameter: f64,
    },
    /// Returned when the wall thickness is zero or negative.
    #[error("wall thickness must be positive (received {wall_thickness} m)")]
    NonPositiveWallThickness {
        /// Rejected wall thickness in metres.
        wall_thickness: f64,
    },
    /// Returned when the walls overlap because they consume more than the outer radius.
    #[error("wall thickness {wall_thickness} m exceeds the radius of a {outer_diameter} m tube")]
    WallExceedsRadius {
        /// Outer diameter of the rejected section in metres.
        outer_diameter: f64,
        /// Wall thickness of the rejected section in metres.
        wall_thickness: f64,
    },
}

/// Error returned when per-joint input sequences cannot be paired up.
///
/// Batch sizing walks the mass, distance and angle sequences in lockstep, so a
/// mismatch would silently drop joints if it were allowed through.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum JointInputError {
    /// Returned when the input sequences differ in length.
    #[error("joint inputs differ in length ({masses} masses, {distances} distances, {angles} angles)")]
    LengthMismatch {
        /// Number of link masses supplied.
        masses: usize,
        /// Number of load distances supplied.
        distances: usize,
        /// Number of joint angles supplied.
        angles: usize,
    },
}
