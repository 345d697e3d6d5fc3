//! Section properties, combined stresses and strains for circular arm tubing.
//!
//! Arm links are modelled as thin-walled circular tubes under simultaneous
//! axial, bending and torsional load. Cross-section dimensions are validated
//! once, when a [`TubeSection`] is constructed, so every derived quantity is
//! a total function over valid sections.

use std::f64::consts::PI;

use serde::Serialize;

use crate::errors::GeometryError;

/// A validated circular tube cross-section.
///
/// The constructor rejects dimensions that do not describe a physical tube,
/// which keeps the section property formulas free of per-call checks. The
/// solid-shaft limit, where the walls meet at the centre, is accepted.
///
/// # Examples
///
/// ```
/// use armx::TubeSection;
///
/// let section = TubeSection::new(0.025, 0.002)?;
/// assert!((section.inner_diameter() - 0.021).abs() < 1.0e-12);
/// # Ok::<(), armx::GeometryError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TubeSection {
    /// Outer diameter in metres.
    outer_diameter: f64,
    /// Wall thickness in metres.
    wall_thickness: f64,
}

impl TubeSection {
    /// Creates a tube section from an outer diameter and wall thickness, both
    /// in metres.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] when the outer diameter or wall thickness
    /// is zero or negative, or when the wall thickness exceeds the outer
    /// radius so the walls would overlap.
    pub fn new(outer_diameter: f64, wall_thickness: f64) -> Result<Self, GeometryError> {
        if outer_diameter <= 0.0 {
            return Err(GeometryError::NonPositiveOuterDiameter { outer_diameter });
        }
        if wall_thickness <= 0.0 {
            return Err(GeometryError::NonPositiveWallThickness { wall_thickness });
        }
        if 2.0 * wall_thickness > outer_diameter {
            return Err(GeometryError::WallExceedsRadius {
                outer_diameter,
                wall_thickness,
            });
        }
        Ok(Self {
            outer_diameter,
            wall_thickness,
        })
    }

    /// Creates a solid circular section of the given diameter in metres.
    ///
    /// A solid shaft is the limiting case of a tube whose walls meet at the
    /// centre.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonPositiveOuterDiameter`] when the diameter
    /// is zero or negative.
    pub fn solid(diameter: f64) -> Result<Self, GeometryError> {
        Self::new(diameter, diameter / 2.0)
    }

    /// Returns the outer diameter in metres.
    #[must_use]
    pub fn outer_diameter(&self) -> f64 {
        self.outer_diameter
    }

    /// Returns the wall thickness in metres.
    #[must_use]
    pub fn wall_thickness(&self) -> f64 {
        self.wall_thickness
    }

    /// Returns the inner diameter in metres. Zero for a solid section.
    #[must_use]
    pub fn inner_diameter(&self) -> f64 {
        self.outer_diameter - 2.0 * self.wall_thickness
    }

    /// Returns the outer radius in metres.
    #[must_use]
    pub fn outer_radius(&self) -> f64 {
        self.outer_diameter / 2.0
    }

    /// Computes the area, second moment of area and section modulus of the
    /// annulus.
    #[must_use]
    pub fn properties(&self) -> SectionProperties {
        let outer = self.outer_diameter;
        let inner = self.inner_diameter();
        let area = PI * (outer.powi(2) - inner.powi(2)) / 4.0;
        let moment_of_inertia = PI * (outer.powi(4) - inner.powi(4)) / 64.0;
        SectionProperties {
            area,
            moment_of_inertia,
            section_modulus: moment_of_inertia / self.outer_radius(),
        }
    }

    /// Returns the polar moment of inertia in metres to the fourth power.
    ///
    /// For a circular section this is twice the second moment of area.
    #[must_use]
    pub fn polar_moment(&self) -> f64 {
        PI * (self.outer_diameter.powi(4) - self.inner_diameter().powi(4)) / 32.0
    }
}

/// Section properties of a circular tube.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SectionProperties {
    /// Cross-sectional area in square metres.
    pub area: f64,
    /// Second moment of area in metres to the fourth power.
    pub moment_of_inertia: f64,
    /// Elastic section modulus in cubic metres.
    pub section_modulus: f64,
}

/// Loads applied to a tube cross-section.
///
/// The default is the unloaded state, so partial load cases read naturally
/// with struct update syntax.
///
/// # Examples
///
/// ```
/// use armx::TubeLoading;
///
/// let pure_bending = TubeLoading {
///     bending_moment: 50.0,
///     ..TubeLoading::default()
/// };
/// assert_eq!(pure_bending.axial_force, 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct TubeLoading {
    /// Axial force in newtons, tension positive.
    pub axial_force: f64,
    /// Bending moment in newton-metres.
    pub bending_moment: f64,
    /// Torque in newton-metres.
    pub torque: f64,
}

/// A linear-elastic material.
///
/// The default is a generic structural steel with no yield strength, so
/// factor-of-safety reporting is opt-in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Material {
    /// Young's modulus in pascals.
    pub youngs_modulus: f64,
    /// Poisson's ratio.
    pub poissons_ratio: f64,
    /// Yield strength in pascals, when factor-of-safety reporting is wanted.
    pub yield_strength: Option<f64>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            youngs_modulus: 200.0e9,
            poissons_ratio: 0.3,
            yield_strength: None,
        }
    }
}

impl Material {
    /// Returns the shear modulus in pascals derived from the elastic
    /// constants.
    #[must_use]
    pub fn shear_modulus(&self) -> f64 {
        self.youngs_modulus / (2.0 * (1.0 + self.poissons_ratio))
    }
}

/// Normal and shear stress components at the outer fibre, in pascals.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StressState {
    /// Axial stress in pascals, tension positive.
    pub axial: f64,
    /// Bending stress at the outer fibre in pascals.
    pub bending: f64,
    /// Torsional shear stress at the outer fibre in pascals.
    pub torsional: f64,
    /// Von Mises equivalent stress in pascals.
    pub von_mises: f64,
    /// Maximum principal stress in pascals.
    pub max_principal: f64,
}

/// Elastic strains corresponding to a [`StressState`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StrainState {
    /// Axial normal strain.
    pub axial: f64,
    /// Bending normal strain at the outer fibre.
    pub bending: f64,
    /// Torsional engineering shear strain at the outer fibre.
    pub torsional: f64,
}

/// Equivalent stresses for a combined load case, in pascals.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CombinedStress {
    /// Von Mises equivalent stress in pascals.
    pub von_mises: f64,
    /// Maximum principal stress in pascals.
    pub max_principal: f64,
}

/// Complete structural analysis of a tube under combined load.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TubeAnalysis {
    /// Section properties of the analysed tube.
    pub section: SectionProperties,
    /// Stress components at the outer fibre.
    pub stresses: StressState,
    /// Elastic strains at the outer fibre.
    pub strains: StrainState,
    /// Yield strength over von Mises stress, when the material records a
    /// yield strength. Infinite for an unloaded tube.
    pub factor_of_safety: Option<f64>,
}

/// Computes stresses and strains in circular arm tubing.
///
/// # Examples
///
/// ```
/// use armx::{TubeAnalyzer, TubeLoading, TubeSection};
///
/// let section = TubeSection::new(0.025, 0.002)?;
/// let analyzer = TubeAnalyzer::default();
/// let analysis = analyzer.analyze(
///     section,
///     TubeLoading {
///         axial_force: 1000.0,
///         bending_moment: 50.0,
///         torque: 20.0,
///     },
/// );
/// assert!(analysis.stresses.von_mises > analysis.stresses.axial);
/// # Ok::<(), armx::GeometryError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TubeAnalyzer {
    /// Material of the analysed tubing.
    pub material: Material,
}

impl TubeAnalyzer {
    /// Creates an analyzer for a material with the given elastic constants
    /// and no yield strength.
    #[must_use]
    pub fn new(youngs_modulus: f64, poissons_ratio: f64) -> Self {
        Self {
            material: Material {
                youngs_modulus,
                poissons_ratio,
                yield_strength: None,
            },
        }
    }

    /// Creates an analyzer for the given material.
    #[must_use]
    pub fn from_material(material: Material) -> Self {
        Self { material }
    }

    /// Opts into factor-of-safety reporting against the given yield strength
    /// in pascals.
    #[must_use]
    pub fn with_yield_strength(mut self, yield_strength: f64) -> Self {
        self.material.yield_strength = Some(yield_strength);
        self
    }

    /// Returns the axial stress in pascals for a force in newtons on the
    /// section.
    #[must_use]
    pub fn axial_stress(&self, axial_force: f64, section: TubeSection) -> f64 {
        axial_force / section.properties().area
    }

    /// Returns the bending stress in pascals at the outer fibre for a moment
    /// in newton-metres.
    #[must_use]
    pub fn bending_stress(&self, bending_moment: f64, section: TubeSection) -> f64 {
        bending_moment / section.properties().section_modulus
    }

    /// Returns the torsional shear stress in pascals at the outer fibre for a
    /// torque in newton-metres.
    #[must_use]
    pub fn torsional_stress(&self, torque: f64, section: TubeSection) -> f64 {
        torque * section.outer_radius() / section.polar_moment()
    }

    /// Combines the normal and shear stresses of a load case into equivalent
    /// stresses.
    ///
    /// The axial and bending stresses are superposed at the outer fibre along
    /// with the torsional shear stress, the plane-stress worst case for a
    /// slender tube.
    #[must_use]
    pub fn combined_stress(&self, loading: TubeLoading, section: TubeSection) -> CombinedStress {
        let normal = self.axial_stress(loading.axial_force, section)
            + self.bending_stress(loading.bending_moment, section);
        let shear = self.torsional_stress(loading.torque, section);
        CombinedStress {
            von_mises: (normal.powi(2) + 3.0 * shear.powi(2)).sqrt(),
            max_principal: normal / 2.0 + ((normal / 2.0).powi(2) + shear.powi(2)).sqrt(),
        }
    }

    /// Returns the normal strain produced by a normal stress in pascals.
    #[must_use]
    pub fn strain_from_stress(&self, stress: f64) -> f64 {
        stress / self.material.youngs_modulus
    }

    /// Returns the engineering shear strain produced by a shear stress in
    /// pascals.
    #[must_use]
    pub fn shear_strain(&self, shear_stress: f64) -> f64 {
        shear_stress / self.material.shear_modulus()
    }

    /// Runs the complete structural analysis of a tube under combined load.
    ///
    /// Bundles the section properties, the stress components at the outer
    /// fibre, the corresponding elastic strains and, when the material
    /// records a yield strength, the factor of safety against von Mises
    /// yield.
    #[must_use]
    pub fn analyze(&self, section: TubeSection, loading: TubeLoading) -> TubeAnalysis {
        let properties = section.properties();
        let axial = self.axial_stress(loading.axial_force, section);
        let bending = self.bending_stress(loading.bending_moment, section);
        let torsional = self.torsional_stress(loading.torque, section);
        let combined = self.combined_stress(loading, section);
        let factor_of_safety = self.material.yield_strength.map(|yield_strength| {
            if combined.von_mises == 0.0 {
                f64::INFINITY
            } else {
                yield_strength / combined.von_mises
            }
        });
        TubeAnalysis {
            section: properties,
            stresses: StressState {
                axial,
                bending,
                torsional,
                von_mises: combined.von_mises,
                max_principal: combined.max_principal,
            },
            strains: StrainState {
                axial: self.strain_from_stress(axial),
                bending: self.strain_from_stress(bending),
                torsional: self.shear_strain(torsional),
            },
            factor_of_safety,
        }
    }
}
