//! Plain-text reports for sizing runs.

use crate::electrical::PowerSystemAnalysis;
use crate::mechanical::JointRequirements;
use crate::structural::TubeAnalysis;
use std::fmt::Write;

/// Format a stress with an engineering unit prefix.
///
/// Magnitudes of a gigapascal and above print in GPa, a megapascal and above
/// in MPa, everything else in plain pascals. The sign is preserved.
#[must_use]
pub fn format_stress(stress: f64) -> String {
    if stress.abs() >= 1.0e9 {
        format!("{:.2} GPa", stress / 1.0e9)
    } else if stress.abs() >= 1.0e6 {
        format!("{:.2} MPa", stress / 1.0e6)
    } else {
        format!("{stress:.2} Pa")
    }
}

/// Format a strain in microstrain.
#[must_use]
pub fn format_strain(strain: f64) -> String {
    format!("{:.2} με", strain * 1.0e6)
}

/// Render a per-joint summary of torque, inertia and drive power.
///
/// The requirements and powers must correspond one-to-one, as produced by a
/// sizing run over the same joints.
#[must_use]
pub fn render_joint_report(requirements: &[JointRequirements], powers: &[f64]) -> String {
    let mut output = String::new();

    writeln!(&mut output, "Joint requirements:").expect("writing to string cannot fail");
    for (index, (joint, power)) in requirements.iter().zip(powers).enumerate() {
        writeln!(
            &mut output,
            "Joint {}: torque = {:.2} Nm, inertia = {:.4} kg·m², power = {:.2} W",
            index + 1,
            joint.torque,
            joint.moment_of_inertia,
            power
        )
        .expect("writing to string cannot fail");
    }

    output
}

/// Render a summary of the electrical sizing for an arm.
#[must_use]
pub fn render_power_report(analysis: &PowerSystemAnalysis) -> String {
    let mut output = String::new();

    writeln!(
        &mut output,
        "Power system: total power = {:.2} W, supply current = {:.2} A",
        analysis.total_power, analysis.supply_current
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Battery: {:.2} Wh ({:.2} Ah at nominal voltage)",
        analysis.battery.energy, analysis.battery.capacity
    )
    .expect("writing to string cannot fail");

    output
}

/// Render a textual summary of a tube analysis.
///
/// The report walks through section properties, stresses and strains in the
/// units engineers quote them in, so the output can be cross-checked against
/// hand calculations. The factor of safety appears only when the material
/// records a yield strength.
#[must_use]
pub fn render_tube_report(analysis: &TubeAnalysis) -> String {
    let mut output = String::new();

    writeln!(&mut output, "Section properties:").expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "  Area: {:.2} mm², moment of inertia: {:.2} mm⁴, section modulus: {:.2} mm³",
        analysis.section.area * 1.0e6,
        analysis.section.moment_of_inertia * 1.0e12,
        analysis.section.section_modulus * 1.0e9
    )
    .expect("writing to string cannot fail");

    writeln!(&mut output, "Stresses:").expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "  Axial: {}, bending: {}, torsional: {}",
        format_stress(analysis.stresses.axial),
        format_stress(analysis.stresses.bending),
        format_stress(analysis.stresses.torsional)
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "  Von Mises: {}, max principal: {}",
        format_stress(analysis.stresses.von_mises),
        format_stress(analysis.stresses.max_principal)
    )
    .expect("writing to string cannot fail");

    writeln!(&mut output, "Strains:").expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "  Axial: {}, bending: {}, torsional: {}",
        format_strain(analysis.strains.axial),
        format_strain(analysis.strains.bending),
        format_strain(analysis.strains.torsional)
    )
    .expect("writing to string cannot fail");

    if let Some(factor) = analysis.factor_of_safety {
        writeln!(&mut output, "Factor of safety against yield: {factor:.1}")
            .expect("writing to string cannot fail");
    }

    output
}
