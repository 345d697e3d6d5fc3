use armx::{ElectricalAnalyzer, MechanicalAnalyzer, TubeAnalyzer, TubeLoading, TubeSection};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Run the full sizing pipeline for a three-joint arm
    let mech = MechanicalAnalyzer::default();
    let joints = mech.analyze_joints(&[1.0, 0.8, 0.5], &[0.3, 0.2, 0.15], &[45.0, 30.0, 0.0])?;
    let powers: Vec<f64> = joints
        .iter()
        .map(|joint| mech.required_power(joint.torque, 1.0))
        .collect();
    let power_system = ElectricalAnalyzer::default().analyze_power_system(&powers, 2.0);

    let section = TubeSection::new(0.025, 0.002)?;
    let tube = TubeAnalyzer::default().analyze(
        section,
        TubeLoading {
            axial_force: 1000.0,
            bending_moment: 50.0,
            torque: 20.0,
        },
    );

    // Dump everything as one JSON document for downstream tooling
    let document = json!({
        "joints": joints,
        "power_system": power_system,
        "tube": tube,
    });
    println!("{}", serde_json::to_string_pretty(&document)?);

    Ok(())
}
