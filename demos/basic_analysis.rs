use armx::report::{render_joint_report, render_power_report};
use armx::{ElectricalAnalyzer, MechanicalAnalyzer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parameters for a three-joint arm
    let masses = [1.0, 0.8, 0.5];
    let distances = [0.3, 0.2, 0.15];
    let angles = [45.0, 30.0, 0.0];
    let angular_velocities = [1.0, 1.0, 1.0];
    let operating_time = 2.0;

    // Torque and inertia requirements per joint
    let mech = MechanicalAnalyzer::default();
    let joints = mech.analyze_joints(&masses, &distances, &angles)?;

    // Drive power per joint at the commanded slew rates
    let powers: Vec<f64> = joints
        .iter()
        .zip(angular_velocities)
        .map(|(joint, angular_velocity)| mech.required_power(joint.torque, angular_velocity))
        .collect();

    // Supply current and battery sizing for the whole arm
    let electrical = ElectricalAnalyzer::default();
    let power_system = electrical.analyze_power_system(&powers, operating_time);

    print!("{}", render_joint_report(&joints, &powers));
    println!();
    print!("{}", render_power_report(&power_system));

    Ok(())
}
