use armx::report::{render_joint_report, render_power_report, render_tube_report};
use armx::{
    ElectricalAnalyzer, Material, MechanicalAnalyzer, TubeAnalyzer, TubeLoading, TubeSection,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Size the joints of a three-link arm holding its payload in a raised
    // pose. Each joint must react the gravitational torque of the mass it
    // carries. See: https://en.wikipedia.org/wiki/Torque
    let mech = MechanicalAnalyzer::default();
    let masses = [1.0, 0.8, 0.5];
    let distances = [0.3, 0.2, 0.15];
    let angles = [45.0, 30.0, 0.0];
    let joints = mech.analyze_joints(&masses, &distances, &angles)?;

    // Convert the torques into a drive power budget at a 1 rad/s slew rate,
    // then size the supply current and battery for a two-hour duty cycle.
    let powers: Vec<f64> = joints
        .iter()
        .map(|joint| mech.required_power(joint.torque, 1.0))
        .collect();
    let electrical = ElectricalAnalyzer::default();
    let power_system = electrical.analyze_power_system(&powers, 2.0);

    // Check the structural margins of the upper-arm tube under the combined
    // load case. The von Mises criterion folds the normal and shear stresses
    // into one comparable number.
    // See: https://en.wikipedia.org/wiki/Von_Mises_yield_criterion
    let section = TubeSection::new(0.025, 0.002)?;
    let structural = TubeAnalyzer::from_material(Material {
        yield_strength: Some(250.0e6),
        ..Material::default()
    });
    let analysis = structural.analyze(
        section,
        TubeLoading {
            axial_force: 1000.0,
            bending_moment: 50.0,
            torque: 20.0,
        },
    );

    // Render the human-friendly reports and print them for the CLI user.
    print!("{}", render_joint_report(&joints, &powers));
    println!();
    print!("{}", render_power_report(&power_system));
    println!();
    print!("{}", render_tube_report(&analysis));

    Ok(())
}
