use armx::profiles::linspace;
use armx::report::render_tube_report;
use armx::{TubeAnalyzer, TubeLoading, TubeSection};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A 25 mm steel tube with 2 mm walls under a combined load case
    let loading = TubeLoading {
        axial_force: 1000.0,
        bending_moment: 50.0,
        torque: 20.0,
    };
    let analyzer = TubeAnalyzer::new(200.0e9, 0.3).with_yield_strength(250.0e6);

    println!("Tube analysis (25 mm outer diameter, 2 mm wall):");
    let section = TubeSection::new(0.025, 0.002)?;
    print!("{}", render_tube_report(&analyzer.analyze(section, loading)));

    // Sweep the wall thickness from 1 mm to 5 mm and watch the equivalent
    // stress fall as the section grows.
    println!();
    println!("Wall thickness (mm) | Von Mises stress (MPa)");
    println!("----------------------------------------");
    for thickness in linspace(0.001, 0.005, 5) {
        let section = TubeSection::new(0.025, thickness)?;
        let analysis = analyzer.analyze(section, loading);
        println!(
            "{:8.1} mm      | {:8.2} MPa",
            thickness * 1.0e3,
            analysis.stresses.von_mises / 1.0e6
        );
    }

    Ok(())
}
