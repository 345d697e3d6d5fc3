use armx::plot::{plot_combined_analysis, plot_power_profiles, plot_torque_vs_length};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Torque vs length curves for a 1 kg payload at several joint angles
    let mass = 1.0;
    let min_length = 0.1;
    let max_length = 1.0;
    for angle in [0.0, 30.0, 45.0, 60.0, 90.0] {
        let path = PathBuf::from(format!("torque_vs_length_{angle}deg.png"));
        plot_torque_vs_length(mass, angle, min_length, max_length, &path)?;
        println!("Wrote {}", path.display());
    }

    // Trapezoidal and S-curve power envelopes for a 100 W motion
    let max_power = 100.0;
    let acceleration_time = 1.0;
    let total_time = 5.0;
    let path = PathBuf::from("power_profiles.png");
    plot_power_profiles(max_power, acceleration_time, total_time, &path)?;
    println!("Wrote {}", path.display());

    // Both studies stacked on a single image
    let path = PathBuf::from("combined_analysis.png");
    plot_combined_analysis(
        mass,
        45.0,
        min_length,
        max_length,
        max_power,
        acceleration_time,
        total_time,
        &path,
    )?;
    println!("Wrote {}", path.display());

    // All done
    Ok(())
}
