use beamstress::{Beam, ImageHeatmap, DEFAULT_SIGMA_X_PATH, DEFAULT_TAU_XY_PATH};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A 0.2 m deep, 1 m wide section spanning 2 m, sampled every centimetre
    let mut beam = Beam::from_dimensions(0.2, 1.0, 2.0, 0.01)?;

    // Evaluate both stress fields under the sample distributed load
    beam.fill_normal_stress_grid();
    beam.fill_shear_stress_grid();

    // Write the heatmaps next to the working directory
    let renderer = ImageHeatmap::default();
    beam.export_sigma_x_heatmap(&renderer, DEFAULT_SIGMA_X_PATH)?;
    beam.export_tau_xy_heatmap(&renderer, DEFAULT_TAU_XY_PATH)?;

    println!("I = {:.4e} m^4", beam.second_moment_of_area());
    Ok(())
}
