mod analysis;
mod conditions;
mod report;

use analysis::run_analysis;
use conditions::load_config;
use report::render_summary;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Logging stays silent unless BEAMSTRESS_LOG names a level, e.g. `debug`
    // to see the grid allocation and fill records.
    let _ = env_logger::Builder::from_env("BEAMSTRESS_LOG").try_init();

    // Geometry, load magnitudes and output paths come from BEAMSTRESS_CONFIG
    // when set, otherwise from the 0.2 m x 2 m sample beam. The beam is a
    // cantilever, with x measured from the free end where the moment vanishes.
    // See: https://en.wikipedia.org/wiki/Cantilever
    let config = load_config()?;

    // Fill the bending and shear stress grids and write one heatmap per field.
    // Bending stress follows the flexure formula of Euler-Bernoulli beam theory
    // (https://en.wikipedia.org/wiki/Euler%E2%80%93Bernoulli_beam_theory) and
    // shear stress the Jourawski formula
    // (https://en.wikipedia.org/wiki/Shear_stress#Beam_shear).
    let renderer = config.heatmap;
    let summary = run_analysis(&config, &renderer)?;

    // Print the section property and the stress extremes so the numbers can be
    // checked by hand against the formulas above.
    let report = render_summary(&summary);
    println!("{report}");

    Ok(())
}
