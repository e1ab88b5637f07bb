use beamstress::{Beam, BeamGeometry, ImageHeatmap, LoadModel, RectangularFirstMoment};
use uom::si::f64::Length;
use uom::si::length::{centimeter, meter, millimeter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let geometry = BeamGeometry::from_lengths(
        Length::new::<centimeter>(30.0),
        Length::new::<centimeter>(15.0),
        Length::new::<meter>(3.0),
        Length::new::<millimeter>(10.0),
    )?;

    // Point load of 2 kN at the free end, with x measured from the loaded tip,
    // so M(x) = P x. Column `c` samples x = c * (length / resolution), far past
    // the 3 m span; the linear law holds for any x >= 0.
    let tip_load = 2_000.0;
    let load = LoadModel::new(move |x: f64| tip_load * x, tip_load, RectangularFirstMoment);

    let mut beam = Beam::with_load(geometry, load);
    beam.fill_normal_stress_grid();
    beam.fill_shear_stress_grid();

    let renderer = ImageHeatmap {
        cell_size: 2,
        ..ImageHeatmap::default()
    };
    beam.export_sigma_x_heatmap(&renderer, "tip-load-sigma-x.png")?;

    if let Some(summary) = beam.sigma_x_summary() {
        println!(
            "sigma_x ranges from {:+.3e} Pa to {:+.3e} Pa",
            summary.min, summary.max
        );
    }
    Ok(())
}
