use crate::analysis::AnalysisSummary;
use beamstress::GridSummary;
use std::fmt::Write;

/// Render a textual summary of the beam analysis.
///
/// The report lists the section property and the extremes of both stress
/// fields so the numbers can be cross-checked against the flexure formula
/// (<https://en.wikipedia.org/wiki/Euler%E2%80%93Bernoulli_beam_theory>).
#[must_use]
pub fn render_summary(summary: &AnalysisSummary) -> String {
    let mut output = String::new();
    let config = &summary.config;

    // State the problem first: the section, the span and the sampling step
    // define every number that follows.
    writeln!(
        &mut output,
        "Cantilever beam {:.3} m x {:.3} m section, {:.3} m span (step = {} m)",
        config.height, config.base, config.length, config.resolution
    )
    .expect("writing to string cannot fail");

    // For a solid rectangle I = b h^3 / 12. Both stress formulas divide by it,
    // so it is the first value to check by hand.
    // See: https://en.wikipedia.org/wiki/Second_moment_of_area
    writeln!(
        &mut output,
        "Second moment of area: I = {:.4e} m^4",
        summary.second_moment_of_area
    )
    .expect("writing to string cannot fail");

    // Rows run across the section depth and columns along the span.
    writeln!(
        &mut output,
        "Stress grids: {} rows x {} columns",
        summary.shape.0, summary.shape.1
    )
    .expect("writing to string cannot fail");

    // Bending stress comes from the flexure formula sigma_x = -M y / I, so it
    // vanishes on the neutral axis (y = 0) and at the free end (x = 0, M = 0).
    write_field(&mut output, "Normal stress sigma_x", summary.sigma_x.as_ref());

    // Shear stress comes from tau = -V Q / (I t), evaluated once at mid-depth,
    // so min, max and mean coincide.
    // See: https://en.wikipedia.org/wiki/Shear_stress#Beam_shear
    write_field(&mut output, "Shear stress tau_xy", summary.tau_xy.as_ref());

    // Finish with the files so the reader can open the heatmaps next.
    for path in &summary.exported {
        writeln!(&mut output, "Heatmap written to {}", path.display())
            .expect("writing to string cannot fail");
    }

    output
}

/// Append one line describing a stress field.
fn write_field(output: &mut String, label: &str, field: Option<&GridSummary>) {
    match field {
        Some(field) => writeln!(
            output,
            "{label}: min = {:+.3e} Pa, max = {:+.3e} Pa, mean = {:+.3e} Pa",
            field.min, field.max, field.mean
        )
        .expect("writing to string cannot fail"),
        None => writeln!(output, "{label}: not available (empty grid)")
            .expect("writing to string cannot fail"),
    }
}
