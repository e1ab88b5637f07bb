//! Stress fields across the section of a cantilevered beam.

use std::path::Path;

use ndarray::{Array2, ArrayView2};

use crate::errors::{ExportError, GeometryError};
use crate::geometry::BeamGeometry;
use crate::loading::{
    FirstMomentOfArea, LoadModel, MomentFunction, RectangularFirstMoment, UniformLoadMoment,
};
use crate::render::HeatmapRenderer;
use crate::summary::GridSummary;

/// File written by [`Beam::export_sigma_x_heatmap`] when no other path is chosen.
pub const DEFAULT_SIGMA_X_PATH: &str = "sample-sigma-x.png";
/// File written by [`Beam::export_tau_xy_heatmap`] when no other path is chosen.
pub const DEFAULT_TAU_XY_PATH: &str = "sample-tau-xy.png";

/// Normal bending stress `-(M y) / I`.
#[must_use]
pub fn bending_stress(moment: f64, y: f64, second_moment_of_area: f64) -> f64 {
    -(moment * y) / second_moment_of_area
}

/// Transverse shear stress `-(V Q) / (I h)`.
#[must_use]
pub fn transverse_shear_stress(
    shear_force: f64,
    first_moment: f64,
    second_moment_of_area: f64,
    height: f64,
) -> f64 {
    -(shear_force * first_moment) / (second_moment_of_area * height)
}

/// Sampled normal and shear stress fields of a rectangular cantilever.
///
/// Both grids have one row per sampling step across the section height and one
/// column per step along the span. They start at zero and are populated by
/// [`Beam::fill_normal_stress_grid`] and [`Beam::fill_shear_stress_grid`].
#[derive(Clone, Debug)]
pub struct Beam<M = UniformLoadMoment, Q = RectangularFirstMoment> {
    /// Validated dimensions.
    geometry: BeamGeometry,
    /// Second moment of area, fixed at construction.
    second_moment_of_area: f64,
    /// Strategies used by the fills.
    load: LoadModel<M, Q>,
    /// Normal stress samples, `sigma_x`.
    sigma_x: Array2<f64>,
    /// Shear stress samples, `tau_xy`.
    tau_xy: Array2<f64>,
}

impl Default for Beam {
    fn default() -> Self {
        Self::new(BeamGeometry::default())
    }
}

impl Beam {
    /// Create a beam loaded by the sample load model.
    ///
    /// # Examples
    /// ```
    /// use beamstress::{Beam, BeamGeometry};
    ///
    /// let geometry = BeamGeometry::new(0.2, 1.0, 2.0, 0.01).expect("valid geometry");
    /// let beam = Beam::new(geometry);
    /// assert_eq!(beam.shape(), (20, 200));
    /// assert!(beam.sigma_x().iter().all(|&value| value == 0.0));
    /// ```
    #[must_use]
    pub fn new(geometry: BeamGeometry) -> Self {
        Self::with_load(geometry, LoadModel::default())
    }

    /// Validate the dimensions and create a beam loaded by the sample load model.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] when any dimension is not strictly positive.
    pub fn from_dimensions(
        height: f64,
        base: f64,
        length: f64,
        resolution: f64,
    ) -> Result<Self, GeometryError> {
        BeamGeometry::new(height, base, length, resolution).map(Self::new)
    }
}

impl<M, Q> Beam<M, Q>
where
    M: MomentFunction,
    Q: FirstMomentOfArea,
{
    /// Create a beam evaluated with a custom load model.
    pub fn with_load(geometry: BeamGeometry, load: LoadModel<M, Q>) -> Self {
        let shape = geometry.grid_shape();
        log::debug!(
            "allocating {}x{} stress grids for a {} m beam",
            shape.0,
            shape.1,
            geometry.length()
        );
        Self {
            geometry,
            second_moment_of_area: geometry.section().second_moment_of_area(),
            load,
            sigma_x: Array2::zeros(shape),
            tau_xy: Array2::zeros(shape),
        }
    }

    /// Dimensions of the beam.
    #[must_use]
    pub fn geometry(&self) -> &BeamGeometry {
        &self.geometry
    }

    /// Load model used by the fills.
    #[must_use]
    pub fn load(&self) -> &LoadModel<M, Q> {
        &self.load
    }

    /// Second moment of area of the section in metres to the fourth.
    #[must_use]
    pub fn second_moment_of_area(&self) -> f64 {
        self.second_moment_of_area
    }

    /// Shape `(rows, cols)` shared by both grids.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.sigma_x.dim()
    }

    /// Normal stress samples indexed `[row, col]`.
    #[must_use]
    pub fn sigma_x(&self) -> ArrayView2<'_, f64> {
        self.sigma_x.view()
    }

    /// Shear stress samples indexed `[row, col]`.
    #[must_use]
    pub fn tau_xy(&self) -> ArrayView2<'_, f64> {
        self.tau_xy.view()
    }

    /// Normal stress at distance `x` along the span and `y` from the neutral axis.
    #[must_use]
    pub fn normal_stress(&self, x: f64, y: f64) -> f64 {
        bending_stress(self.load.moment.moment(x), y, self.second_moment_of_area)
    }

    /// Shear stress under `shear_force` for a section of the given thickness.
    ///
    /// The first moment of area is always taken over the beam length at half the
    /// section height.
    #[must_use]
    pub fn shear_stress(&self, shear_force: f64, thickness: f64) -> f64 {
        shear_at(
            &self.geometry,
            &self.load.first_moment,
            self.second_moment_of_area,
            shear_force,
            thickness,
        )
    }

    /// Evaluate the normal stress at every grid cell.
    pub fn fill_normal_stress_grid(&mut self) {
        let Self {
            geometry,
            second_moment_of_area,
            load,
            sigma_x,
            ..
        } = self;
        for ((row, col), cell) in sigma_x.indexed_iter_mut() {
            let (x, y) = geometry.position(row, col);
            *cell = bending_stress(load.moment.moment(x), y, *second_moment_of_area);
        }
        log::debug!("filled sigma_x grid {:?}", sigma_x.dim());
    }

    /// Evaluate the shear stress at every grid cell.
    ///
    /// The shear force and the first moment of area do not depend on the cell,
    /// so every sample receives the same value.
    pub fn fill_shear_stress_grid(&mut self) {
        let Self {
            geometry,
            second_moment_of_area,
            load,
            tau_xy,
            ..
        } = self;
        let thickness = geometry.height();
        for cell in tau_xy.iter_mut() {
            *cell = shear_at(
                geometry,
                &load.first_moment,
                *second_moment_of_area,
                load.shear_force,
                thickness,
            );
        }
        log::debug!("filled tau_xy grid {:?}", tau_xy.dim());
    }

    /// Statistics of the normal stress grid, `None` when it is empty.
    #[must_use]
    pub fn sigma_x_summary(&self) -> Option<GridSummary> {
        GridSummary::of(self.sigma_x.view())
    }

    /// Statistics of the shear stress grid, `None` when it is empty.
    #[must_use]
    pub fn tau_xy_summary(&self) -> Option<GridSummary> {
        GridSummary::of(self.tau_xy.view())
    }

    /// Hand the normal stress grid to `renderer`.
    ///
    /// # Errors
    ///
    /// Propagates the renderer's [`ExportError`].
    pub fn export_sigma_x_heatmap<R: HeatmapRenderer + ?Sized>(
        &self,
        renderer: &R,
        path: impl AsRef<Path>,
    ) -> Result<(), ExportError> {
        renderer.render(self.sigma_x.view(), path.as_ref())
    }

    /// Hand the shear stress grid to `renderer`.
    ///
    /// # Errors
    ///
    /// Propagates the renderer's [`ExportError`].
    pub fn export_tau_xy_heatmap<R: HeatmapRenderer + ?Sized>(
        &self,
        renderer: &R,
        path: impl AsRef<Path>,
    ) -> Result<(), ExportError> {
        renderer.render(self.tau_xy.view(), path.as_ref())
    }
}

/// Shared by [`Beam::shear_stress`] and the grid fill, which cannot borrow the whole beam.
fn shear_at<Q: FirstMomentOfArea>(
    geometry: &BeamGeometry,
    first_moment: &Q,
    second_moment_of_area: f64,
    shear_force: f64,
    thickness: f64,
) -> f64 {
    let height = geometry.height();
    let q = first_moment.first_moment(geometry.length(), thickness, height / 2.0);
    transverse_shear_stress(shear_force, q, second_moment_of_area, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::cell::RefCell;
    use std::path::PathBuf;

    fn sample_beam() -> Beam {
        Beam::from_dimensions(0.2, 1.0, 2.0, 0.01).expect("valid geometry")
    }

    /// Records what it was asked to draw instead of writing files.
    #[derive(Default)]
    struct RecordingRenderer {
        calls: RefCell<Vec<(PathBuf, (usize, usize), f64)>>,
    }

    impl HeatmapRenderer for RecordingRenderer {
        fn render(&self, grid: ArrayView2<'_, f64>, path: &Path) -> Result<(), ExportError> {
            self.calls
                .borrow_mut()
                .push((path.to_path_buf(), grid.dim(), grid.sum()));
            Ok(())
        }
    }

    #[test]
    fn grids_start_at_zero_with_fixed_shape() {
        let beam = sample_beam();
        assert_eq!(beam.shape(), (20, 200));
        assert_eq!(beam.sigma_x().dim(), (20, 200));
        assert_eq!(beam.tau_xy().dim(), (20, 200));
        assert!(beam.sigma_x().iter().all(|&value| value == 0.0));
        assert!(beam.tau_xy().iter().all(|&value| value == 0.0));
    }

    #[test]
    fn default_beam_uses_unit_geometry() {
        let beam = Beam::default();
        assert_eq!(beam.shape(), (100, 100));
        assert_relative_eq!(beam.second_moment_of_area(), 1.0 / 12.0, max_relative = 1.0e-12);
        assert_eq!(*beam.load(), LoadModel::default());
    }

    #[test]
    fn invalid_dimensions_are_rejected() {
        let error = Beam::from_dimensions(0.2, 1.0, 2.0, -0.01).expect_err("negative step");
        assert_eq!(error, GeometryError::NonPositiveResolution(-0.01));
    }

    #[test]
    fn normal_stress_vanishes_at_free_end_and_neutral_axis() {
        let beam = sample_beam();
        for &y in &[0.0, 0.05, -0.1, 380.0] {
            assert_eq!(beam.normal_stress(0.0, y), 0.0);
        }
        for &x in &[0.0, 0.5, 2.0, 39_800.0] {
            assert_eq!(beam.normal_stress(x, 0.0), 0.0);
        }
    }

    #[test]
    fn normal_stress_follows_flexure_formula() {
        let beam = sample_beam();
        let i = beam.second_moment_of_area();
        let expected = -(0.5 * 1.5_f64.powi(2) * 10.0 * 0.1) / i;
        assert_relative_eq!(beam.normal_stress(1.5, 0.1), expected, max_relative = 1.0e-12);
    }

    #[test]
    fn fill_normal_stress_grid_uses_scaled_positions() {
        let mut beam = sample_beam();
        beam.fill_normal_stress_grid();
        let i = beam.second_moment_of_area();

        assert_eq!(beam.sigma_x()[[0, 199]], 0.0);
        assert_eq!(beam.sigma_x()[[7, 0]], 0.0);

        let x = 199.0 * (2.0 / 0.01);
        let y = 19.0 * (0.2 / 0.01);
        let moment = 0.5 * x * x * 10.0;
        assert_relative_eq!(beam.sigma_x()[[19, 199]], -(moment * y) / i, max_relative = 1.0e-12);
        assert_eq!(
            beam.sigma_x()[[19, 199]],
            bending_stress(UniformLoadMoment::default().moment(x), y, i)
        );
    }

    #[test]
    fn shear_grid_is_uniform() {
        let mut beam = sample_beam();
        beam.fill_shear_stress_grid();
        let i = beam.second_moment_of_area();
        let (height, length) = (0.2, 2.0);
        let expected = -(10.0 * (length * height * (height / 2.0))) / (i * height);
        for &value in beam.tau_xy().iter() {
            assert_eq!(value, beam.tau_xy()[[0, 0]]);
        }
        assert_relative_eq!(beam.tau_xy()[[0, 0]], expected, max_relative = 1.0e-12);
        assert_eq!(beam.tau_xy()[[0, 0]], beam.shear_stress(10.0, height));
    }

    #[test]
    fn fills_are_idempotent() {
        let mut beam = sample_beam();
        beam.fill_normal_stress_grid();
        beam.fill_shear_stress_grid();
        let sigma_x = beam.sigma_x().to_owned();
        let tau_xy = beam.tau_xy().to_owned();
        beam.fill_normal_stress_grid();
        beam.fill_shear_stress_grid();
        assert_eq!(beam.sigma_x(), sigma_x.view());
        assert_eq!(beam.tau_xy(), tau_xy.view());
    }

    #[test]
    fn custom_load_model_replaces_sample_policies() {
        let geometry = BeamGeometry::new(0.1, 0.05, 1.0, 0.05).expect("valid geometry");
        let load = LoadModel::new(|x: f64| 3.0 * x, 4.0, RectangularFirstMoment);
        let mut beam = Beam::with_load(geometry, load);
        beam.fill_normal_stress_grid();
        beam.fill_shear_stress_grid();

        let i = beam.second_moment_of_area();
        let (x, y) = geometry.position(1, 3);
        assert_eq!(beam.sigma_x()[[1, 3]], -(3.0 * x * y) / i);
        let q = 1.0 * 0.1 * 0.05;
        assert_relative_eq!(
            beam.tau_xy()[[0, 0]],
            -(4.0 * q) / (i * 0.1),
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn empty_grid_fills_are_no_ops() {
        let mut beam = Beam::from_dimensions(0.005, 1.0, 2.0, 0.01).expect("valid geometry");
        beam.fill_normal_stress_grid();
        beam.fill_shear_stress_grid();
        assert_eq!(beam.shape(), (0, 200));
        assert_eq!(beam.sigma_x_summary(), None);
    }

    #[test]
    fn exports_hand_each_grid_to_the_renderer() {
        let mut beam = sample_beam();
        beam.fill_normal_stress_grid();
        beam.fill_shear_stress_grid();

        let renderer = RecordingRenderer::default();
        beam.export_sigma_x_heatmap(&renderer, DEFAULT_SIGMA_X_PATH)
            .expect("recording never fails");
        beam.export_tau_xy_heatmap(&renderer, DEFAULT_TAU_XY_PATH)
            .expect("recording never fails");

        let calls = renderer.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, PathBuf::from("sample-sigma-x.png"));
        assert_eq!(calls[0].1, (20, 200));
        assert_eq!(calls[0].2, beam.sigma_x().sum());
        assert_eq!(calls[1].0, PathBuf::from("sample-tau-xy.png"));
        assert_eq!(calls[1].2, beam.tau_xy().sum());
    }

    #[test]
    fn summaries_report_grid_extremes() {
        let mut beam = sample_beam();
        beam.fill_shear_stress_grid();
        let summary = beam.tau_xy_summary().expect("grid is not empty");
        assert_eq!(summary.min, summary.max);
        assert_eq!(summary.rows, 20);
        assert_eq!(summary.cols, 200);
    }
}
