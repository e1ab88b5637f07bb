//! Heatmap export for stress grids.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};
use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};

use crate::errors::ExportError;
use crate::summary::GridSummary;

/// Anchor colours of the scale, from the lowest to the highest value.
const SCALE: [[u8; 3]; 5] = [
    [68, 1, 84],
    [59, 82, 139],
    [33, 145, 140],
    [94, 201, 98],
    [253, 231, 37],
];

/// Background behind the colour legend.
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Something that turns a stress grid into an image on disk.
pub trait HeatmapRenderer {
    /// Draw `grid` and write it to `path`.
    ///
    /// # Errors
    ///
    /// Implementations report their own failures as [`ExportError`].
    fn render(&self, grid: ArrayView2<'_, f64>, path: &Path) -> Result<(), ExportError>;
}

/// Raster heatmap: a pseudocolour mesh with a vertical colour legend on its right.
///
/// Row `0` of the grid is drawn at the bottom of the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageHeatmap {
    /// Side of the square pixel block drawn for every grid cell.
    pub cell_size: u32,
    /// Width of the colour legend in pixels, `0` disables it.
    pub colorbar_width: u32,
    /// Blank space between the mesh and the legend.
    pub colorbar_gap: u32,
}

impl Default for ImageHeatmap {
    fn default() -> Self {
        Self {
            cell_size: 4,
            colorbar_width: 24,
            colorbar_gap: 8,
        }
    }
}

impl ImageHeatmap {
    /// Rasterise `grid` without writing it anywhere.
    ///
    /// Colours are normalised to the grid's own range; a constant grid is drawn
    /// with the middle colour of the scale.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::EmptyGrid`] when the grid has no cells.
    pub fn draw(&self, grid: ArrayView2<'_, f64>) -> Result<RgbImage, ExportError> {
        let (rows, cols) = grid.dim();
        let summary = GridSummary::of(grid).ok_or(ExportError::EmptyGrid { rows, cols })?;

        let cell = self.cell_size.max(1);
        let mesh_width = to_pixels(cols).saturating_mul(cell);
        let height = to_pixels(rows).saturating_mul(cell);
        let legend = if self.colorbar_width > 0 {
            self.colorbar_gap.saturating_add(self.colorbar_width)
        } else {
            0
        };
        let width = mesh_width.saturating_add(legend);

        let image = ImageBuffer::from_fn(width, height, |px, py| {
            if px < mesh_width {
                let col = (px / cell) as usize;
                let row = rows - 1 - (py / cell) as usize;
                colormap(normalise(grid[[row, col]], &summary))
            } else if px < mesh_width.saturating_add(self.colorbar_gap) {
                BACKGROUND
            } else if height > 1 {
                colormap(1.0 - f64::from(py) / f64::from(height - 1))
            } else {
                colormap(0.5)
            }
        });
        Ok(image)
    }
}

impl HeatmapRenderer for ImageHeatmap {
    fn render(&self, grid: ArrayView2<'_, f64>, path: &Path) -> Result<(), ExportError> {
        let image = self.draw(grid)?;
        image.save(path).map_err(|source| ExportError::Image {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!(
            "wrote {}x{} heatmap to {}",
            image.width(),
            image.height(),
            path.display()
        );
        Ok(())
    }
}

/// Colour of the scale at `t` in `[0, 1]`; values outside are clamped.
///
/// # Examples
/// ```
/// use beamstress::colormap;
/// use image::Rgb;
///
/// assert_eq!(colormap(0.0), Rgb([68, 1, 84]));
/// assert_eq!(colormap(1.0), Rgb([253, 231, 37]));
/// ```
#[must_use]
pub fn colormap(t: f64) -> Rgb<u8> {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.5 };
    let scaled = t * (SCALE.len() - 1) as f64;
    let lower = (scaled.floor() as usize).min(SCALE.len() - 2);
    let fraction = scaled - lower as f64;
    let (from, to) = (SCALE[lower], SCALE[lower + 1]);
    let mut channels = [0_u8; 3];
    for (channel, value) in channels.iter_mut().enumerate() {
        let start = f64::from(from[channel]);
        let end = f64::from(to[channel]);
        *value = (start + (end - start) * fraction).round() as u8;
    }
    Rgb(channels)
}

/// Position of `value` within the grid's range.
fn normalise(value: f64, summary: &GridSummary) -> f64 {
    let range = summary.range();
    if range > 0.0 && range.is_finite() {
        (value - summary.min) / range
    } else {
        0.5
    }
}

/// Clamp a cell count to the image crate's dimension type.
fn to_pixels(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};
    use tempfile::tempdir;

    #[test]
    fn colormap_interpolates_between_anchors() {
        assert_eq!(colormap(0.5), Rgb([33, 145, 140]));
        assert_eq!(colormap(-3.0), colormap(0.0));
        assert_eq!(colormap(7.0), colormap(1.0));
        assert_eq!(colormap(f64::NAN), colormap(0.5));
        // Halfway between the first two anchors.
        assert_eq!(colormap(0.125), Rgb([64, 42, 112]));
    }

    #[test]
    fn image_includes_mesh_gap_and_legend() {
        let renderer = ImageHeatmap {
            cell_size: 2,
            colorbar_width: 5,
            colorbar_gap: 3,
        };
        let grid = Array2::<f64>::zeros((4, 10));
        let image = renderer.draw(grid.view()).expect("grid is drawable");
        assert_eq!(image.width(), 10 * 2 + 3 + 5);
        assert_eq!(image.height(), 4 * 2);
        assert_eq!(*image.get_pixel(21, 0), BACKGROUND);
    }

    #[test]
    fn legend_can_be_disabled() {
        let renderer = ImageHeatmap {
            cell_size: 1,
            colorbar_width: 0,
            colorbar_gap: 8,
        };
        let grid = Array2::<f64>::zeros((3, 7));
        let image = renderer.draw(grid.view()).expect("grid is drawable");
        assert_eq!((image.width(), image.height()), (7, 3));
    }

    #[test]
    fn first_row_is_drawn_at_the_bottom() {
        let renderer = ImageHeatmap {
            cell_size: 1,
            colorbar_width: 1,
            colorbar_gap: 0,
        };
        let grid = array![[0.0, 0.0], [1.0, 1.0]];
        let image = renderer.draw(grid.view()).expect("grid is drawable");
        assert_eq!(*image.get_pixel(0, 1), colormap(0.0));
        assert_eq!(*image.get_pixel(0, 0), colormap(1.0));
        // Legend runs from high values at the top to low values at the bottom.
        assert_eq!(*image.get_pixel(2, 0), colormap(1.0));
        assert_eq!(*image.get_pixel(2, 1), colormap(0.0));
    }

    #[test]
    fn constant_grid_uses_middle_colour() {
        let renderer = ImageHeatmap::default();
        let grid = Array2::from_elem((2, 3), -42.0);
        let image = renderer.draw(grid.view()).expect("grid is drawable");
        assert_eq!(*image.get_pixel(0, 0), colormap(0.5));
        assert_eq!(*image.get_pixel(11, 7), colormap(0.5));
    }

    #[test]
    fn empty_grid_is_rejected() {
        let grid = Array2::<f64>::zeros((0, 5));
        let dir = tempdir().expect("temporary directory");
        let error = ImageHeatmap::default()
            .render(grid.view(), &dir.path().join("empty.png"))
            .expect_err("empty grid cannot be drawn");
        assert!(matches!(error, ExportError::EmptyGrid { rows: 0, cols: 5 }));
    }

    #[test]
    fn writes_png_to_disk() {
        let dir = tempdir().expect("temporary directory");
        let path = dir.path().join("heatmap.png");
        let grid = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let renderer = ImageHeatmap::default();
        renderer
            .render(grid.view(), &path)
            .expect("heatmap is written");
        let written = image::open(&path).expect("png can be read back");
        assert_eq!(written.width(), 3 * 4 + 8 + 24);
        assert_eq!(written.height(), 2 * 4);
    }

    #[test]
    fn unwritable_path_surfaces_image_error() {
        let dir = tempdir().expect("temporary directory");
        let path = dir.path().join("missing").join("heatmap.png");
        let grid = array![[1.0]];
        let error = ImageHeatmap::default()
            .render(grid.view(), &path)
            .expect_err("parent directory does not exist");
        match error {
            ExportError::Image { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
