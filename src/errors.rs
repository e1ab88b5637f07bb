//! Error types produced while building beams, loading configuration or exporting heatmaps.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when beam dimensions are not physically meaningful.
///
/// Every dimension must be strictly positive and finite. The rejected value is
/// carried so callers can present actionable feedback to users.
///
/// # Examples
///
/// ```
/// use beamstress::{BeamGeometry, GeometryError};
///
/// let error = BeamGeometry::new(0.2, 1.0, 2.0, 0.0).expect_err("zero resolution is rejected");
/// assert_eq!(error, GeometryError::NonPositiveResolution(0.0));
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum GeometryError {
    /// Returned when the section height is zero, negative or not finite.
    #[error("height must be positive (received {0})")]
    NonPositiveHeight(f64),
    /// Returned when the section base is zero, negative or not finite.
    #[error("base must be positive (received {0})")]
    NonPositiveBase(f64),
    /// Returned when the span is zero, negative or not finite.
    #[error("length must be positive (received {0})")]
    NonPositiveLength(f64),
    /// Returned when the sampling step is zero, negative or not finite.
    #[error("resolution must be positive (received {0})")]
    NonPositiveResolution(f64),
    /// Returned when the sampling step is so fine that the stress grids cannot be allocated.
    #[error("resolution yields a {rows:e}x{cols:e} grid, too large to allocate")]
    GridTooLarge {
        /// Samples across the section height, `height / resolution`.
        rows: f64,
        /// Samples along the span, `length / resolution`.
        cols: f64,
    },
}

/// Error returned when a stress grid cannot be written out as a heatmap.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Returned when the grid has no cells to draw.
    #[error("cannot render an empty {rows}x{cols} grid")]
    EmptyGrid {
        /// Number of rows in the rejected grid.
        rows: usize,
        /// Number of columns in the rejected grid.
        cols: usize,
    },
    /// Returned when the image encoder or the filesystem rejects the output.
    #[error("failed to write heatmap to {}: {source}", .path.display())]
    Image {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying encoder or I/O error.
        #[source]
        source: image::ImageError,
    },
}

/// Error returned when a [`BeamConfig`](crate::BeamConfig) cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when the configuration file cannot be read.
    #[error("failed to read configuration {}: {source}", .path.display())]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Returned when the configuration is not valid JSON for [`BeamConfig`](crate::BeamConfig).
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// Returned when the configured dimensions are rejected.
    #[error("invalid beam geometry: {0}")]
    Geometry(#[from] GeometryError),
}
