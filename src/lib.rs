#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod beam;
mod config;
mod errors;
mod geometry;
mod loading;
mod render;
mod summary;

pub use beam::{
    bending_stress, transverse_shear_stress, Beam, DEFAULT_SIGMA_X_PATH, DEFAULT_TAU_XY_PATH,
};
pub use config::{BeamConfig, OutputPaths};
pub use errors::{ConfigError, ExportError, GeometryError};
pub use geometry::{BeamGeometry, Section};
pub use loading::{
    FirstMomentOfArea, LoadModel, MomentFunction, RectangularFirstMoment, UniformLoadMoment,
    SAMPLE_LOAD,
};
pub use render::{colormap, HeatmapRenderer, ImageHeatmap};
pub use summary::GridSummary;
