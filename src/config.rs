//! Serialisable beam configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::beam::{Beam, DEFAULT_SIGMA_X_PATH, DEFAULT_TAU_XY_PATH};
use crate::errors::{ConfigError, GeometryError};
use crate::geometry::BeamGeometry;
use crate::loading::{LoadModel, RectangularFirstMoment, UniformLoadMoment, SAMPLE_LOAD};
use crate::render::ImageHeatmap;

/// Destinations of the exported heatmaps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPaths {
    /// Normal stress heatmap.
    pub sigma_x_path: PathBuf,
    /// Shear stress heatmap.
    pub tau_xy_path: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            sigma_x_path: PathBuf::from(DEFAULT_SIGMA_X_PATH),
            tau_xy_path: PathBuf::from(DEFAULT_TAU_XY_PATH),
        }
    }
}

/// Everything needed to build, load and export a [`Beam`].
///
/// Missing fields fall back to their defaults, so `{}` describes a unit beam
/// sampled every centimetre under the sample load model.
///
/// # Examples
/// ```
/// use beamstress::BeamConfig;
///
/// let config = BeamConfig::from_json_str(r#"{ "height": 0.2, "length": 2.0 }"#)
///     .expect("valid configuration");
/// let beam = config.build_beam().expect("valid geometry");
/// assert_eq!(beam.shape(), (20, 200));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamConfig {
    /// Section depth in metres.
    pub height: f64,
    /// Section width in metres.
    pub base: f64,
    /// Span in metres.
    pub length: f64,
    /// Sampling step in metres.
    pub resolution: f64,
    /// Distributed load in newtons per metre.
    pub load_intensity: f64,
    /// Shear force in newtons.
    pub shear_force: f64,
    /// Heatmap destinations.
    pub output: OutputPaths,
    /// Heatmap appearance.
    pub heatmap: ImageHeatmap,
}

impl Default for BeamConfig {
    fn default() -> Self {
        let geometry = BeamGeometry::default();
        Self {
            height: geometry.height(),
            base: geometry.base(),
            length: geometry.length(),
            resolution: geometry.resolution(),
            load_intensity: SAMPLE_LOAD,
            shear_force: SAMPLE_LOAD,
            output: OutputPaths::default(),
            heatmap: ImageHeatmap::default(),
        }
    }
}

impl BeamConfig {
    /// Parse a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] when the document does not describe a configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Json`] when its contents are invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded configuration from {}", path.display());
        Self::from_json_str(&contents)
    }

    /// Serialise back to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if serialisation fails.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validated geometry.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] when a dimension is not strictly positive.
    pub fn geometry(&self) -> Result<BeamGeometry, GeometryError> {
        BeamGeometry::new(self.height, self.base, self.length, self.resolution)
    }

    /// Sample load model scaled to the configured magnitudes.
    #[must_use]
    pub fn load_model(&self) -> LoadModel {
        LoadModel::new(
            UniformLoadMoment::new(self.load_intensity),
            self.shear_force,
            RectangularFirstMoment,
        )
    }

    /// Build a beam with zeroed grids.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] when a dimension is not strictly positive.
    pub fn build_beam(&self) -> Result<Beam, GeometryError> {
        Ok(Beam::with_load(self.geometry()?, self.load_model()))
    }
}
