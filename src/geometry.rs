//! Fundamental geometric types for beam modelling.

use std::mem;

use uom::si::f64::Length;
use uom::si::length::meter;

use crate::errors::GeometryError;

/// Rectangular cross-section measured in metres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    /// Depth of the section, measured along the bending plane.
    pub height: f64,
    /// Width of the section.
    pub base: f64,
}

impl Section {
    /// Create a [`Section`] with explicit dimensions.
    #[must_use]
    pub const fn new(height: f64, base: f64) -> Self {
        Self { height, base }
    }

    /// Cross-sectional area in square metres.
    #[must_use]
    pub fn area(self) -> f64 {
        self.base * self.height
    }

    /// Second moment of area about the centroidal axis, `b h^3 / 12`.
    ///
    /// # Examples
    /// ```
    /// use beamstress::Section;
    ///
    /// let section = Section::new(0.2, 1.0);
    /// assert!((section.second_moment_of_area() - 0.2_f64.powi(3) / 12.0).abs() < 1.0e-15);
    /// ```
    #[must_use]
    pub fn second_moment_of_area(self) -> f64 {
        self.base * self.height.powi(3) / 12.0
    }
}

/// Validated dimensions and sampling step of a cantilevered beam.
///
/// All values are in metres. Instances can only be created through
/// [`BeamGeometry::new`] or [`BeamGeometry::from_lengths`], so every field is
/// strictly positive and finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamGeometry {
    /// Cross-section dimensions.
    section: Section,
    /// Span in metres.
    length: f64,
    /// Sampling step in metres.
    resolution: f64,
}

impl Default for BeamGeometry {
    fn default() -> Self {
        Self {
            section: Section::new(1.0, 1.0),
            length: 1.0,
            resolution: 0.01,
        }
    }
}

impl BeamGeometry {
    /// Validate and store the beam dimensions.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] naming the first dimension that is zero,
    /// negative or not finite, or [`GeometryError::GridTooLarge`] when the
    /// resulting grids could not be allocated.
    ///
    /// # Examples
    /// ```
    /// use beamstress::BeamGeometry;
    ///
    /// let geometry = BeamGeometry::new(0.2, 1.0, 2.0, 0.01).expect("valid geometry");
    /// assert_eq!(geometry.grid_shape(), (20, 200));
    /// ```
    pub fn new(
        height: f64,
        base: f64,
        length: f64,
        resolution: f64,
    ) -> Result<Self, GeometryError> {
        if !is_positive(height) {
            return Err(GeometryError::NonPositiveHeight(height));
        }
        if !is_positive(base) {
            return Err(GeometryError::NonPositiveBase(base));
        }
        if !is_positive(length) {
            return Err(GeometryError::NonPositiveLength(length));
        }
        if !is_positive(resolution) {
            return Err(GeometryError::NonPositiveResolution(resolution));
        }
        check_grid_size(height / resolution, length / resolution)?;
        Ok(Self {
            section: Section::new(height, base),
            length,
            resolution,
        })
    }

    /// Build a geometry from dimensioned quantities in any length unit.
    ///
    /// # Errors
    ///
    /// Same conditions as [`BeamGeometry::new`] once the values are converted to metres.
    ///
    /// # Examples
    /// ```
    /// use beamstress::BeamGeometry;
    /// use uom::si::f64::Length;
    /// use uom::si::length::{centimeter, meter, millimeter};
    ///
    /// let geometry = BeamGeometry::from_lengths(
    ///     Length::new::<centimeter>(20.0),
    ///     Length::new::<meter>(1.0),
    ///     Length::new::<meter>(2.0),
    ///     Length::new::<millimeter>(10.0),
    /// )
    /// .expect("valid geometry");
    /// assert!((geometry.height() - 0.2).abs() < 1.0e-12);
    /// ```
    pub fn from_lengths(
        height: Length,
        base: Length,
        length: Length,
        resolution: Length,
    ) -> Result<Self, GeometryError> {
        Self::new(
            height.get::<meter>(),
            base.get::<meter>(),
            length.get::<meter>(),
            resolution.get::<meter>(),
        )
    }

    /// Rectangular cross-section of the beam.
    #[must_use]
    pub fn section(&self) -> Section {
        self.section
    }

    /// Section depth in metres.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.section.height
    }

    /// Section width in metres.
    #[must_use]
    pub fn base(&self) -> f64 {
        self.section.base
    }

    /// Span of the beam in metres.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Sampling step in metres.
    #[must_use]
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Number of `(rows, cols)` samples, truncating `height / resolution` and
    /// `length / resolution`.
    #[must_use]
    pub fn grid_shape(&self) -> (usize, usize) {
        let rows = (self.section.height / self.resolution) as usize;
        let cols = (self.length / self.resolution) as usize;
        (rows, cols)
    }

    /// Physical `(x, y)` position sampled by grid cell `[row, col]`.
    ///
    /// Indices are scaled by `length / resolution` and `height / resolution`
    /// rather than by the step itself; stress grids produced by this crate are
    /// reproducible against that convention.
    #[must_use]
    pub fn position(&self, row: usize, col: usize) -> (f64, f64) {
        let x = col as f64 * (self.length / self.resolution);
        let y = row as f64 * (self.section.height / self.resolution);
        (x, y)
    }
}

/// Strictly positive and finite.
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Number of samples along one axis, `None` when the ratio does not fit a `usize`.
fn axis_len(ratio: f64) -> Option<usize> {
    // usize::MAX as f64 rounds up to 2^64, so the strict bound keeps the cast exact.
    (ratio.is_finite() && ratio < usize::MAX as f64).then(|| ratio as usize)
}

/// Reject grids whose element count or byte size overflows `isize`.
///
/// Zero-length axes are counted as one, matching ndarray's own shape check.
fn check_grid_size(rows: f64, cols: f64) -> Result<(), GeometryError> {
    let too_large = GeometryError::GridTooLarge { rows, cols };
    let bytes = axis_len(rows)
        .zip(axis_len(cols))
        .and_then(|(rows, cols)| rows.max(1).checked_mul(cols.max(1)))
        .and_then(|cells| cells.checked_mul(mem::size_of::<f64>()))
        .ok_or(too_large)?;
    if bytes > isize::MAX as usize {
        return Err(too_large);
    }
    Ok(())
}
